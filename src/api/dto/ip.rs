//! DTO for the public IP endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IpResponse {
    pub ip: String,
}
