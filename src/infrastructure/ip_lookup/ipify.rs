//! ipify-compatible implementation of [`IpLookup`].

use async_trait::async_trait;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

use super::service::{IpLookup, IpLookupError, IpLookupResult};

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

/// HTTP client for endpoints answering `{"ip": "<address>"}`,
/// such as `https://api.ipify.org?format=json`.
pub struct IpifyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IpifyClient {
    /// Creates a client for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> IpLookupResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl IpLookup for IpifyClient {
    async fn public_ip(&self) -> IpLookupResult<String> {
        debug!("Querying public IP from {}", self.endpoint);

        let body: IpifyResponse = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_ip(&body.ip)
    }
}

/// Validates the address returned by the upstream service.
fn parse_ip(raw: &str) -> IpLookupResult<String> {
    raw.trim()
        .parse::<IpAddr>()
        .map(|ip| ip.to_string())
        .map_err(|_| IpLookupError::InvalidResponse(format!("not an IP address: {raw:?}")))
}
