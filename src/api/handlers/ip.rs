//! Handler reporting the service's public IP address.

use axum::{Json, extract::State};
use tracing::error;

use crate::api::dto::ip::IpResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the public IP address the service egresses from.
///
/// # Endpoint
///
/// `GET /ip`
///
/// # Errors
///
/// Returns 500 with `"Failed to get IP address"` if the lookup fails for any
/// reason; the cause is logged, not returned.
pub async fn ip_handler(State(state): State<AppState>) -> Result<Json<IpResponse>, AppError> {
    let ip = state.ip_lookup.public_ip().await.map_err(|e| {
        error!("Public IP lookup failed: {}", e);
        AppError::upstream("Failed to get IP address")
    })?;

    Ok(Json(IpResponse { ip }))
}
