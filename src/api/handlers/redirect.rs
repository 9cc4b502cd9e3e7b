//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::encode_location;
use crate::utils::request_meta::click_context;

/// Redirects a short code to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{shortCode}`
///
/// # Request Flow
///
/// 1. Resolve the code; unknown codes stop here with nothing written
/// 2. Percent-encode the original URL into the `Location` value
/// 3. Build click metadata from the peer address and request headers
/// 4. Update the record's counters and append a click event
/// 5. Return 302 Found
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if either tracking write fails; no redirect is issued then.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.tracking_service.resolve(&short_code).await?;

    let location = HeaderValue::try_from(encode_location(&record.original_url)).map_err(|e| {
        AppError::internal(format!(
            "Stored URL for {} is not a valid header value: {}",
            record.short_code, e
        ))
    })?;

    let ctx = click_context(&headers, addr, state.behind_proxy);
    state.tracking_service.record_click(&record, ctx).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
