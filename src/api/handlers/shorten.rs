//! Handler for link shortening endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::ShortUrlResponse;
use crate::api::extract::UrlPayload;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link, or returns the existing one for a known URL.
///
/// # Endpoints
///
/// - `POST /shorten`
/// - `POST /admin/shorten` (requires `x-admin-password`)
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path" }
/// ```
///
/// or the form `originalUrl=https%3A%2F%2Fexample.com%2Fsome%2Flong%2Fpath`.
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3000/Xk3v9a_LmQ2b",
///   "message": "URL shortened successfully"
/// }
/// ```
///
/// `message` is `"URL already exists"` when the URL was mapped before; the
/// original short link is returned and nothing is written.
///
/// # Errors
///
/// Returns 400 Bad Request if `originalUrl` is missing or empty, or the body
/// cannot be decoded.
pub async fn shorten_handler(
    State(state): State<AppState>,
    UrlPayload(payload): UrlPayload,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let shortened = state.url_service.shorten(payload.into_url()).await?;

    let message = if shortened.created {
        "URL shortened successfully"
    } else {
        "URL already exists"
    };

    Ok(Json(ShortUrlResponse {
        short_url: state.url_service.short_url(&shortened.record.short_code),
        message: message.to_string(),
    }))
}
