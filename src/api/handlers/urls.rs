//! Admin handlers for listing and editing short links.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::shorten::ShortUrlResponse;
use crate::api::dto::stats::UrlListItem;
use crate::api::extract::UrlPayload;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short link with its statistics, newest first.
///
/// # Endpoint
///
/// `GET /admin/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlListItem>>, AppError> {
    let records = state.url_service.list_all().await?;

    let items = records
        .into_iter()
        .map(|record| {
            let short_url = state.url_service.short_url(&record.short_code);
            UrlListItem::from_record(record, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Points an existing short code at a new URL.
///
/// # Endpoint
///
/// `PUT /admin/urls/{shortCode}`
///
/// Accepts the same JSON or form body as `POST /shorten`. The short code,
/// counters and timestamps are left untouched.
///
/// # Errors
///
/// Returns 400 Bad Request if `originalUrl` is missing, or if it is already
/// mapped by a different short code (`"URL already exists"`).
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn update_url_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
    UrlPayload(payload): UrlPayload,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .update_original_url(&short_code, &payload.into_url())
        .await?;

    Ok(Json(ShortUrlResponse {
        short_url: state.url_service.short_url(&record.short_code),
        message: "URL updated successfully".to_string(),
    }))
}
