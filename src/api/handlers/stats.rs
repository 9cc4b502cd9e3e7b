//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click statistics of a short link.
///
/// # Endpoint
///
/// `GET /stats/{shortCode}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "shortUrl": "http://localhost:3000/Xk3v9a_LmQ2b",
///   "clicks": 2,
///   "createdAt": "2024-05-01T10:00:00Z",
///   "lastClicked": "2024-05-02T08:30:00Z",
///   "devices": { "Desktop": 1, "Mobile": 1 },
///   "browsers": { "Chrome": 2 },
///   "operatingSystems": { "Android": 1, "Windows": 1 }
/// }
/// ```
///
/// Reading statistics never counts as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.url_service.get_by_code(&short_code).await?;
    let short_url = state.url_service.short_url(&record.short_code);

    Ok(Json(StatsResponse::from_record(record, short_url)))
}
