//! DTOs for creating and editing short links.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body carrying a target URL, as JSON or an urlencoded form.
///
/// Used by `POST /shorten`, `POST /admin/shorten` and `PUT /admin/urls/{shortCode}`.
/// The URL is stored verbatim; no format check or normalization is applied.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OriginalUrlRequest {
    #[serde(rename = "originalUrl")]
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub original_url: Option<String>,
}

impl OriginalUrlRequest {
    /// Returns the validated URL.
    ///
    /// Call only after [`Validate::validate`] has succeeded.
    pub fn into_url(self) -> String {
        self.original_url.unwrap_or_default()
    }
}

/// Response for create and update requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub short_url: String,
    pub message: String,
}
