//! DTOs for per-link statistics and the admin listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{CategoryCounts, UrlRecord};

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
    pub devices: CategoryCounts,
    pub browsers: CategoryCounts,
    pub operating_systems: CategoryCounts,
}

impl StatsResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            original_url: record.original_url,
            short_url,
            clicks: record.clicks,
            created_at: record.created_at,
            last_clicked: record.last_clicked,
            devices: record.devices,
            browsers: record.browsers,
            operating_systems: record.operating_systems,
        }
    }
}

/// One entry of the admin listing; statistics plus the short code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListItem {
    pub short_code: String,
    #[serde(flatten)]
    pub stats: StatsResponse,
}

impl UrlListItem {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            short_code: record.short_code.clone(),
            stats: StatsResponse::from_record(record, short_url),
        }
    }
}
