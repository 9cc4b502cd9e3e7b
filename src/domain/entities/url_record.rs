//! URL record entity: a short code mapping plus its aggregated click counters.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::utils::user_agent::UserAgentInfo;

/// Occurrence count per category label (e.g. `"Chrome" -> 12`).
pub type CategoryCounts = BTreeMap<String, i64>;

/// A shortened URL with denormalised click analytics.
///
/// `unique_visitors` and `countries` are reserved: they are stored and
/// returned by the repositories but no operation updates them.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
    pub unique_visitors: i64,
    pub countries: CategoryCounts,
    pub devices: CategoryCounts,
    pub browsers: CategoryCounts,
    pub operating_systems: CategoryCounts,
}

impl UrlRecord {
    /// Creates a record with zeroed counters.
    pub fn new(id: i64, short_code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            original_url,
            clicks: 0,
            created_at,
            last_clicked: None,
            unique_visitors: 0,
            countries: CategoryCounts::new(),
            devices: CategoryCounts::new(),
            browsers: CategoryCounts::new(),
            operating_systems: CategoryCounts::new(),
        }
    }

    /// Applies one redirect to the counters.
    ///
    /// Increments `clicks`, sets `last_clicked` and bumps the device, browser
    /// and OS entries, creating them at 1 when absent.
    pub fn apply_click(&mut self, info: &UserAgentInfo, at: DateTime<Utc>) {
        self.clicks += 1;
        self.last_clicked = Some(at);

        *self.devices.entry(info.device.to_string()).or_insert(0) += 1;
        *self.browsers.entry(info.browser.to_string()).or_insert(0) += 1;
        *self
            .operating_systems
            .entry(info.os.to_string())
            .or_insert(0) += 1;
    }
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub original_url: String,
}
