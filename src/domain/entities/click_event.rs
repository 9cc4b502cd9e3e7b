//! Click event entity representing a single redirect.

use chrono::{DateTime, Utc};

/// An immutable record of one redirect.
///
/// `url_id` is a weak reference to the owning [`super::UrlRecord`]: there is no
/// foreign key and deleting a record would not cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub id: i64,
    pub url_id: i64,
    pub timestamp: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: String,
    pub country: String,
    pub city: String,
    pub device: String,
    pub browser: String,
    pub os: String,
}

/// Input data for appending a click event.
///
/// The timestamp is assigned by the store at insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClickEvent {
    pub url_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: String,
    pub country: String,
    pub city: String,
    pub device: String,
    pub browser: String,
    pub os: String,
}

impl NewClickEvent {
    /// Attaches a store-assigned id and timestamp.
    pub fn into_event(self, id: i64, timestamp: DateTime<Utc>) -> ClickEvent {
        ClickEvent {
            id,
            url_id: self.url_id,
            timestamp,
            ip: self.ip,
            user_agent: self.user_agent,
            referrer: self.referrer,
            country: self.country,
            city: self.city,
            device: self.device,
            browser: self.browser,
            os: self.os,
        }
    }
}
