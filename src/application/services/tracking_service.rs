//! Click tracking for redirects.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::click_context::ClickContext;
use crate::domain::entities::{NewClickEvent, UrlRecord};
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::user_agent::classify;

/// Service resolving short codes and recording the click that follows.
///
/// Each tracked redirect updates the record's counters and appends one
/// [`crate::domain::entities::ClickEvent`]. The two writes are issued
/// concurrently with no cross-store transaction, so a failure of either may
/// leave the other applied.
pub struct TrackingService {
    urls: Arc<dyn UrlRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl TrackingService {
    pub fn new(urls: Arc<dyn UrlRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { urls, clicks }
    }

    /// Looks up the record a short code points at. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn resolve(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.urls
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Records one click against `record` and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if either write fails.
    pub async fn record_click(
        &self,
        record: &UrlRecord,
        ctx: ClickContext,
    ) -> Result<UrlRecord, AppError> {
        let info = classify(ctx.user_agent.as_deref());

        let event = NewClickEvent {
            url_id: record.id,
            ip: ctx.ip,
            user_agent: ctx.user_agent,
            referrer: ctx.referrer,
            country: ctx.country,
            city: ctx.city,
            device: info.device.to_string(),
            browser: info.browser.to_string(),
            os: info.os.to_string(),
        };

        let (updated, _) = tokio::try_join!(
            self.urls.record_click(record.id, info, Utc::now()),
            self.clicks.append(event),
        )?;

        debug!(
            short_code = %record.short_code,
            clicks = updated.clicks,
            device = %info.device,
            browser = %info.browser,
            os = %info.os,
            "Click recorded"
        );

        Ok(updated)
    }
}
