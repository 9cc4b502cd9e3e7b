//! Repository trait for click events.

use async_trait::async_trait;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::error::AppError;

/// Append-only store of redirect events.
///
/// No read operations are exposed: analytics are served from the counters on
/// [`crate::domain::entities::UrlRecord`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn append(&self, new_event: NewClickEvent) -> Result<ClickEvent, AppError>;
}
