//! Repository trait for URL records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use crate::utils::user_agent::UserAgentInfo;

/// Repository interface for URL records and their counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its exact original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its short code. This is the redirect hot path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new record with zeroed counters and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is taken.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Applies one redirect to the record's counters and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn record_click(
        &self,
        id: i64,
        info: UserAgentInfo,
        at: DateTime<Utc>,
    ) -> Result<UrlRecord, AppError>;

    /// Overwrites the original URL of a record.
    ///
    /// Duplicate checks are the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn update_original_url(&self, id: i64, original_url: &str)
    -> Result<UrlRecord, AppError>;

    /// Lists every record, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;
}
