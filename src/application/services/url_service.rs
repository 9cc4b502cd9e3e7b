//! URL shortening, lookup and editing service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Outcome of a shortening request.
#[derive(Debug, Clone)]
pub struct Shortened {
    pub record: UrlRecord,
    /// `false` when the URL was already mapped and the existing record is returned.
    pub created: bool,
}

/// Service for creating, reading and editing URL records.
///
/// Owns the absolute base URL so every layer builds short links the same way.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// A trailing `/` on `base_url` is ignored.
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Shortens `original_url`, reusing the existing record for a known URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn shorten(&self, original_url: String) -> Result<Shortened, AppError> {
        if let Some(record) = self
            .repository
            .find_by_original_url(&original_url)
            .await?
        {
            debug!("URL already mapped to {}", record.short_code);
            return Ok(Shortened {
                record,
                created: false,
            });
        }

        let short_code = self.generate_unique_code().await?;

        let record = self
            .repository
            .create(NewUrlRecord {
                short_code,
                original_url,
            })
            .await?;

        info!(short_code = %record.short_code, "Short URL created");

        Ok(Shortened {
            record,
            created: true,
        })
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_by_code(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Points an existing short code at a new URL.
    ///
    /// Setting a record's URL to its current value is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short code is unknown.
    /// Returns [`AppError::Conflict`] if `new_url` is already mapped by a
    /// different short code; neither record is modified in that case.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn update_original_url(
        &self,
        short_code: &str,
        new_url: &str,
    ) -> Result<UrlRecord, AppError> {
        let record = self.get_by_code(short_code).await?;

        if let Some(existing) = self.repository.find_by_original_url(new_url).await?
            && existing.short_code != short_code
        {
            return Err(AppError::conflict("URL already exists"));
        }

        let updated = self
            .repository
            .update_original_url(record.id, new_url)
            .await?;

        info!(short_code = %updated.short_code, "Short URL updated");

        Ok(updated)
    }

    /// Lists every record, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_all().await
    }

    /// Builds the absolute short link for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }

    /// Generates a short code not yet present in the store.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code()?;

            if self.repository.find_by_short_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal("Failed to generate unique code"))
    }
}
