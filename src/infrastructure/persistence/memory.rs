//! In-process repository implementations.
//!
//! Used by the HTTP integration tests and for running the service without a
//! database. State lives behind `tokio` locks and is lost on drop.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{ClickEvent, NewClickEvent, NewUrlRecord, UrlRecord};
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::user_agent::UserAgentInfo;

/// URL records held in memory.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: RwLock<Vec<UrlRecord>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.short_code == short_code).cloned())
    }

    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.short_code == new_record.short_code) {
            return Err(AppError::conflict("Short code already exists"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = UrlRecord::new(
            id,
            new_record.short_code,
            new_record.original_url,
            Utc::now(),
        );
        records.push(record.clone());

        Ok(record)
    }

    async fn record_click(
        &self,
        id: i64,
        info: UserAgentInfo,
        at: DateTime<Utc>,
    ) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        record.apply_click(&info, at);

        Ok(record.clone())
    }

    async fn update_original_url(
        &self,
        id: i64,
        original_url: &str,
    ) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        record.original_url = original_url.to_string();

        Ok(record.clone())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}

/// Click events held in memory.
#[derive(Default)]
pub struct InMemoryClickRepository {
    events: RwLock<Vec<ClickEvent>>,
    next_id: AtomicI64,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all appended events, oldest first.
    pub async fn events(&self) -> Vec<ClickEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn append(&self, new_event: NewClickEvent) -> Result<ClickEvent, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let event = new_event.into_event(id, Utc::now());

        self.events.write().await.push(event.clone());

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::user_agent::classify;

    fn new_record(code: &str, url: &str) -> NewUrlRecord {
        NewUrlRecord {
            short_code: code.to_string(),
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUrlRepository::new();
        let created = repo
            .create(new_record("abc", "https://example.com"))
            .await
            .unwrap();

        let by_code = repo.find_by_short_code("abc").await.unwrap().unwrap();
        let by_url = repo
            .find_by_original_url("https://example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(by_code, created);
        assert_eq!(by_url, created);
        assert!(repo.find_by_short_code("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_code() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("abc", "https://a.com")).await.unwrap();

        let result = repo.create(new_record("abc", "https://b.com")).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_record_click_updates_counters() {
        let repo = InMemoryUrlRepository::new();
        let created = repo
            .create(new_record("abc", "https://example.com"))
            .await
            .unwrap();

        let updated = repo
            .record_click(created.id, classify(Some("Firefox on Linux")), Utc::now())
            .await
            .unwrap();

        assert_eq!(updated.clicks, 1);
        assert_eq!(updated.browsers.get("Firefox"), Some(&1));
        assert_eq!(
            repo.find_by_short_code("abc").await.unwrap().unwrap().clicks,
            1
        );
    }

    #[tokio::test]
    async fn test_record_click_missing_record() {
        let repo = InMemoryUrlRepository::new();
        let result = repo.record_click(99, classify(None), Utc::now()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = InMemoryUrlRepository::new();
        repo.create(new_record("first", "https://1.com")).await.unwrap();
        repo.create(new_record("second", "https://2.com")).await.unwrap();
        repo.create(new_record("third", "https://3.com")).await.unwrap();

        let codes: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.short_code)
            .collect();

        assert_eq!(codes, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_click_repository_appends() {
        let repo = InMemoryClickRepository::new();
        let event = repo
            .append(NewClickEvent {
                url_id: 1,
                ip: None,
                user_agent: None,
                referrer: "Direct".to_string(),
                country: "Unknown".to_string(),
                city: "Unknown".to_string(),
                device: "Desktop".to_string(),
                browser: "Other".to_string(),
                os: "Other".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(event.id, 1);
        assert_eq!(repo.events().await, vec![event]);
    }
}
