//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database from `#[sqlx::test]`; set `DATABASE_URL`
//! and run with `cargo test -- --ignored`.

use chrono::Utc;
use linktrack::domain::entities::{NewClickEvent, NewUrlRecord};
use linktrack::domain::repositories::{ClickRepository, UrlRepository};
use linktrack::error::AppError;
use linktrack::infrastructure::persistence::{
    PgClickRepository, PgUrlRepository, TableNames, ensure_schema,
};
use linktrack::utils::user_agent::classify;
use sqlx::PgPool;
use std::sync::Arc;

async fn setup(pool: PgPool) -> (PgUrlRepository, PgClickRepository, Arc<PgPool>) {
    let tables = TableNames::with_prefix("test_");
    ensure_schema(&pool, &tables).await.unwrap();

    let pool = Arc::new(pool);
    (
        PgUrlRepository::new(pool.clone(), tables.clone()),
        PgClickRepository::new(pool.clone(), tables),
        pool,
    )
}

fn new_record(code: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord {
        short_code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_create_and_find(pool: PgPool) {
    let (urls, _, _) = setup(pool).await;

    let created = urls
        .create(new_record("abc123abc123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(created.clicks, 0);
    assert!(created.last_clicked.is_none());
    assert!(created.devices.is_empty());

    let by_code = urls.find_by_short_code("abc123abc123").await.unwrap().unwrap();
    assert_eq!(by_code.id, created.id);

    let by_url = urls
        .find_by_original_url("https://example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_url.short_code, "abc123abc123");

    assert!(urls.find_by_short_code("nope").await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let (urls, _, _) = setup(pool).await;

    urls.create(new_record("dup", "https://a.com")).await.unwrap();
    let result = urls.create(new_record("dup", "https://b.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_record_click_increments_counters(pool: PgPool) {
    let (urls, _, _) = setup(pool).await;
    let created = urls
        .create(new_record("clicky", "https://example.com"))
        .await
        .unwrap();

    urls.record_click(created.id, classify(Some("Windows Chrome")), Utc::now())
        .await
        .unwrap();
    let updated = urls
        .record_click(created.id, classify(Some("Mobile Safari iOS")), Utc::now())
        .await
        .unwrap();

    assert_eq!(updated.clicks, 2);
    assert!(updated.last_clicked.is_some());
    assert_eq!(updated.devices.get("Desktop"), Some(&1));
    assert_eq!(updated.devices.get("Mobile"), Some(&1));
    assert_eq!(updated.browsers.get("Chrome"), Some(&1));
    assert_eq!(updated.browsers.get("Safari"), Some(&1));
    assert_eq!(updated.operating_systems.get("Windows"), Some(&1));
    assert_eq!(updated.operating_systems.get("iOS"), Some(&1));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_clicks_are_not_lost(pool: PgPool) {
    let (urls, _, _) = setup(pool).await;
    let urls = Arc::new(urls);
    let created = urls
        .create(new_record("busy", "https://example.com"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let urls = urls.clone();
        handles.push(tokio::spawn(async move {
            urls.record_click(created.id, classify(Some("Firefox Linux")), Utc::now())
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let record = urls.find_by_short_code("busy").await.unwrap().unwrap();
    assert_eq!(record.clicks, 20);
    assert_eq!(record.browsers.get("Firefox"), Some(&20));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_record_click_missing(pool: PgPool) {
    let (urls, _, _) = setup(pool).await;

    let result = urls.record_click(9999, classify(None), Utc::now()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_update_and_list(pool: PgPool) {
    let (urls, _, _) = setup(pool).await;

    let first = urls.create(new_record("first", "https://1.com")).await.unwrap();
    urls.create(new_record("second", "https://2.com")).await.unwrap();

    let updated = urls
        .update_original_url(first.id, "https://one.com")
        .await
        .unwrap();
    assert_eq!(updated.original_url, "https://one.com");
    assert_eq!(updated.short_code, "first");

    let codes: Vec<String> = urls
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.short_code)
        .collect();
    assert_eq!(codes, vec!["second", "first"]);

    let missing = urls.update_original_url(9999, "https://x.com").await;
    assert!(matches!(missing.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_append_click_event(pool: PgPool) {
    let (urls, clicks, pool) = setup(pool).await;
    let created = urls
        .create(new_record("evt", "https://example.com"))
        .await
        .unwrap();

    let event = clicks
        .append(NewClickEvent {
            url_id: created.id,
            ip: Some("203.0.113.9".to_string()),
            user_agent: Some("curl/8.0".to_string()),
            referrer: "Direct".to_string(),
            country: "Unknown".to_string(),
            city: "Unknown".to_string(),
            device: "Desktop".to_string(),
            browser: "Other".to_string(),
            os: "Other".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(event.url_id, created.id);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM test_clicks WHERE url_id = $1")
        .bind(created.id)
        .fetch_one(pool.as_ref())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = false)]
#[ignore = "requires PostgreSQL"]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    let tables = TableNames::with_prefix("prod_");

    ensure_schema(&pool, &tables).await.unwrap();
    ensure_schema(&pool, &tables).await.unwrap();
}
