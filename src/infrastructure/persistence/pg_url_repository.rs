//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use super::schema::TableNames;
use crate::domain::entities::{CategoryCounts, NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::user_agent::UserAgentInfo;

const URL_COLUMNS: &str = "id, short_code, original_url, clicks, created_at, last_clicked, \
     unique_visitors, countries, devices, browsers, operating_systems";

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
    last_clicked: Option<DateTime<Utc>>,
    unique_visitors: i64,
    countries: Json<CategoryCounts>,
    devices: Json<CategoryCounts>,
    browsers: Json<CategoryCounts>,
    operating_systems: Json<CategoryCounts>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        Self {
            id: row.id,
            short_code: row.short_code,
            original_url: row.original_url,
            clicks: row.clicks,
            created_at: row.created_at,
            last_clicked: row.last_clicked,
            unique_visitors: row.unique_visitors,
            countries: row.countries.0,
            devices: row.devices.0,
            browsers: row.browsers.0,
            operating_systems: row.operating_systems.0,
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// Queries are built at runtime because the table name depends on the
/// deployment environment. All values are bound as parameters.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
    tables: TableNames,
}

impl PgUrlRepository {
    /// Creates a new repository over a connection pool and a table namespace.
    pub fn new(pool: Arc<PgPool>, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE original_url = $1 ORDER BY created_at ASC LIMIT 1",
            URL_COLUMNS, self.tables.urls
        );

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE short_code = $1",
            URL_COLUMNS, self.tables.urls
        );

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let sql = format!(
            "INSERT INTO {} (short_code, original_url) VALUES ($1, $2) RETURNING {}",
            self.tables.urls, URL_COLUMNS
        );

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(&new_record.short_code)
            .bind(&new_record.original_url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn record_click(
        &self,
        id: i64,
        info: UserAgentInfo,
        at: DateTime<Utc>,
    ) -> Result<UrlRecord, AppError> {
        // Single-statement increments; concurrent redirects do not lose updates.
        let sql = format!(
            r#"
            UPDATE {} SET
                clicks = clicks + 1,
                last_clicked = $2,
                devices = jsonb_set(devices, ARRAY[$3::text],
                    to_jsonb(COALESCE((devices ->> $3::text)::bigint, 0) + 1)),
                browsers = jsonb_set(browsers, ARRAY[$4::text],
                    to_jsonb(COALESCE((browsers ->> $4::text)::bigint, 0) + 1)),
                operating_systems = jsonb_set(operating_systems, ARRAY[$5::text],
                    to_jsonb(COALESCE((operating_systems ->> $5::text)::bigint, 0) + 1))
            WHERE id = $1
            RETURNING {}
            "#,
            self.tables.urls, URL_COLUMNS
        );

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(id)
            .bind(at)
            .bind(info.device.as_str())
            .bind(info.browser.as_str())
            .bind(info.os.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(UrlRecord::from).ok_or_else(|| {
            tracing::warn!(id, "Click recorded for a missing URL record");
            AppError::not_found("URL not found")
        })
    }

    async fn update_original_url(
        &self,
        id: i64,
        original_url: &str,
    ) -> Result<UrlRecord, AppError> {
        let sql = format!(
            "UPDATE {} SET original_url = $2 WHERE id = $1 RETURNING {}",
            self.tables.urls, URL_COLUMNS
        );

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(id)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(UrlRecord::from)
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY created_at DESC, id DESC",
            URL_COLUMNS, self.tables.urls
        );

        let rows = sqlx::query_as::<_, UrlRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }
}
