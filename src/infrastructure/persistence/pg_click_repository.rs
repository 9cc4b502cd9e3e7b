//! PostgreSQL implementation of the click event repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::schema::TableNames;
use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only click log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
    tables: TableNames,
}

impl PgClickRepository {
    /// Creates a new repository over a connection pool and a table namespace.
    pub fn new(pool: Arc<PgPool>, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, new_event: NewClickEvent) -> Result<ClickEvent, AppError> {
        let sql = format!(
            r#"
            INSERT INTO {}
                (url_id, ip, user_agent, referrer, country, city, device, browser, os)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, clicked_at
            "#,
            self.tables.clicks
        );

        let (id, clicked_at): (i64, DateTime<Utc>) = sqlx::query_as(&sql)
            .bind(new_event.url_id)
            .bind(&new_event.ip)
            .bind(&new_event.user_agent)
            .bind(&new_event.referrer)
            .bind(&new_event.country)
            .bind(&new_event.city)
            .bind(&new_event.device)
            .bind(&new_event.browser)
            .bind(&new_event.os)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(new_event.into_event(id, clicked_at))
    }
}
