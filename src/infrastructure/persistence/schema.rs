//! Table naming and schema bootstrap.
//!
//! Each deployment environment writes to its own pair of tables
//! (`prod_urls`/`prod_clicks` or `test_urls`/`test_clicks`). Because the names
//! are chosen at runtime, the schema is created here with idempotent DDL
//! instead of static migrations.

use sqlx::PgPool;

/// Names of the tables used by the PostgreSQL repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub urls: String,
    pub clicks: String,
}

impl TableNames {
    /// Builds table names from a namespace prefix such as `"prod_"`.
    ///
    /// The prefix is interpolated into SQL and must come from trusted
    /// configuration, never from a request.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            urls: format!("{prefix}urls"),
            clicks: format!("{prefix}clicks"),
        }
    }
}

/// Creates the tables and indexes if they do not exist yet.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub async fn ensure_schema(pool: &PgPool, tables: &TableNames) -> Result<(), sqlx::Error> {
    let urls = &tables.urls;
    let clicks = &tables.clicks;

    let statements = [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {urls} (
                id                BIGSERIAL PRIMARY KEY,
                short_code        TEXT NOT NULL,
                original_url      TEXT NOT NULL,
                clicks            BIGINT NOT NULL DEFAULT 0,
                created_at        TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                last_clicked      TIMESTAMPTZ,
                unique_visitors   BIGINT NOT NULL DEFAULT 0,
                countries         JSONB NOT NULL DEFAULT '{{}}'::jsonb,
                devices           JSONB NOT NULL DEFAULT '{{}}'::jsonb,
                browsers          JSONB NOT NULL DEFAULT '{{}}'::jsonb,
                operating_systems JSONB NOT NULL DEFAULT '{{}}'::jsonb
            )
            "#
        ),
        format!("CREATE UNIQUE INDEX IF NOT EXISTS {urls}_short_code_key ON {urls} (short_code)"),
        format!("CREATE INDEX IF NOT EXISTS {urls}_original_url_idx ON {urls} (original_url)"),
        format!("CREATE INDEX IF NOT EXISTS {urls}_created_at_idx ON {urls} (created_at DESC)"),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {clicks} (
                id          BIGSERIAL PRIMARY KEY,
                url_id      BIGINT NOT NULL,
                clicked_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                ip          TEXT,
                user_agent  TEXT,
                referrer    TEXT NOT NULL,
                country     TEXT NOT NULL,
                city        TEXT NOT NULL,
                device      TEXT NOT NULL,
                browser     TEXT NOT NULL,
                os          TEXT NOT NULL
            )
            "#
        ),
        format!("CREATE INDEX IF NOT EXISTS {clicks}_url_id_idx ON {clicks} (url_id)"),
    ];

    for statement in &statements {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema ready (tables: {}, {})", urls, clicks);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_with_prefix() {
        let tables = TableNames::with_prefix("prod_");
        assert_eq!(tables.urls, "prod_urls");
        assert_eq!(tables.clicks, "prod_clicks");
    }
}
