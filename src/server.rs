//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, schema setup, service wiring, and Axum server lifecycle.

use crate::application::services::{AuthService, TrackingService, UrlService};
use crate::config::Config;
use crate::infrastructure::ip_lookup::IpifyClient;
use crate::infrastructure::persistence::{
    PgClickRepository, PgUrlRepository, TableNames, ensure_schema,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Tables for the configured environment
/// - Services and the public IP lookup client
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or schema setup fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let tables = TableNames::with_prefix(config.environment.table_prefix());
    ensure_schema(&pool, &tables)
        .await
        .context("Failed to prepare database schema")?;

    let pool = Arc::new(pool);
    let url_repository = Arc::new(PgUrlRepository::new(pool.clone(), tables.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool.clone(), tables));

    let url_service = Arc::new(UrlService::new(url_repository.clone(), &config.base_url));
    let tracking_service = Arc::new(TrackingService::new(url_repository, click_repository));
    let auth_service = Arc::new(AuthService::new(&config.admin_password));

    let ip_lookup = Arc::new(
        IpifyClient::new(
            &config.ip_lookup_url,
            Duration::from_secs(config.ip_lookup_timeout),
        )
        .context("Failed to build IP lookup client")?,
    );

    let state = AppState::new(
        url_service,
        tracking_service,
        auth_service,
        ip_lookup,
        config.behind_proxy,
    );

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
