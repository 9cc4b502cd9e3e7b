//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Front-end page (`index.html` from the static dir)
//! - `/static/*`            - Static assets
//! - `GET  /ip`, `POST /shorten`, `GET /stats/{shortCode}`, `GET /{shortCode}` - Public API
//! - `/admin/*`             - Admin API (`x-admin-password` required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Shared admin secret on `/admin`
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::middleware::{admin_auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Builds the router with all routes and middleware, without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding `index.html` and the assets served under `/static`
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    let admin_router = api::routes::admin_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admin_auth::layer,
    ));

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest("/admin", admin_router)
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] with trailing slashes trimmed.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, static_dir))
}
