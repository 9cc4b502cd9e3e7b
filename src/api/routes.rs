//! API route configuration.

use crate::api::handlers::{
    ip_handler, list_urls_handler, redirect_handler, shorten_handler, stats_handler,
    update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes open to anyone.
///
/// # Endpoints
///
/// - `GET  /ip`                 - Public IP of the service
/// - `POST /shorten`            - Create a short link
/// - `GET  /stats/{shortCode}`  - Click statistics for a link
/// - `GET  /{shortCode}`        - Redirect and record a click
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/ip", get(ip_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{short_code}", get(stats_handler))
        .route("/{short_code}", get(redirect_handler))
}

/// Admin routes, to be nested under `/admin` behind
/// [`crate::api::middleware::admin_auth`].
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short link
/// - `GET  /urls`               - List every link with statistics
/// - `PUT  /urls/{shortCode}`   - Point a link at a new URL
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{short_code}", put(update_url_handler))
}
