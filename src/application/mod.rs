//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers call. They never touch request or response types.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Shortening, lookup and editing of URL records
//! - [`services::tracking_service::TrackingService`] - Click tracking on redirect
//! - [`services::auth_service::AuthService`] - Admin password check

pub mod services;
