//! Business logic services for the application layer.

pub mod auth_service;
pub mod tracking_service;
pub mod url_service;

pub use auth_service::AuthService;
pub use tracking_service::TrackingService;
pub use url_service::{Shortened, UrlService};
