//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL records and their aggregated counters
//! - [`ClickRepository`] - Append-only click events

pub mod click_repository;
pub mod url_repository;

pub use click_repository::ClickRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
