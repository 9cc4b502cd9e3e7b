//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL records in PostgreSQL
//! - [`PgClickRepository`] - Click log in PostgreSQL
//! - [`InMemoryUrlRepository`], [`InMemoryClickRepository`] - In-process stores
//!
//! Table names are resolved per environment, see [`schema`].

pub mod memory;
pub mod pg_click_repository;
pub mod pg_url_repository;
pub mod schema;

pub use memory::{InMemoryClickRepository, InMemoryUrlRepository};
pub use pg_click_repository::PgClickRepository;
pub use pg_url_repository::PgUrlRepository;
pub use schema::{TableNames, ensure_schema};
