//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-process repository implementations
//! - [`ip_lookup`] - Public IP lookup over HTTP

pub mod ip_lookup;
pub mod persistence;
