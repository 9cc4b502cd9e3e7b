//! HTTP middleware for request processing and protection.
//!
//! Provides admin authentication and request tracing.

pub mod admin_auth;
pub mod tracing;
