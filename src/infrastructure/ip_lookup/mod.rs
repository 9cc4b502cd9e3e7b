//! Lookup of the service's public IP address.
//!
//! Provides an [`IpLookup`] trait with one production implementation:
//! - [`IpifyClient`] - HTTP client for ipify-compatible endpoints

mod ipify;
mod service;

pub use ipify::IpifyClient;
pub use service::{IpLookup, IpLookupError, IpLookupResult};

#[cfg(test)]
pub use service::MockIpLookup;
