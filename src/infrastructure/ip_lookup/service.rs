//! IP lookup trait and error types.

use async_trait::async_trait;

/// Errors that can occur while querying the IP lookup service.
#[derive(Debug, thiserror::Error)]
pub enum IpLookupError {
    #[error("IP lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IP lookup returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for IP lookup operations.
pub type IpLookupResult<T> = Result<T, IpLookupError>;

/// Resolves the public IP address this service egresses from.
///
/// # Implementations
///
/// - [`crate::infrastructure::ip_lookup::IpifyClient`] - ipify-compatible HTTP API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Returns the public IP address as reported by the upstream service.
    async fn public_ip(&self) -> IpLookupResult<String>;
}
