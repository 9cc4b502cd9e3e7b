//! Shared-secret check for admin requests.

use crate::error::AppError;

/// Service validating the admin password presented with a request.
///
/// The configured secret is normalized once at construction; the presented
/// value is normalized the same way before an exact comparison.
pub struct AuthService {
    secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `secret` - configured admin password; must be non-empty
    pub fn new(secret: impl AsRef<str>) -> Self {
        Self {
            secret: normalize_secret(secret.as_ref()),
        }
    }

    /// Checks a presented password against the configured secret.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the password is absent or does
    /// not match.
    pub fn verify(&self, presented: Option<&str>) -> Result<(), AppError> {
        match presented {
            Some(value) if normalize_secret(value) == self.secret => Ok(()),
            _ => Err(AppError::unauthorized("Unauthorized")),
        }
    }
}

/// Trims surrounding whitespace and collapses the literal `$+` to `$`.
///
/// Applied to both sides so secrets copied through shells that escape `$`
/// compare equal.
pub fn normalize_secret(value: &str) -> String {
    value.trim().replace("$+", "$")
}
