//! Short code generation.
//!
//! Codes are drawn from the OS random number generator and encoded as URL-safe
//! base64, so they can be used as a path segment without escaping.

use base64::Engine as _;

use crate::error::AppError;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 9;

/// Generates a random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character code over `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("random source failed: {e}")))?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Returns true if every character of `code` is in the URL-safe alphabet.
pub fn is_url_safe(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
