//! Long URL validation.
//!
//! Validates that an input parses as an absolute HTTP(S) URL with a host.
//! The accepted string is stored verbatim - no normalization - so resolution
//! always returns exactly what the caller submitted.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates a long URL submitted for shortening.
///
/// # Rules
///
/// 1. Must parse as an absolute URL (relative references are rejected)
/// 2. Scheme must be `http` or `https`
/// 3. Must have a non-empty host
///
/// Rejects dangerous schemes like `javascript:`, `data:`, and `file:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes, and
/// [`UrlValidationError::MissingHost`] when the authority is absent.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
