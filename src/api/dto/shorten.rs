//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single long URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, message = "long_url must not be empty"))]
    pub long_url: String,
}

/// Response for a successfully created mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The allocated short code.
    pub code: String,
    /// The full externally visible short URL, composed from the configured
    /// base URL.
    pub short_url: String,
}
