//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted short-code-to-URL mapping.
///
/// Mappings are append-only: once created they are never updated or deleted.
/// The short code is unique across all mappings and immutable.
#[derive(Debug, Clone)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// The `id` and `created_at` fields are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub short_code: String,
    pub long_url: String,
}
