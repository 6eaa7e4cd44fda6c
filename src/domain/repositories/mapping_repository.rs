//! Repository trait for short URL mapping data access.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the persisted mapping store.
///
/// This is the single shared mutable resource of the service. Implementations
/// must enforce short-code uniqueness atomically at the storage layer: the
/// allocator's existence pre-check reduces collision frequency but is never
/// the correctness mechanism for concurrent inserts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping as a single atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists - the
    /// losing side of a check-then-insert race lands here.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;

    /// Reports whether a short code is already taken.
    ///
    /// Reflects all previously committed inserts at the time of the call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;
}
