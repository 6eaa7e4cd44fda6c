//! Shorten and resolve orchestration.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::code_allocator::CodeAllocator;
use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_url;

/// Service for creating and resolving short URL mappings.
///
/// Each request is independent and stateless at this layer; all state lives
/// in the repository. No locks are held across the existence-check/insert
/// gap - the store's uniqueness constraint arbitrates concurrent writers.
pub struct MappingService<R: MappingRepository, G: CodeGenerator> {
    repository: Arc<R>,
    allocator: CodeAllocator<G>,
}

impl<R: MappingRepository, G: CodeGenerator> MappingService<R, G> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>, allocator: CodeAllocator<G>) -> Self {
        Self {
            repository,
            allocator,
        }
    }

    /// Shortens a long URL, persisting exactly one new mapping on success.
    ///
    /// Validates the URL, allocates a free short code against the repository,
    /// and inserts the pair. The stored URL is the caller's input verbatim,
    /// so resolving the returned code yields back the exact original string.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `long_url` is not an absolute HTTP(S) URL
    /// - [`AppError::CapacityExhausted`] if the allocator hits its attempt
    ///   ceiling without finding a free code
    /// - [`AppError::Conflict`] if a concurrent shorten wins the race to the
    ///   same pre-checked code; retrying the whole operation draws a fresh
    ///   code, so retry policy is left to the caller
    /// - [`AppError::Internal`] on storage failures
    pub async fn shorten(&self, long_url: String) -> Result<UrlMapping, AppError> {
        validate_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let short_code = self
            .allocator
            .allocate(|candidate| {
                let repository = Arc::clone(&self.repository);
                async move { repository.exists(&candidate).await }
            })
            .await?;

        self.repository
            .insert(NewMapping {
                short_code,
                long_url,
            })
            .await
    }

    /// Resolves a short code to its long URL.
    ///
    /// Read-only; a miss is a normal branch, not an exceptional one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty code and
    /// [`AppError::NotFound`] when no mapping matches.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if short_code.is_empty() {
            return Err(AppError::bad_request(
                "Short code cannot be empty",
                json!({}),
            ));
        }

        self.repository
            .find_by_code(short_code)
            .await?
            .map(|mapping| mapping.long_url)
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": short_code }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingRepository;
    use crate::utils::code_generator::HexCodeGenerator;
    use chrono::Utc;

    /// Always yields the same code, for forcing a deterministic race.
    struct FixedGenerator(&'static str);

    impl CodeGenerator for FixedGenerator {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }

    fn create_test_mapping(id: i64, code: &str, url: &str) -> UrlMapping {
        UrlMapping::new(id, code.to_string(), url.to_string(), Utc::now())
    }

    fn service_with(
        repository: MockMappingRepository,
    ) -> MappingService<MockMappingRepository, HexCodeGenerator> {
        MappingService::new(
            Arc::new(repository),
            CodeAllocator::new(HexCodeGenerator::default(), 10),
        )
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));

        mock_repo
            .expect_insert()
            .withf(|new_mapping| {
                new_mapping.short_code.len() == 7
                    && new_mapping.long_url == "https://example.com/very/long/path"
            })
            .times(1)
            .returning(|new_mapping| {
                Ok(create_test_mapping(
                    10,
                    &new_mapping.short_code,
                    &new_mapping.long_url,
                ))
            });

        let service = service_with(mock_repo);

        let mapping = service
            .shorten("https://example.com/very/long/path".to_string())
            .await
            .unwrap();

        assert_eq!(mapping.long_url, "https://example.com/very/long/path");
        assert_eq!(mapping.short_code.len(), 7);
        assert!(mapping.short_code.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_shorten_stores_url_verbatim() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));

        // No normalization: trailing fragment, casing, and port survive as-is.
        mock_repo
            .expect_insert()
            .withf(|new_mapping| new_mapping.long_url == "https://EXAMPLE.com:8443/Path#frag")
            .times(1)
            .returning(|new_mapping| {
                Ok(create_test_mapping(
                    1,
                    &new_mapping.short_code,
                    &new_mapping.long_url,
                ))
            });

        let service = service_with(mock_repo);

        let result = service
            .shorten("https://EXAMPLE.com:8443/Path#frag".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_exists().times(0);
        mock_repo.expect_insert().times(0);

        let service = service_with(mock_repo);

        let result = service.shorten("not-a-url".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_retries_past_collision() {
        let mut mock_repo = MockMappingRepository::new();

        let mut seen = 0;
        mock_repo.expect_exists().times(2).returning(move |_| {
            seen += 1;
            Ok(seen == 1)
        });

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|new_mapping| {
                Ok(create_test_mapping(
                    1,
                    &new_mapping.short_code,
                    &new_mapping.long_url,
                ))
            });

        let service = service_with(mock_repo);

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_capacity_exhausted_after_ceiling() {
        let mut mock_repo = MockMappingRepository::new();

        // A store that reports every candidate as taken.
        mock_repo.expect_exists().times(10).returning(|_| Ok(true));
        mock_repo.expect_insert().times(0);

        let service = service_with(mock_repo);

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::CapacityExhausted { .. }
        ));
    }

    #[tokio::test]
    async fn test_shorten_store_failure_propagates_without_retry() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_exists()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        mock_repo.expect_insert().times(0);

        let service = service_with(mock_repo);

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_losing_insert_race_surfaces_conflict() {
        let mut mock_repo = MockMappingRepository::new();

        // The pre-check sees the code as free, but another writer commits it
        // before our insert lands.
        mock_repo
            .expect_exists()
            .withf(|code| code == "c0ffee7")
            .times(1)
            .returning(|_| Ok(false));

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = MappingService::new(
            Arc::new(mock_repo),
            CodeAllocator::new(FixedGenerator("c0ffee7"), 10),
        );

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_resolve_hit() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "ab3f9c1")
            .times(1)
            .returning(|_| {
                Ok(Some(create_test_mapping(
                    5,
                    "ab3f9c1",
                    "https://example.com",
                )))
            });

        let service = service_with(mock_repo);

        let long_url = service.resolve("ab3f9c1").await.unwrap();

        assert_eq!(long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_miss_is_not_found() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(mock_repo);

        let result = service.resolve("0000000").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_empty_code_rejected() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_find_by_code().times(0);

        let service = service_with(mock_repo);

        let result = service.resolve("").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
