//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Row shape shared by all queries against the `urls` table.
#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.id, row.short_code, row.long_url, row.created_at)
    }
}

/// SQLite repository for mapping storage and retrieval.
///
/// The `urls` table carries a UNIQUE constraint on `short_code`; a violated
/// insert surfaces as [`AppError::Conflict`] via the `sqlx::Error`
/// conversion, which is how the losing side of a concurrent allocation race
/// is told apart from other storage failures.
pub struct SqliteMappingRepository {
    pool: SqlitePool,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO urls (short_code, long_url)
            VALUES (?1, ?2)
            RETURNING id, short_code, long_url, created_at
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.long_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM urls WHERE short_code = ?1")
            .bind(short_code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.is_some())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UrlMapping::from))
    }
}
