#![allow(dead_code)]

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tinylink::application::services::{CodeAllocator, MappingService};
use tinylink::infrastructure::persistence::SqliteMappingRepository;
use tinylink::state::AppState;
use tinylink::utils::code_generator::HexCodeGenerator;

/// Creates a migrated in-memory SQLite pool.
///
/// A single connection is pinned open for the pool's lifetime - each SQLite
/// in-memory connection is its own database, so the pool must never open a
/// second one or drop the first.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteMappingRepository::new(pool.clone()));
    let allocator = CodeAllocator::new(HexCodeGenerator::new(7), 10);
    let mapping_service = Arc::new(MappingService::new(repository, allocator));

    AppState {
        mapping_service,
        base_url: "http://localhost:3000".to_string(),
        pool,
    }
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, long_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
