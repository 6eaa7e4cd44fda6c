//! HTTP server initialization and runtime setup.
//!
//! Handles database provisioning, service wiring, and the Axum server
//! lifecycle including graceful shutdown.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::application::services::{CodeAllocator, MappingService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::HexCodeGenerator;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Embedded migrations
/// - Mapping service with allocator
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await?;
    tracing::info!("Connected to the SQLite database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(SqliteMappingRepository::new(pool.clone()));
    let allocator = CodeAllocator::new(
        HexCodeGenerator::new(config.code_length),
        config.max_alloc_attempts,
    );
    let mapping_service = Arc::new(MappingService::new(repository, allocator));

    let state = AppState {
        mapping_service,
        base_url: config.base_url.clone(),
        pool: pool.clone(),
    };

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Closed the database connection");

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
