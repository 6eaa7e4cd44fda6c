//! Shared application state injected into all handlers.
//!
//! The store handle is threaded explicitly through the service rather than
//! living in process-global state, so tests can substitute doubles for the
//! existence-check and insert operations.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::utils::code_generator::HexCodeGenerator;

/// The concrete mapping service wired for production.
pub type Service = MappingService<SqliteMappingRepository, HexCodeGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<Service>,
    /// Base URL used to compose externally visible short URLs.
    pub base_url: String,
    /// Pool handle kept for health checks.
    pub pool: SqlitePool,
}
