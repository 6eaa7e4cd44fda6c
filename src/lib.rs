//! # tinylink
//!
//! A minimal URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Code allocation protocol and
//!   shorten/resolve orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Allocation Protocol
//!
//! Shortening draws a random fixed-length lowercase-hex code, pre-checks it
//! against the store, and retries on collision up to a bounded ceiling. The
//! pre-check and the insert are not atomic end-to-end; the storage UNIQUE
//! constraint on `short_code` is the final arbiter, and a losing concurrent
//! writer receives a distinguishable conflict.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional - defaults create ./database.sqlite and listen on :3000
//! export DATABASE_URL="sqlite://database.sqlite"
//! export BASE_URL="http://localhost:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AllocationError, CodeAllocator, MappingService};
    pub use crate::domain::entities::{NewMapping, UrlMapping};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, HexCodeGenerator};
}
