//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! Migrations are embedded from `./migrations` and applied at startup.

pub mod sqlite_mapping_repository;

pub use sqlite_mapping_repository::SqliteMappingRepository;
