//! Domain layer containing business entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer; business logic lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
