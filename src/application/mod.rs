//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and the allocation protocol. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Unique code allocation
//!   with bounded collision retry
//! - [`services::mapping_service::MappingService`] - Shorten and resolve
//!   orchestration

pub mod services;
