//! Business logic services for the application layer.

pub mod code_allocator;
pub mod mapping_service;

pub use code_allocator::{AllocationError, CodeAllocator};
pub use mapping_service::MappingService;
