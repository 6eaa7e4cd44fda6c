//! HTTP layer translating requests into domain operations.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
