//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! is a separate struct ([`NewMapping`]) so store-assigned fields (`id`,
//! `created_at`) never appear half-initialized.

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};
