//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation behind an injectable trait
//! - [`url_validator`] - Long URL validation

pub mod code_generator;
pub mod url_validator;
