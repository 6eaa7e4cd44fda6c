//! Infrastructure layer: concrete integrations behind domain traits.

pub mod persistence;
