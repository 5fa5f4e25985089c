//! Foundational data structures, error types, and shape-type definitions.

pub mod error;
pub mod models;
pub mod shape_type;
