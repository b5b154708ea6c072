//! Validation functionality
//!
//! Checks that a baseline and a current table line up before drift is
//! computed between them.

pub mod columns;

pub use columns::{SchemaValidation, validate_schema};

/// Error during validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    SchemaMismatch(String),
}
