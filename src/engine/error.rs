//! Error types for drift computation

use thiserror::Error;

/// Errors that can occur during drift computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriftError {
    /// A classified baseline column is absent from a table
    #[error("Column '{0}' is missing from the current table")]
    MissingColumn(String),
}
