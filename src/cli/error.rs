//! CLI error type

use std::path::PathBuf;

use crate::engine::DriftError;
use crate::export::ExportError;
use crate::import::ImportError;
use crate::validation::ValidationError;

/// Errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to load {0}: {1}")]
    Import(PathBuf, ImportError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Drift computation failed: {0}")]
    Drift(#[from] DriftError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Failed to read config {0}: {1}")]
    ConfigRead(PathBuf, String),

    #[error("Invalid config {0}: {1}")]
    ConfigParse(PathBuf, String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
