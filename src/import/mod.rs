//! Import functionality
//!
//! Loads tabular data from delimited text files into [`Table`]s.
//!
//! [`Table`]: crate::models::Table

pub mod csv_importer;

use crate::models::TableError;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("CSV path is empty.")]
    EmptyPath,
    #[error("Could not read CSV: {0}")]
    Read(String),
    #[error("CSV has zero columns.")]
    NoColumns,
    #[error(transparent)]
    Table(#[from] TableError),
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Read(e.to_string())
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::Read(e.to_string())
    }
}

pub use csv_importer::{
    CsvImporter, DEFAULT_NA_VALUES, ImportConfig, ImportConfigBuilder, LoadResult,
};
