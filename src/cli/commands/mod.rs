//! CLI command implementations

pub mod compare;
pub mod schema;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::error::CliError;
use crate::engine::DriftConfig;
use crate::import::{CsvImporter, ImportConfig, LoadResult};

/// Read a drift configuration from TOML, or use defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<DriftConfig, CliError> {
    let Some(path) = path else {
        return Ok(DriftConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::ConfigRead(path.to_path_buf(), e.to_string()))?;
    let config: DriftConfig = toml::from_str(&content)
        .map_err(|e| CliError::ConfigParse(path.to_path_buf(), e.to_string()))?;
    debug!(path = %path.display(), "Loaded drift config");
    Ok(config)
}

/// Load one CSV file, keeping at most `max_rows` data rows
pub fn load_table(path: &Path, max_rows: Option<usize>) -> Result<LoadResult, CliError> {
    let config = ImportConfig::builder().max_rows(max_rows).build();
    CsvImporter::with_config(config)
        .load_path(path)
        .map_err(|e| CliError::Import(PathBuf::from(path), e))
}
