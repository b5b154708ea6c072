//! Schema command implementation

use std::path::Path;

use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_schema_table};
use crate::inference::{ColumnSchema, SchemaInferrer};

use super::{load_config, load_table};

/// Classify the columns of one CSV file
pub fn run_schema(
    file: &Path,
    max_rows: Option<usize>,
    config: Option<&Path>,
) -> Result<Vec<ColumnSchema>, CliError> {
    let config = load_config(config)?;
    let loaded = load_table(file, max_rows)?;
    Ok(SchemaInferrer::with_config(config.inference).infer(&loaded.table))
}

/// Handle the schema command
pub fn handle_schema(
    file: &Path,
    max_rows: Option<usize>,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let schema = run_schema(file, max_rows, config)?;

    let rendered = match format {
        OutputFormat::Table => format_schema_table(&schema),
        OutputFormat::Json => serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::Serialization(e.to_string()))?,
        OutputFormat::Yaml => {
            serde_yaml::to_string(&schema).map_err(|e| CliError::Serialization(e.to_string()))?
        }
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
