//! CSV import
//!
//! Reads a delimited file with a header row into a [`Table`], typing each
//! column from its cells.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ImportError;
use crate::models::{Column, ColumnType, Table, Value};

/// Cell contents treated as missing by default
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_TOKENS: &[&str] = &["true", "True", "TRUE"];
const FALSE_TOKENS: &[&str] = &["false", "False", "FALSE"];

/// Configuration for CSV import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Field delimiter
    pub delimiter: u8,
    /// Keep only the first N data rows
    pub max_rows: Option<usize>,
    /// Cell contents read as missing
    pub na_values: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_rows: None,
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ImportConfig {
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::default()
    }
}

/// Builder for ImportConfig
#[derive(Debug, Default)]
pub struct ImportConfigBuilder {
    config: ImportConfig,
}

impl ImportConfigBuilder {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    pub fn max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.config.max_rows = max_rows;
        self
    }

    /// Replace the missing-value tokens
    pub fn na_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.na_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> ImportConfig {
        self.config
    }
}

/// A table read from disk together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub table: Table,
    pub path: String,
}

/// CSV importer
#[derive(Debug, Clone, Default)]
pub struct CsvImporter {
    config: ImportConfig,
}

impl CsvImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Read a CSV file from disk
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<LoadResult, ImportError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ImportError::EmptyPath);
        }

        let file = File::open(path).map_err(|e| ImportError::Read(e.to_string()))?;
        let table = self.parse_reader(file)?;

        info!(
            path = %path.display(),
            rows = table.n_rows(),
            columns = table.n_cols(),
            "Loaded CSV"
        );

        Ok(LoadResult {
            table,
            path: path.display().to_string(),
        })
    }

    /// Read CSV text from any reader
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Table, ImportError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let names = column_names(reader.headers()?);
        if names.is_empty() {
            return Err(ImportError::NoColumns);
        }

        let na_values: HashSet<&str> = self.config.na_values.iter().map(String::as_str).collect();
        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        for (row, record) in reader.records().take(limit).enumerate() {
            let record = record?;
            if record.len() > names.len() {
                return Err(ImportError::Read(format!(
                    "row {} has {} fields, expected {}",
                    row + 2,
                    record.len(),
                    names.len()
                )));
            }
            for (i, column) in cells.iter_mut().enumerate() {
                // Short rows are padded with missing cells
                let cell = record.get(i).filter(|cell| !na_values.contains(cell));
                column.push(cell.map(str::to_string));
            }
        }

        let columns = names
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| build_column(name, cells))
            .collect();

        Ok(Table::new(columns)?)
    }
}

/// Header names with blanks filled in and duplicates suffixed `.1`, `.2`, ...
fn column_names(headers: &StringRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let base = if header.is_empty() {
                format!("Unnamed: {i}")
            } else {
                header.to_string()
            };
            let mut name = base.clone();
            let mut suffix = 1;
            while !seen.insert(name.clone()) {
                name = format!("{base}.{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

fn detect_type(cells: &[Option<String>]) -> ColumnType {
    let present: Vec<&str> = cells.iter().flatten().map(String::as_str).collect();
    if present.is_empty() {
        return ColumnType::Float;
    }
    if present.iter().all(|c| c.trim().parse::<i64>().is_ok()) {
        ColumnType::Integer
    } else if present.iter().all(|c| c.trim().parse::<f64>().is_ok()) {
        ColumnType::Float
    } else if present
        .iter()
        .all(|c| TRUE_TOKENS.contains(c) || FALSE_TOKENS.contains(c))
    {
        ColumnType::Boolean
    } else {
        ColumnType::Text
    }
}

fn build_column(name: String, cells: Vec<Option<String>>) -> Column {
    let dtype = detect_type(&cells);
    debug!(column = %name, dtype = %dtype, "Typed CSV column");

    let values = cells
        .into_iter()
        .map(|cell| match cell {
            None => Value::Null,
            Some(cell) => typed_value(cell, dtype),
        })
        .collect();

    Column::new(name, dtype, values)
}

fn typed_value(cell: String, dtype: ColumnType) -> Value {
    let parsed = match dtype {
        ColumnType::Integer => cell.trim().parse::<i64>().ok().map(Value::Int),
        ColumnType::Float => cell.trim().parse::<f64>().ok().map(Value::from),
        ColumnType::Boolean => Some(Value::Bool(TRUE_TOKENS.contains(&cell.as_str()))),
        ColumnType::DateTime | ColumnType::Text => None,
    };
    parsed.unwrap_or(Value::Text(cell))
}
