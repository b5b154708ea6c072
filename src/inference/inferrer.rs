//! Schema inference engine

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::InferenceConfig;
use super::formats::datetime_confidence;
use super::types::{ColumnKind, ColumnSchema};
use crate::models::{Column, ColumnType, Table, Value};

/// Statistics from schema inference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceStats {
    /// Total columns classified
    pub columns: usize,
    pub numeric: usize,
    pub categorical: usize,
    pub datetime: usize,
    pub unknown: usize,
}

impl InferenceStats {
    /// Tally kinds over a finished classification
    pub fn from_schema(schema: &[ColumnSchema]) -> Self {
        let mut stats = Self {
            columns: schema.len(),
            ..Self::default()
        };
        for column in schema {
            match column.kind {
                ColumnKind::Numeric => stats.numeric += 1,
                ColumnKind::Categorical => stats.categorical += 1,
                ColumnKind::Datetime => stats.datetime += 1,
                ColumnKind::Unknown => stats.unknown += 1,
            }
        }
        stats
    }
}

/// Schema inference engine
///
/// Classifies every column of a table into a [`ColumnKind`] using its
/// declared type and, for text columns, a sample of its content.
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    config: InferenceConfig,
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new schema inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Classify every column, in column order
    pub fn infer(&self, table: &Table) -> Vec<ColumnSchema> {
        table
            .columns()
            .iter()
            .map(|column| self.infer_column(column))
            .collect()
    }

    /// Classify a single column
    pub fn infer_column(&self, column: &Column) -> ColumnSchema {
        let missing_rate = column.missing_rate();
        let distinct_count = column.distinct_count();

        let kind = if self.looks_like_datetime(column) {
            ColumnKind::Datetime
        } else if column.dtype().is_numeric() {
            ColumnKind::Numeric
        } else if column.dtype() == ColumnType::Boolean {
            ColumnKind::Categorical
        } else if distinct_count <= self.config.max_categorical_unique {
            ColumnKind::Categorical
        } else {
            ColumnKind::Unknown
        };

        debug!(
            column = column.name(),
            kind = %kind,
            distinct_count,
            missing_rate,
            "Classified column"
        );

        ColumnSchema {
            name: column.name().to_string(),
            kind,
            distinct_count,
            missing_rate,
        }
    }

    /// Declared date/time columns qualify outright; text columns qualify when
    /// enough of their leading non-missing values parse as dates
    fn looks_like_datetime(&self, column: &Column) -> bool {
        match column.dtype() {
            ColumnType::DateTime => true,
            ColumnType::Text => {
                let sample: Vec<String> = column
                    .values()
                    .iter()
                    .filter(|v| !v.is_missing())
                    .take(self.config.datetime_sample_size)
                    .map(Value::label)
                    .collect();
                if sample.is_empty() {
                    return false;
                }
                let sample: Vec<&str> = sample.iter().map(String::as_str).collect();
                datetime_confidence(&sample) >= self.config.datetime_threshold
            }
            _ => false,
        }
    }
}

/// Classify every column of `table`, in column order
pub fn infer_schema(table: &Table, config: &InferenceConfig) -> Vec<ColumnSchema> {
    SchemaInferrer::with_config(config.clone()).infer(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: Vec<Column>) -> Table {
        Table::new(columns).unwrap()
    }

    #[test]
    fn test_infer_basic_kinds() {
        let t = table(vec![
            Column::from_ints("a", &[Some(1), Some(2), Some(3)]),
            Column::from_strs("b", &[Some("x"), Some("y"), Some("z")]),
        ]);

        let schema = SchemaInferrer::new().infer(&t);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema[0].name, "a");
        assert_eq!(schema[0].kind, ColumnKind::Numeric);
        assert_eq!(schema[1].kind, ColumnKind::Categorical);
        assert_eq!(schema[1].distinct_count, 3);
    }

    #[test]
    fn test_infer_iso_dates() {
        let t = table(vec![Column::from_strs(
            "when",
            &[Some("2024-01-01"), Some("2024-01-02"), None, Some("2024-01-03")],
        )]);

        let schema = SchemaInferrer::new().infer(&t);
        assert_eq!(schema[0].kind, ColumnKind::Datetime);
        assert_eq!(schema[0].missing_rate, 0.25);
    }

    #[test]
    fn test_infer_month_name_dates() {
        let t = table(vec![Column::from_strs(
            "when",
            &[Some("Jan 15, 2024"), Some("15 Feb 2024"), Some("March 2024"), Some("2024-04")],
        )]);

        let schema = SchemaInferrer::new().infer(&t);
        assert_eq!(schema[0].kind, ColumnKind::Datetime);
    }

    #[test]
    fn test_datetime_threshold() {
        // 4 of 5 parse: exactly at the 80% threshold
        let t = table(vec![Column::from_strs(
            "when",
            &[
                Some("2024-01-01"),
                Some("2024-01-02"),
                Some("2024-01-03"),
                Some("2024-01-04"),
                Some("later"),
            ],
        )]);
        assert_eq!(SchemaInferrer::new().infer(&t)[0].kind, ColumnKind::Datetime);

        // 3 of 5 parse: below threshold, falls back to cardinality rule
        let t = table(vec![Column::from_strs(
            "when",
            &[
                Some("2024-01-01"),
                Some("2024-01-02"),
                Some("2024-01-03"),
                Some("soon"),
                Some("later"),
            ],
        )]);
        assert_eq!(SchemaInferrer::new().infer(&t)[0].kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_high_cardinality_text_is_unknown() {
        let labels: Vec<String> = (0..51).map(|i| format!("id-{i}")).collect();
        let values: Vec<Option<&str>> = labels.iter().map(|s| Some(s.as_str())).collect();
        let t = table(vec![Column::from_strs("id", &values)]);

        let schema = SchemaInferrer::new().infer(&t);
        assert_eq!(schema[0].kind, ColumnKind::Unknown);
        assert_eq!(schema[0].distinct_count, 51);

        let config = InferenceConfig::builder().max_categorical_unique(100).build();
        let schema = infer_schema(&t, &config);
        assert_eq!(schema[0].kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_boolean_is_categorical() {
        let t = table(vec![Column::from_bools("flag", &[Some(true), Some(false), None])]);
        assert_eq!(SchemaInferrer::new().infer(&t)[0].kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_all_missing_numeric_stays_numeric() {
        let t = table(vec![Column::from_floats("empty", &[None, None, None])]);

        let schema = SchemaInferrer::new().infer(&t);
        assert_eq!(schema[0].kind, ColumnKind::Numeric);
        assert_eq!(schema[0].distinct_count, 0);
        assert_eq!(schema[0].missing_rate, 1.0);
    }

    #[test]
    fn test_all_missing_text_is_categorical() {
        let t = table(vec![Column::from_strs("empty", &[None, None])]);
        assert_eq!(SchemaInferrer::new().infer(&t)[0].kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_stats() {
        let t = table(vec![
            Column::from_ints("a", &[Some(1)]),
            Column::from_strs("b", &[Some("x")]),
            Column::from_strs("c", &[Some("2024-05-01")]),
        ]);

        let stats = InferenceStats::from_schema(&SchemaInferrer::new().infer(&t));
        assert_eq!(stats.columns, 3);
        assert_eq!(stats.numeric, 1);
        assert_eq!(stats.categorical, 1);
        assert_eq!(stats.datetime, 1);
        assert_eq!(stats.unknown, 0);
    }
}
