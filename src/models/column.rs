//! Column model

use std::collections::HashSet;

use super::value::{ColumnType, Value};

/// A named, typed column of cells
///
/// Columns are immutable once built. The declared type comes from the
/// ingestion layer; individual cells may still be missing.
///
/// # Example
///
/// ```rust
/// use data_drift_sdk::models::{Column, ColumnType, Value};
///
/// let column = Column::new("age", ColumnType::Integer, vec![Value::Int(31), Value::Null]);
/// assert_eq!(column.missing_rate(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<Value>,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Integer column; `None` entries become missing
    pub fn from_ints(name: impl Into<String>, values: &[Option<i64>]) -> Self {
        let values = values.iter().map(|v| Value::from(*v)).collect();
        Self::new(name, ColumnType::Integer, values)
    }

    /// Float column; `None` and NaN entries are missing
    pub fn from_floats(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        let values = values.iter().map(|v| Value::from(*v)).collect();
        Self::new(name, ColumnType::Float, values)
    }

    /// Text column; `None` entries become missing
    pub fn from_strs(name: impl Into<String>, values: &[Option<&str>]) -> Self {
        let values = values.iter().map(|v| Value::from(*v)).collect();
        Self::new(name, ColumnType::Text, values)
    }

    /// Boolean column; `None` entries become missing
    pub fn from_bools(name: impl Into<String>, values: &[Option<bool>]) -> Self {
        let values = values.iter().map(|v| Value::from(*v)).collect();
        Self::new(name, ColumnType::Boolean, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Fraction of missing cells; an empty column has rate 0.0
    pub fn missing_rate(&self) -> f64 {
        crate::metrics::missing_rate(&self.values)
    }

    /// Number of distinct non-missing values
    pub fn distinct_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| !v.is_missing())
            .map(Value::label)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Non-missing values coerced to floats; non-numeric cells are dropped
    pub fn numeric_values(&self) -> Vec<f64> {
        crate::metrics::numeric_sample(&self.values)
    }

    /// Copy of the first `n` cells
    pub fn head(&self, n: usize) -> Self {
        Self {
            name: self.name.clone(),
            dtype: self.dtype,
            values: self.values.iter().take(n).cloned().collect(),
        }
    }
}
