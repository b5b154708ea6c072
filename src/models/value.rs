//! Cell values and declared column types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Label used for missing values wherever a category name is needed
pub const MISSING_LABEL: &str = "nan";

/// Declared type of a column, as assigned by the ingestion layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Whole numbers
    Integer,
    /// Floating point numbers
    Float,
    /// True/false flags
    Boolean,
    /// Already-parsed date/time values
    DateTime,
    /// Free text (may still hold dates or categories)
    Text,
}

impl ColumnType {
    /// Whether the column is numeric-typed. Booleans are not.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Whether the column holds text-like values
    pub fn is_text(&self) -> bool {
        matches!(self, ColumnType::Text)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::DateTime => write!(f, "datetime"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

/// A single cell
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    Text(String),
}

impl Value {
    /// Null, or a float holding NaN
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Coerce to a float; anything that cannot be read as a number is missing
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) if !v.is_nan() => Some(*v),
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            _ => None,
        }
    }

    /// String form used to name and order categories
    pub fn label(&self) -> String {
        if self.is_missing() {
            return MISSING_LABEL.to_string();
        }
        match self {
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::DateTime(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
            Value::Text(s) => s.clone(),
            Value::Null => MISSING_LABEL.to_string(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
