//! Column classification types

use serde::{Deserialize, Serialize};

/// Statistical kind of a column
///
/// Decides which drift metrics apply to the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Numeric-typed column; PSI and KS apply
    Numeric,
    /// Low-cardinality text or boolean column; JS divergence and chi-square apply
    Categorical,
    /// Date/time column; only missingness is scored
    Datetime,
    /// High-cardinality text; only missingness is scored
    Unknown,
}

impl ColumnKind {
    /// Get the kind name as used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Datetime => "datetime",
            ColumnKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one baseline column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name
    pub name: String,
    /// Inferred statistical kind
    pub kind: ColumnKind,
    /// Number of distinct non-missing values
    pub distinct_count: usize,
    /// Fraction of missing entries (0.0 - 1.0)
    pub missing_rate: f64,
}
