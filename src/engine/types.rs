//! Drift result types

use serde::{Deserialize, Serialize};

use crate::inference::{ColumnKind, ColumnSchema};
use crate::metrics::{CategoricalShift, CategoryChange};

/// Kind-specific metrics behind a feature's score
///
/// Serializes as a flat map: `{psi, ks_pvalue}` for numeric features,
/// `{js_divergence, chi2_pvalue, top_changes}` for categorical ones and `{}`
/// for everything else. The accessors substitute 0.0 for absent distances
/// and 1.0 for absent p-values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DriftDetails {
    Numeric { psi: f64, ks_pvalue: f64 },
    Categorical(CategoricalShift),
    Empty {},
}

impl DriftDetails {
    pub fn psi(&self) -> f64 {
        match self {
            DriftDetails::Numeric { psi, .. } => *psi,
            _ => 0.0,
        }
    }

    pub fn ks_pvalue(&self) -> f64 {
        match self {
            DriftDetails::Numeric { ks_pvalue, .. } => *ks_pvalue,
            _ => 1.0,
        }
    }

    pub fn js_divergence(&self) -> f64 {
        match self {
            DriftDetails::Categorical(shift) => shift.js_divergence,
            _ => 0.0,
        }
    }

    pub fn chi2_pvalue(&self) -> f64 {
        match self {
            DriftDetails::Categorical(shift) => shift.chi2_pvalue,
            _ => 1.0,
        }
    }

    pub fn top_changes(&self) -> &[CategoryChange] {
        match self {
            DriftDetails::Categorical(shift) => &shift.top_changes,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DriftDetails::Empty {})
    }
}

/// Drift verdict for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDrift {
    /// Column name
    pub name: String,
    /// Kind the column was classified as
    pub kind: ColumnKind,
    /// Current missing rate minus baseline missing rate
    pub missing_delta: f64,
    /// Composite score; higher means more drift
    pub score: f64,
    pub details: DriftDetails,
}

/// Output of a drift run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftResult {
    /// Baseline column classifications, in column order
    pub schema: Vec<ColumnSchema>,
    /// Per-feature results, highest score first
    pub drifts: Vec<FeatureDrift>,
}

impl DriftResult {
    /// The `n` highest-scoring features
    pub fn top(&self, n: usize) -> &[FeatureDrift] {
        &self.drifts[..n.min(self.drifts.len())]
    }

    /// Result for one feature by exact name
    pub fn get(&self, name: &str) -> Option<&FeatureDrift> {
        self.drifts.iter().find(|d| d.name == name)
    }

    /// Features whose name contains `query`, ignoring case, in rank order
    ///
    /// A blank query matches every feature.
    pub fn filter(&self, query: &str) -> Vec<&FeatureDrift> {
        let query = query.trim().to_lowercase();
        self.drifts
            .iter()
            .filter(|d| query.is_empty() || d.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.drifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drifts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drift(name: &str, score: f64) -> FeatureDrift {
        FeatureDrift {
            name: name.to_string(),
            kind: ColumnKind::Unknown,
            missing_delta: 0.0,
            score,
            details: DriftDetails::Empty {},
        }
    }

    #[test]
    fn test_details_serialize_flat() {
        let numeric = DriftDetails::Numeric {
            psi: 0.5,
            ks_pvalue: 0.01,
        };
        let json = serde_json::to_value(&numeric).unwrap();
        assert_eq!(json, serde_json::json!({"psi": 0.5, "ks_pvalue": 0.01}));

        let empty = serde_json::to_string(&DriftDetails::Empty {}).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_details_deserialize_by_shape() {
        let numeric: DriftDetails =
            serde_json::from_str(r#"{"psi": 0.1, "ks_pvalue": 0.9}"#).unwrap();
        assert_eq!(numeric.psi(), 0.1);

        let categorical: DriftDetails = serde_json::from_str(
            r#"{"chi2_pvalue": 0.02, "js_divergence": 0.13, "top_changes": []}"#,
        )
        .unwrap();
        assert_eq!(categorical.chi2_pvalue(), 0.02);

        let empty: DriftDetails = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_accessor_defaults() {
        let empty = DriftDetails::Empty {};
        assert_eq!(empty.psi(), 0.0);
        assert_eq!(empty.ks_pvalue(), 1.0);
        assert_eq!(empty.js_divergence(), 0.0);
        assert_eq!(empty.chi2_pvalue(), 1.0);
        assert!(empty.top_changes().is_empty());
    }

    #[test]
    fn test_result_helpers() {
        let result = DriftResult {
            schema: Vec::new(),
            drifts: vec![drift("Income", 0.9), drift("age", 0.5), drift("income_band", 0.1)],
        };

        assert_eq!(result.top(2).len(), 2);
        assert_eq!(result.top(10).len(), 3);
        assert_eq!(result.get("age").map(|d| d.score), Some(0.5));
        assert!(result.get("AGE").is_none());

        let names: Vec<&str> = result.filter("INCOME").iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Income", "income_band"]);
        assert_eq!(result.filter("  ").len(), 3);
    }
}
