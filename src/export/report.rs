//! Drift report model

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{DriftResult, FeatureDrift};
use crate::inference::ColumnSchema;

/// Default number of features carried in a report
pub const DEFAULT_REPORT_TOP_N: usize = 25;

/// Snapshot of a drift run ready for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    /// UTC timestamp, second precision, `Z` suffix
    pub generated_at: String,
    pub baseline_path: String,
    pub current_path: String,
    pub top_n: usize,
    pub schema: Vec<ColumnSchema>,
    /// The `top_n` highest-scoring features
    pub top_drifts: Vec<FeatureDrift>,
}

impl DriftReport {
    /// Build a report stamped with the current time
    pub fn new(
        result: &DriftResult,
        baseline_path: impl Into<String>,
        current_path: impl Into<String>,
        top_n: usize,
    ) -> Self {
        Self {
            generated_at: now_iso(),
            baseline_path: baseline_path.into(),
            current_path: current_path.into(),
            top_n,
            schema: result.schema.clone(),
            top_drifts: result.top(top_n).to_vec(),
        }
    }

    /// Replace the timestamp, e.g. for reproducible output
    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = generated_at.into();
        self
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_now_iso_shape() {
        let stamp = now_iso();
        assert_eq!(stamp.len(), 20);
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[test]
    fn test_report_truncates_to_top_n() {
        let result = DriftResult::default();
        let report = DriftReport::new(&result, "a.csv", "b.csv", 25);
        assert_eq!(report.top_n, 25);
        assert!(report.top_drifts.is_empty());
        assert_eq!(report.baseline_path, "a.csv");
    }
}
