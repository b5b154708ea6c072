//! JSON and YAML report exporters

use super::ExportError;
use super::report::DriftReport;

/// Exporter for pretty-printed JSON reports
#[derive(Debug, Default)]
pub struct JsonReportExporter;

impl JsonReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export a report to JSON
    pub fn export(&self, report: &DriftReport) -> Result<String, ExportError> {
        serde_json::to_string_pretty(report).map_err(|e| {
            ExportError::Serialization(format!("Failed to serialize report: {}", e))
        })
    }
}

/// Exporter for YAML reports
#[derive(Debug, Default)]
pub struct YamlReportExporter;

impl YamlReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export a report to YAML
    pub fn export(&self, report: &DriftReport) -> Result<String, ExportError> {
        serde_yaml::to_string(report).map_err(|e| {
            ExportError::Serialization(format!("Failed to serialize report: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DriftResult;

    fn report() -> DriftReport {
        DriftReport::new(&DriftResult::default(), "base.csv", "cur.csv", 25)
            .with_generated_at("2024-05-01T12:00:00Z")
    }

    #[test]
    fn test_json_keys() {
        let json = JsonReportExporter::new().export(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["generated_at"], "2024-05-01T12:00:00Z");
        assert_eq!(value["baseline_path"], "base.csv");
        assert_eq!(value["top_n"], 25);
        assert!(value["schema"].is_array());
        assert!(value["top_drifts"].is_array());
    }

    #[test]
    fn test_yaml_round_trips() {
        let yaml = YamlReportExporter::new().export(&report()).unwrap();
        let parsed: DriftReport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, report());
    }
}
