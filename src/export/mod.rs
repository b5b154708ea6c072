//! Export functionality
//!
//! Provides exporters for drift reports:
//! - JSON (pretty-printed)
//! - YAML
//! - Markdown (ranked summary table)

pub mod json;
pub mod markdown;
pub mod report;

use std::path::{Path, PathBuf};

use tracing::info;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// File name of the JSON report written by [`write_report`]
pub const JSON_REPORT_FILE: &str = "drift_report.json";
/// File name of the Markdown report written by [`write_report`]
pub const MARKDOWN_REPORT_FILE: &str = "drift_report.md";

/// Write the JSON and Markdown reports into `dir`
///
/// The directory is created if needed. Returns the JSON and Markdown paths.
pub fn write_report(dir: &Path, report: &DriftReport) -> Result<(PathBuf, PathBuf), ExportError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| ExportError::Io(format!("Failed to create directory: {}", e)))?;
    }

    let json_path = dir.join(JSON_REPORT_FILE);
    let json = JsonReportExporter::new().export(report)?;
    std::fs::write(&json_path, json)
        .map_err(|e| ExportError::Io(format!("Failed to write {}: {}", JSON_REPORT_FILE, e)))?;

    let markdown_path = dir.join(MARKDOWN_REPORT_FILE);
    let markdown = MarkdownReportExporter::new().export(report);
    std::fs::write(&markdown_path, markdown).map_err(|e| {
        ExportError::Io(format!("Failed to write {}: {}", MARKDOWN_REPORT_FILE, e))
    })?;

    info!(dir = %dir.display(), features = report.top_drifts.len(), "Wrote drift report");
    Ok((json_path, markdown_path))
}

// Re-export for convenience
pub use json::{JsonReportExporter, YamlReportExporter};
pub use markdown::{MarkdownReportExporter, format_significant, key_metric};
pub use report::{DEFAULT_REPORT_TOP_N, DriftReport, now_iso};
