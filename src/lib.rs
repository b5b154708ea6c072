//! Data Drift SDK - Tabular data-drift detection
//!
//! Compares a baseline snapshot of a table against a current snapshot and
//! ranks every column by how much its distribution moved.
//!
//! Provides:
//! - CSV ingestion into typed tables
//! - Column-set validation between the two snapshots
//! - Schema inference (numeric, categorical, datetime, unknown)
//! - Distribution metrics (PSI, KS, Jensen-Shannon, chi-square, missingness)
//! - Drift scoring and ranking
//! - JSON, YAML and Markdown reports
//!
//! Library functions return `Result` or a neutral default rather than
//! panicking. [`js_divergence`] is the one exception: it panics when its two
//! probability vectors have different lengths.
//!
//! # Example
//!
//! ```rust
//! use data_drift_sdk::{Column, Table, compute_drift, validate_schema};
//!
//! let baseline = Table::new(vec![Column::from_strs(
//!     "plan",
//!     &[Some("free"), Some("free"), Some("free"), Some("pro")],
//! )])
//! .unwrap();
//! let current = Table::new(vec![Column::from_strs(
//!     "plan",
//!     &[Some("pro"), Some("pro"), Some("pro"), Some("free")],
//! )])
//! .unwrap();
//!
//! assert!(validate_schema(&baseline, &current).ok);
//! let result = compute_drift(&baseline, &current).unwrap();
//! assert_eq!(result.drifts[0].name, "plan");
//! assert!(result.drifts[0].score > 0.2);
//! ```

pub mod cli;
pub mod engine;
pub mod export;
pub mod import;
pub mod inference;
pub mod metrics;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use engine::{
    DriftConfig, DriftDetails, DriftEngine, DriftError, DriftResult, FeatureDrift, compute_drift,
};
pub use export::{
    DriftReport, ExportError, JsonReportExporter, MarkdownReportExporter, YamlReportExporter,
    write_report,
};
pub use import::{CsvImporter, ImportConfig, ImportError, LoadResult};
pub use inference::{ColumnKind, ColumnSchema, InferenceConfig, SchemaInferrer, infer_schema};
pub use metrics::{
    CategoricalShift, CategoryChange, MetricsConfig, categorical_shift, js_divergence,
    ks_pvalue, missingness_delta, psi_numeric,
};
pub use models::{Column, ColumnType, Table, TableError, Value};
pub use validation::{SchemaValidation, ValidationError, validate_schema};
