//! Compare command implementation

use std::path::PathBuf;

use tracing::info;

use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_drift_table, format_load_summary};
use crate::engine::{DriftEngine, DriftResult, FeatureDrift};
use crate::export::{DEFAULT_REPORT_TOP_N, DriftReport, write_report};
use crate::import::LoadResult;
use crate::validation::validate_schema;

use super::{load_config, load_table};

/// Rows shown in the ranked table by default
pub const DEFAULT_TABLE_TOP_N: usize = 30;

/// Options for the compare command
#[derive(Debug, Clone)]
pub struct CompareArgs {
    pub baseline: PathBuf,
    pub current: PathBuf,
    pub max_rows: Option<usize>,
    pub config: Option<PathBuf>,
    pub top_n: usize,
    pub filter: Option<String>,
    pub format: OutputFormat,
    pub export_dir: Option<PathBuf>,
    pub report_top_n: usize,
}

impl CompareArgs {
    pub fn new(baseline: impl Into<PathBuf>, current: impl Into<PathBuf>) -> Self {
        Self {
            baseline: baseline.into(),
            current: current.into(),
            max_rows: None,
            config: None,
            top_n: DEFAULT_TABLE_TOP_N,
            filter: None,
            format: OutputFormat::Table,
            export_dir: None,
            report_top_n: DEFAULT_REPORT_TOP_N,
        }
    }
}

/// Both loaded tables and the drift computed between them
#[derive(Debug, Clone)]
pub struct Comparison {
    pub baseline: LoadResult,
    pub current: LoadResult,
    pub result: DriftResult,
}

impl Comparison {
    /// Features to display: filtered by name when a query is given, then capped
    pub fn visible(&self, filter: Option<&str>, top_n: usize) -> Vec<&FeatureDrift> {
        let mut drifts = self.result.filter(filter.unwrap_or(""));
        drifts.truncate(top_n);
        drifts
    }
}

/// Load, validate and score both files, and write reports if requested
pub fn run_compare(args: &CompareArgs) -> Result<Comparison, CliError> {
    let config = load_config(args.config.as_deref())?;
    let baseline = load_table(&args.baseline, args.max_rows)?;
    let current = load_table(&args.current, args.max_rows)?;

    validate_schema(&baseline.table, &current.table).into_result()?;

    let result = DriftEngine::new(config).compute(&baseline.table, &current.table)?;

    if let Some(dir) = &args.export_dir {
        let report = DriftReport::new(&result, &baseline.path, &current.path, args.report_top_n);
        let (json_path, markdown_path) = write_report(dir, &report)?;
        info!(
            json = %json_path.display(),
            markdown = %markdown_path.display(),
            "Exported drift report"
        );
    }

    Ok(Comparison {
        baseline,
        current,
        result,
    })
}

/// Handle the compare command
pub fn handle_compare(args: &CompareArgs) -> Result<(), CliError> {
    let comparison = run_compare(args)?;

    eprintln!(
        "{}",
        format_load_summary(
            &comparison.baseline.table,
            &comparison.current.table,
            &comparison.result
        )
    );
    if let Some(dir) = &args.export_dir {
        eprintln!("Saved report to {}", dir.display());
    }

    let visible = comparison.visible(args.filter.as_deref(), args.top_n);
    let rendered = match args.format {
        OutputFormat::Table => format_drift_table(&visible),
        OutputFormat::Json => serde_json::to_string_pretty(&visible)
            .map_err(|e| CliError::Serialization(e.to_string()))?,
        OutputFormat::Yaml => {
            serde_yaml::to_string(&visible).map_err(|e| CliError::Serialization(e.to_string()))?
        }
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
