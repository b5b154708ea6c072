//! Markdown report exporter

use super::report::DriftReport;
use crate::engine::FeatureDrift;
use crate::inference::ColumnKind;

/// Exporter for human-readable Markdown reports
#[derive(Debug, Default)]
pub struct MarkdownReportExporter;

impl MarkdownReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export a report to Markdown
    pub fn export(&self, report: &DriftReport) -> String {
        let mut lines = vec![
            "# Data Drift Report\n".to_string(),
            format!("- Generated: {}", report.generated_at),
            format!("- Baseline: `{}`", report.baseline_path),
            format!("- Current: `{}`\n", report.current_path),
            format!("## Top {} drifted features\n", report.top_n),
            "| Rank | Feature | Kind | Score | Missing Δ | Key metric |".to_string(),
            "|---:|---|---|---:|---:|---|".to_string(),
        ];

        for (i, drift) in report.top_drifts.iter().enumerate() {
            lines.push(format!(
                "| {} | {} | {} | {:.4} | {:.4} | {} |",
                i + 1,
                drift.name,
                drift.kind,
                drift.score,
                drift.missing_delta,
                key_metric(drift)
            ));
        }

        lines.join("\n")
    }
}

/// The headline metrics for a feature's kind; empty for unscored kinds
pub fn key_metric(drift: &FeatureDrift) -> String {
    match drift.kind {
        ColumnKind::Numeric => format!(
            "PSI={:.4}, KS p={}",
            drift.details.psi(),
            format_significant(drift.details.ks_pvalue(), 3)
        ),
        ColumnKind::Categorical => format!(
            "JSD={:.4}, χ² p={}",
            drift.details.js_divergence(),
            format_significant(drift.details.chi2_pvalue(), 3)
        ),
        ColumnKind::Datetime | ColumnKind::Unknown => String::new(),
    }
}

/// Format with `digits` significant digits in the style of C's `%g`
///
/// Trailing zeros are dropped; scientific notation is used for exponents
/// below -4 or at least `digits`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    // Rounded scientific form gives the exponent after rounding
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
