//! Output formatting for CLI

use clap::ValueEnum;

use crate::engine::{DriftResult, FeatureDrift};
use crate::export::key_metric;
use crate::inference::ColumnSchema;
use crate::models::Table;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Render rows as a left-aligned text table with a dashed rule under the header
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = vec![line(headers.as_slice()), line(rule.as_slice())];
    lines.extend(rows.iter().map(|row| line(row.as_slice())));
    lines.join("\n") + "\n"
}

/// Ranked drift table; `drifts` are expected in rank order
pub fn format_drift_table(drifts: &[&FeatureDrift]) -> String {
    if drifts.is_empty() {
        return "No features to show.\n".to_string();
    }
    let rows: Vec<Vec<String>> = drifts
        .iter()
        .enumerate()
        .map(|(i, d)| {
            vec![
                (i + 1).to_string(),
                d.name.clone(),
                d.kind.to_string(),
                format!("{:.4}", d.score),
                format!("{:.4}", d.missing_delta),
                key_metric(d),
            ]
        })
        .collect();
    render_table(
        &["Rank", "Feature", "Kind", "Score", "Missing Δ", "Key metric"],
        &rows,
    )
}

/// Column classification table
pub fn format_schema_table(schema: &[ColumnSchema]) -> String {
    let rows: Vec<Vec<String>> = schema
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.kind.to_string(),
                s.distinct_count.to_string(),
                format!("{:.4}", s.missing_rate),
            ]
        })
        .collect();
    render_table(&["Column", "Kind", "Distinct", "Missing rate"], &rows)
}

/// One-paragraph summary of a completed load and drift run
pub fn format_load_summary(baseline: &Table, current: &Table, result: &DriftResult) -> String {
    let top = result
        .drifts
        .first()
        .map(|d| d.name.as_str())
        .unwrap_or("N/A");
    format!(
        "Loaded OK.\nBaseline: {} rows × {} cols | Current: {} rows × {} cols\nTop drifted: {}",
        baseline.n_rows(),
        baseline.n_cols(),
        current.n_rows(),
        current.n_cols(),
        top
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DriftDetails;
    use crate::inference::ColumnKind;
    use crate::models::Column;

    #[test]
    fn test_drift_table_layout() {
        let drift = FeatureDrift {
            name: "age".to_string(),
            kind: ColumnKind::Numeric,
            missing_delta: 0.0,
            score: 0.25,
            details: DriftDetails::Numeric {
                psi: 0.25,
                ks_pvalue: 0.5,
            },
        };
        let table = format_drift_table(&[&drift]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Rank  Feature  Kind"));
        assert!(lines[1].starts_with("----  -------"));
        assert!(lines[2].starts_with("1     age      numeric"));
        assert!(lines[2].ends_with("PSI=0.2500, KS p=0.5"));
    }

    #[test]
    fn test_empty_drift_table() {
        assert_eq!(format_drift_table(&[]), "No features to show.\n");
    }

    #[test]
    fn test_load_summary() {
        let table = Table::new(vec![Column::from_ints("x", &[Some(1), Some(2)])]).unwrap();
        let summary = format_load_summary(&table, &table, &DriftResult::default());
        assert_eq!(
            summary,
            "Loaded OK.\nBaseline: 2 rows × 1 cols | Current: 2 rows × 1 cols\nTop drifted: N/A"
        );
    }
}
