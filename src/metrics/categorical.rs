//! Categorical distribution shift

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::MetricsConfig;
use super::divergence::js_divergence;
use super::special::chi2_sf;
use crate::models::Value;

/// Change in share for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChange {
    pub category: String,
    pub baseline_pct: f64,
    pub current_pct: f64,
    /// `current_pct - baseline_pct`
    pub delta: f64,
}

/// Shift between two categorical samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalShift {
    /// Goodness-of-fit p-value of current counts against baseline shares
    pub chi2_pvalue: f64,
    pub js_divergence: f64,
    /// Categories ordered by largest absolute share change
    pub top_changes: Vec<CategoryChange>,
}

/// Occurrence count per category label, missing cells included
fn label_counts(values: &[Value]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.label()).or_insert(0) += 1;
    }
    counts
}

fn shares(counts: &[f64]) -> Vec<f64> {
    let total = counts.iter().sum::<f64>().max(1.0);
    counts.iter().map(|c| c / total).collect()
}

fn chi2_pvalue(baseline: &[f64], current: &[f64], expected_floor: f64) -> f64 {
    let baseline_total: f64 = baseline.iter().sum();
    let current_total: f64 = current.iter().sum();
    if baseline_total == 0.0 || current_total == 0.0 {
        return 1.0;
    }

    let statistic: f64 = baseline
        .iter()
        .zip(current)
        .map(|(b, observed)| {
            let expected = (b / baseline_total * current_total).max(expected_floor);
            (observed - expected).powi(2) / expected
        })
        .sum();

    chi2_sf(statistic, baseline.len().saturating_sub(1))
}

/// Compare two categorical samples with default tunables and `top_k` changes
pub fn categorical_shift(baseline: &[Value], current: &[Value], top_k: usize) -> CategoricalShift {
    let config = MetricsConfig::builder().top_k(top_k).build();
    categorical_shift_with(baseline, current, &config)
}

/// Compare two categorical samples
///
/// Cells are grouped by their text label, with missing cells forming their
/// own category. The category set is the sorted union of both samples.
/// Changes are ranked by magnitude, largest first; equal magnitudes come
/// out in reverse category order.
pub fn categorical_shift_with(
    baseline: &[Value],
    current: &[Value],
    config: &MetricsConfig,
) -> CategoricalShift {
    let baseline_counts = label_counts(baseline);
    let current_counts = label_counts(current);

    let mut categories: Vec<&String> = baseline_counts.keys().chain(current_counts.keys()).collect();
    categories.sort();
    categories.dedup();

    let count_vector = |counts: &BTreeMap<String, usize>| -> Vec<f64> {
        categories
            .iter()
            .map(|category| counts.get(*category).copied().unwrap_or(0) as f64)
            .collect()
    };
    let baseline_vec = count_vector(&baseline_counts);
    let current_vec = count_vector(&current_counts);

    let chi2_pvalue = chi2_pvalue(&baseline_vec, &current_vec, config.expected_floor);

    let baseline_p = shares(&baseline_vec);
    let current_p = shares(&current_vec);
    let js_divergence = js_divergence(&baseline_p, &current_p, config.js_eps);

    let mut top_changes: Vec<CategoryChange> = categories
        .iter()
        .zip(baseline_p.iter().zip(&current_p))
        .map(|(category, (&b, &c))| CategoryChange {
            category: (*category).clone(),
            baseline_pct: b,
            current_pct: c,
            delta: c - b,
        })
        .collect();
    // Stable ascending sort then reverse, so ties end up latest category first
    top_changes.sort_by(|a, b| a.delta.abs().total_cmp(&b.delta.abs()));
    top_changes.reverse();
    top_changes.truncate(config.top_k);

    CategoricalShift {
        chi2_pvalue,
        js_divergence,
        top_changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(values: &[&str]) -> Vec<Value> {
        values.iter().map(|v| Value::from(*v)).collect()
    }

    #[test]
    fn test_flipped_majority() {
        let baseline = strs(&["a", "a", "a", "b"]);
        let current = strs(&["b", "b", "b", "a"]);
        let shift = categorical_shift(&baseline, &current, 12);

        // statistic 16/3 on one degree of freedom
        assert!((shift.chi2_pvalue - 0.020_921).abs() < 1e-5);
        assert!((shift.js_divergence - 0.130_812).abs() < 1e-5);

        // Equal magnitudes, so the later category leads
        assert_eq!(shift.top_changes.len(), 2);
        assert_eq!(shift.top_changes[0].category, "b");
        assert_eq!(shift.top_changes[0].delta, 0.5);
        let a = &shift.top_changes[1];
        assert_eq!(a.category, "a");
        assert_eq!(a.baseline_pct, 0.75);
        assert_eq!(a.current_pct, 0.25);
        assert_eq!(a.delta, -0.5);
    }

    #[test]
    fn test_identical_samples() {
        let sample = strs(&["x", "y", "y", "z"]);
        let shift = categorical_shift(&sample, &sample, 12);
        assert!((shift.chi2_pvalue - 1.0).abs() < 1e-12);
        assert!(shift.js_divergence.abs() < 1e-12);
        assert!(shift.top_changes.iter().all(|c| c.delta == 0.0));
    }

    #[test]
    fn test_missing_is_a_category() {
        let baseline = vec![Value::from("a"), Value::Null];
        let current = vec![Value::from("a"), Value::from("a")];
        let shift = categorical_shift(&baseline, &current, 12);
        let missing = shift
            .top_changes
            .iter()
            .find(|c| c.category == "nan")
            .expect("missing category present");
        assert_eq!(missing.baseline_pct, 0.5);
        assert_eq!(missing.current_pct, 0.0);
    }

    #[test]
    fn test_new_category_is_highly_significant() {
        let baseline = strs(&["a"; 20]);
        let mut current = strs(&["a"; 10]);
        current.extend(strs(&["b"; 10]));
        let shift = categorical_shift(&baseline, &current, 12);
        assert!(shift.chi2_pvalue < 1e-10);
        assert_eq!(shift.top_changes[0].delta.abs(), 0.5);
    }

    #[test]
    fn test_single_category_has_no_evidence() {
        let shift = categorical_shift(&strs(&["a", "a"]), &strs(&["a"]), 12);
        assert_eq!(shift.chi2_pvalue, 1.0);
        assert!(shift.js_divergence.abs() < 1e-12);
    }

    #[test]
    fn test_empty_side() {
        let shift = categorical_shift(&[], &strs(&["a", "b"]), 12);
        assert_eq!(shift.chi2_pvalue, 1.0);
        assert_eq!(shift.top_changes.len(), 2);
        assert_eq!(shift.top_changes[0].baseline_pct, 0.0);
    }

    #[test]
    fn test_top_k_truncates_ties_latest_category_first() {
        let baseline = strs(&["a", "b", "c", "d"]);
        let current = strs(&["a", "a", "b", "b"]);
        let shift = categorical_shift(&baseline, &current, 3);
        let names: Vec<&str> = shift.top_changes.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["d", "c", "b"]);
    }

    #[test]
    fn test_bool_labels() {
        let baseline = vec![Value::Bool(true), Value::Bool(false)];
        let current = vec![Value::Bool(true), Value::Bool(true)];
        let shift = categorical_shift(&baseline, &current, 12);
        assert_eq!(shift.top_changes[0].category, "True");
        assert_eq!(shift.top_changes[1].category, "False");
    }
}
