//! Population Stability Index over baseline quantile bins

use super::numeric_sample;
use crate::models::Value;

/// Linear-interpolated quantile of an ascending sample
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let position = q * last as f64;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(last);
    let fraction = position - lower as f64;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

/// Deduplicated quantile edges at `bins + 1` evenly spaced levels
pub fn quantile_edges(sample: &[f64], bins: usize) -> Vec<f64> {
    if sample.is_empty() {
        return Vec::new();
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut edges: Vec<f64> = (0..=bins)
        .map(|k| quantile_sorted(&sorted, k as f64 / bins as f64))
        .collect();
    edges.sort_by(f64::total_cmp);
    edges.dedup();
    edges
}

/// Count values into bins delimited by ascending `edges`
///
/// Every bin is half-open `[lo, hi)` except the last, which also takes its
/// upper edge. Values outside `[first, last]` are not counted.
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<usize> {
    if edges.len() < 2 {
        return Vec::new();
    }
    let bins = edges.len() - 1;
    let (first, last) = (edges[0], edges[bins]);
    let mut counts = vec![0usize; bins];

    for &value in values {
        if value < first || value > last {
            continue;
        }
        let bin = if value == last {
            bins - 1
        } else {
            edges.partition_point(|edge| *edge <= value) - 1
        };
        counts[bin] += 1;
    }
    counts
}

fn clipped_proportions(counts: &[usize], eps: f64) -> Vec<f64> {
    let total = counts.iter().sum::<usize>().max(1) as f64;
    counts
        .iter()
        .map(|&c| (c as f64 / total).clamp(eps, 1.0))
        .collect()
}

/// PSI between two clean numeric samples
///
/// Returns 0.0 when either sample is empty or the baseline yields fewer
/// than three distinct quantile edges.
pub fn psi(baseline: &[f64], current: &[f64], bins: usize, eps: f64) -> f64 {
    if baseline.is_empty() || current.is_empty() {
        return 0.0;
    }

    let edges = quantile_edges(baseline, bins);
    if edges.len() < 3 {
        return 0.0;
    }

    let baseline_p = clipped_proportions(&histogram(baseline, &edges), eps);
    let current_p = clipped_proportions(&histogram(current, &edges), eps);

    baseline_p
        .iter()
        .zip(&current_p)
        .map(|(b, c)| (c - b) * (c / b).ln())
        .sum()
}

/// PSI between two raw column samples
///
/// Both samples are coerced to numbers first; cells that are missing or
/// not numeric are dropped.
pub fn psi_numeric(baseline: &[Value], current: &[Value], bins: usize, eps: f64) -> f64 {
    psi(
        &numeric_sample(baseline),
        &numeric_sample(current),
        bins,
        eps,
    )
}
