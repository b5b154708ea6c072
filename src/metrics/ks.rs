//! Two-sample Kolmogorov-Smirnov test

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_KS_EXACT_MAX_N;
use super::numeric_sample;
use super::special::{kolmogorov_sf, ks_exact_sf};
use crate::models::Value;

/// Outcome of a two-sample KS test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KsResult {
    /// Largest distance between the two empirical CDFs
    pub statistic: f64,
    /// Two-sided p-value
    pub pvalue: f64,
}

impl KsResult {
    /// Result reported when there is nothing to compare
    pub const NO_EVIDENCE: Self = Self {
        statistic: 0.0,
        pvalue: 1.0,
    };
}

/// Largest `|i * m - j * n|` while walking both sorted samples together
///
/// Tied values are consumed from both sides before the gap is measured.
fn integer_gap(x: &[f64], y: &[f64]) -> u64 {
    let (n, m) = (x.len() as i128, y.len() as i128);
    let (mut i, mut j) = (0usize, 0usize);
    let mut gap: i128 = 0;

    while i < x.len() || j < y.len() {
        let next = match (x.get(i), y.get(j)) {
            (Some(a), Some(b)) => a.min(*b),
            (Some(a), None) => *a,
            (None, Some(b)) => *b,
            (None, None) => break,
        };
        while i < x.len() && x[i] <= next {
            i += 1;
        }
        while j < y.len() && y[j] <= next {
            j += 1;
        }
        gap = gap.max((i as i128 * m - j as i128 * n).abs());
    }
    gap as u64
}

/// KS test with the default exact/asymptotic switch-over
pub fn ks_2samp(baseline: &[f64], current: &[f64]) -> KsResult {
    ks_2samp_with_limit(baseline, current, DEFAULT_KS_EXACT_MAX_N)
}

/// KS test between two clean numeric samples
///
/// The exact null distribution is used while both samples hold at most
/// `exact_max_n` values; above that the Kolmogorov distribution is used
/// with Stephens' finite-sample correction of the scaled statistic. Either
/// sample being empty yields [`KsResult::NO_EVIDENCE`].
pub fn ks_2samp_with_limit(baseline: &[f64], current: &[f64], exact_max_n: usize) -> KsResult {
    if baseline.is_empty() || current.is_empty() {
        return KsResult::NO_EVIDENCE;
    }

    let mut x = baseline.to_vec();
    let mut y = current.to_vec();
    x.sort_by(f64::total_cmp);
    y.sort_by(f64::total_cmp);

    let (n, m) = (x.len(), y.len());
    let gap = integer_gap(&x, &y);
    if gap == 0 {
        return KsResult::NO_EVIDENCE;
    }

    let statistic = gap as f64 / (n as f64 * m as f64);
    let pvalue = if n.max(m) <= exact_max_n {
        ks_exact_sf(n, m, gap)
    } else {
        // sqrt(en) + 0.12 + 0.11/sqrt(en) tracks the finite-n distribution
        // closely; the plain sqrt(en) limit overstates the p-value
        let root_en = ((n as f64 * m as f64) / (n + m) as f64).sqrt();
        kolmogorov_sf((root_en + 0.12 + 0.11 / root_en) * statistic)
    };

    KsResult {
        statistic,
        pvalue: pvalue.clamp(0.0, 1.0),
    }
}

/// KS p-value between two raw column samples
///
/// Cells that are missing or not numeric are dropped first.
pub fn ks_pvalue(baseline: &[Value], current: &[Value]) -> f64 {
    ks_pvalue_with_limit(baseline, current, DEFAULT_KS_EXACT_MAX_N)
}

pub fn ks_pvalue_with_limit(baseline: &[Value], current: &[Value], exact_max_n: usize) -> f64 {
    ks_2samp_with_limit(
        &numeric_sample(baseline),
        &numeric_sample(current),
        exact_max_n,
    )
    .pvalue
}
