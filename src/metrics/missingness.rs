//! Missingness shift

use crate::models::Value;

/// Fraction of missing values; an empty sample has rate 0.0
pub fn missing_rate(values: &[Value]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().filter(|v| v.is_missing()).count() as f64 / values.len() as f64
}

/// Current missing rate minus baseline missing rate
pub fn missingness_delta(baseline: &[Value], current: &[Value]) -> f64 {
    missing_rate(current) - missing_rate(baseline)
}
