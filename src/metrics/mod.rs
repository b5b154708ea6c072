//! Distribution metrics
//!
//! Pure functions comparing a baseline sample against a current sample of
//! one column. Nothing here holds state, so columns can be scored in
//! parallel.
//!
//! - [`psi_numeric`] - Population Stability Index over baseline quantile bins
//! - [`ks_pvalue`] - two-sample Kolmogorov-Smirnov p-value
//! - [`js_divergence`] - Jensen-Shannon divergence between two distributions
//! - [`categorical_shift`] - chi-square, JS divergence and top share changes
//! - [`missingness_delta`] - change in missing rate
//!
//! Empty samples are treated as carrying no evidence of drift: distances
//! come back as 0.0 and p-values as 1.0. The exception is a length
//! mismatch in [`js_divergence`]: the two vectors must cover the same
//! categories, and the function panics when they do not.

mod categorical;
mod config;
mod divergence;
mod ks;
mod missingness;
mod psi;
pub mod special;

pub use categorical::{CategoricalShift, CategoryChange, categorical_shift, categorical_shift_with};
pub use config::{
    DEFAULT_EXPECTED_FLOOR, DEFAULT_JS_EPS, DEFAULT_KS_EXACT_MAX_N, DEFAULT_PSI_BINS,
    DEFAULT_PSI_EPS, DEFAULT_TOP_K, MetricsConfig, MetricsConfigBuilder,
};
pub use divergence::js_divergence;
pub use ks::{KsResult, ks_2samp, ks_2samp_with_limit, ks_pvalue, ks_pvalue_with_limit};
pub use missingness::{missing_rate, missingness_delta};
pub use psi::{histogram, psi, psi_numeric, quantile_edges};

use crate::models::Value;

/// Non-missing cells coerced to floats; cells that are not numeric are dropped
pub fn numeric_sample(values: &[Value]) -> Vec<f64> {
    values.iter().filter_map(Value::as_f64).collect()
}
