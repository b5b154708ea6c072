//! Tunables for the distribution metrics

use serde::{Deserialize, Serialize};

/// Default number of PSI quantile bins
pub const DEFAULT_PSI_BINS: usize = 10;
/// Default probability floor for PSI
pub const DEFAULT_PSI_EPS: f64 = 1e-6;
/// Default probability floor for Jensen-Shannon divergence
pub const DEFAULT_JS_EPS: f64 = 1e-12;
/// Default floor for chi-square expected counts
pub const DEFAULT_EXPECTED_FLOOR: f64 = 1e-6;
/// Default number of top changed categories reported
pub const DEFAULT_TOP_K: usize = 12;
/// Largest sample size for which the exact KS distribution is used
pub const DEFAULT_KS_EXACT_MAX_N: usize = 10_000;

/// Configuration for the distribution metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Number of baseline quantile bins for PSI
    pub psi_bins: usize,
    /// PSI probability floor
    pub psi_eps: f64,
    /// Jensen-Shannon probability floor
    pub js_eps: f64,
    /// Chi-square expected-count floor
    pub expected_floor: f64,
    /// Number of top changed categories to keep
    pub top_k: usize,
    /// Exact KS p-values up to this many values per side, asymptotic above
    pub ks_exact_max_n: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            psi_bins: DEFAULT_PSI_BINS,
            psi_eps: DEFAULT_PSI_EPS,
            js_eps: DEFAULT_JS_EPS,
            expected_floor: DEFAULT_EXPECTED_FLOOR,
            top_k: DEFAULT_TOP_K,
            ks_exact_max_n: DEFAULT_KS_EXACT_MAX_N,
        }
    }
}

impl MetricsConfig {
    /// Create a builder for custom configuration
    pub fn builder() -> MetricsConfigBuilder {
        MetricsConfigBuilder::default()
    }
}

/// Builder for MetricsConfig
#[derive(Debug, Default)]
pub struct MetricsConfigBuilder {
    config: MetricsConfig,
}

impl MetricsConfigBuilder {
    /// Set the PSI bin count (at least 1)
    pub fn psi_bins(mut self, bins: usize) -> Self {
        self.config.psi_bins = bins.max(1);
        self
    }

    pub fn psi_eps(mut self, eps: f64) -> Self {
        self.config.psi_eps = eps;
        self
    }

    pub fn js_eps(mut self, eps: f64) -> Self {
        self.config.js_eps = eps;
        self
    }

    pub fn expected_floor(mut self, floor: f64) -> Self {
        self.config.expected_floor = floor;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    pub fn ks_exact_max_n(mut self, max_n: usize) -> Self {
        self.config.ks_exact_max_n = max_n;
        self
    }

    /// Build the configuration
    pub fn build(self) -> MetricsConfig {
        self.config
    }
}
