//! Configuration for drift computation

use serde::{Deserialize, Serialize};

use crate::inference::InferenceConfig;
use crate::metrics::MetricsConfig;

/// Default p-value below which a test counts as significant
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;
/// Default score bonus for a significant test
pub const DEFAULT_SIGNIFICANCE_BONUS: f64 = 0.2;

/// Configuration for a drift run
///
/// Every section has defaults, so a partial TOML or YAML document is enough:
///
/// ```toml
/// significance_level = 0.01
///
/// [inference]
/// max_categorical_unique = 100
///
/// [metrics]
/// psi_bins = 20
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Column classification settings
    pub inference: InferenceConfig,
    /// Metric tunables
    pub metrics: MetricsConfig,
    /// A p-value strictly below this earns the bonus
    pub significance_level: f64,
    /// Added to the score when the kind's test is significant
    pub significance_bonus: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            inference: InferenceConfig::default(),
            metrics: MetricsConfig::default(),
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            significance_bonus: DEFAULT_SIGNIFICANCE_BONUS,
        }
    }
}

impl DriftConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> DriftConfigBuilder {
        DriftConfigBuilder::default()
    }

    /// Bonus earned by a test with the given p-value
    pub fn bonus_for(&self, pvalue: f64) -> f64 {
        if pvalue < self.significance_level {
            self.significance_bonus
        } else {
            0.0
        }
    }
}

/// Builder for DriftConfig
#[derive(Debug, Default)]
pub struct DriftConfigBuilder {
    config: DriftConfig,
}

impl DriftConfigBuilder {
    pub fn inference(mut self, inference: InferenceConfig) -> Self {
        self.config.inference = inference;
        self
    }

    pub fn metrics(mut self, metrics: MetricsConfig) -> Self {
        self.config.metrics = metrics;
        self
    }

    /// Set the significance level (0.0 - 1.0)
    pub fn significance_level(mut self, level: f64) -> Self {
        self.config.significance_level = level.clamp(0.0, 1.0);
        self
    }

    /// Set the significance bonus (never negative)
    pub fn significance_bonus(mut self, bonus: f64) -> Self {
        self.config.significance_bonus = bonus.max(0.0);
        self
    }

    /// Build the configuration
    pub fn build(self) -> DriftConfig {
        self.config
    }
}
