//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// Configuration for schema inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Text columns with more distinct values than this are `unknown`
    /// rather than `categorical`
    pub max_categorical_unique: usize,

    /// Number of leading non-missing values sampled for datetime detection
    pub datetime_sample_size: usize,

    /// Fraction of sampled values that must parse as dates (0.0 - 1.0)
    pub datetime_threshold: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_categorical_unique: 50,
            datetime_sample_size: 50,
            datetime_threshold: 0.8,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the categorical cardinality ceiling
    pub fn max_categorical_unique(mut self, max: usize) -> Self {
        self.config.max_categorical_unique = max;
        self
    }

    /// Set how many values are sampled for datetime detection
    pub fn datetime_sample_size(mut self, size: usize) -> Self {
        self.config.datetime_sample_size = size;
        self
    }

    /// Set the datetime parse-rate threshold
    pub fn datetime_threshold(mut self, threshold: f64) -> Self {
        self.config.datetime_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}
