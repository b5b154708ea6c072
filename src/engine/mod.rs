//! Drift computation
//!
//! Ties schema inference and the distribution metrics together into a
//! ranked list of per-feature drift scores.
//!
//! ## Scoring
//!
//! - **numeric** - `PSI + |missing_delta| + bonus` when the KS p-value is significant
//! - **categorical** - `JS divergence + |missing_delta| + bonus` when the
//!   chi-square p-value is significant
//! - **datetime / unknown** - `|missing_delta|`
//!
//! The bonus defaults to 0.2 at a 0.05 significance level.

mod config;
#[allow(clippy::module_inception)]
mod engine;
mod error;
mod types;

pub use config::{
    DEFAULT_SIGNIFICANCE_BONUS, DEFAULT_SIGNIFICANCE_LEVEL, DriftConfig, DriftConfigBuilder,
};
pub use engine::{DriftEngine, compute_drift};
pub use error::DriftError;
pub use types::{DriftDetails, DriftResult, FeatureDrift};
