//! Schema inference for tabular data
//!
//! This module classifies each column of a baseline table into the
//! statistical kind that decides which drift metrics apply to it.
//!
//! ## Rules
//!
//! - **Datetime** - declared date/time columns, or text columns whose
//!   leading non-missing values mostly parse as dates
//! - **Numeric** - integer and float columns (even when all-missing)
//! - **Categorical** - boolean columns and low-cardinality text
//! - **Unknown** - text with more distinct values than the configured ceiling
//!
//! ## Example
//!
//! ```rust,ignore
//! use data_drift_sdk::inference::{SchemaInferrer, InferenceConfig};
//!
//! let inferrer = SchemaInferrer::with_config(InferenceConfig::default());
//! for column in inferrer.infer(&table) {
//!     println!("{}: {}", column.name, column.kind);
//! }
//! ```

mod config;
mod formats;
mod inferrer;
mod types;

pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use formats::{DateTimeFormat, datetime_confidence, detect_datetime_format, parse_datetime};
pub use inferrer::{InferenceStats, SchemaInferrer, infer_schema};
pub use types::{ColumnKind, ColumnSchema};
