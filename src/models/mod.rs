//! Models module for the SDK
//!
//! Defines the tabular structures the drift engine reads: typed cells,
//! named columns and ordered tables. Tables are never mutated by the
//! engine, so the raw values stay available for presentation layers.

pub mod column;
pub mod table;
pub mod value;

pub use column::Column;
pub use table::{Table, TableError};
pub use value::{ColumnType, MISSING_LABEL, Value};
