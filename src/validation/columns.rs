//! Column-set validation between a baseline and a current table

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::models::Table;

/// Outcome of comparing two tables' column lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaValidation {
    /// Both tables expose the same column names in the same order
    pub ok: bool,
    /// Baseline columns absent from the current table, sorted
    pub missing_in_current: Vec<String>,
    /// Current columns absent from the baseline table, sorted
    pub extra_in_current: Vec<String>,
    /// Human-readable summary
    pub message: String,
}

impl SchemaValidation {
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Convert a mismatch into an error carrying the summary message
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.ok {
            Ok(())
        } else {
            Err(ValidationError::SchemaMismatch(self.message))
        }
    }
}

fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Check that both tables expose identical column names in identical order
pub fn validate_schema(baseline: &Table, current: &Table) -> SchemaValidation {
    let baseline_names = baseline.column_names();
    let current_names = current.column_names();

    if baseline_names == current_names {
        return SchemaValidation {
            ok: true,
            missing_in_current: Vec::new(),
            extra_in_current: Vec::new(),
            message: "Schema OK.".to_string(),
        };
    }

    let baseline_set: BTreeSet<&str> = baseline_names.iter().copied().collect();
    let current_set: BTreeSet<&str> = current_names.iter().copied().collect();
    let missing_in_current: Vec<String> = baseline_set
        .difference(&current_set)
        .map(|s| s.to_string())
        .collect();
    let extra_in_current: Vec<String> = current_set
        .difference(&baseline_set)
        .map(|s| s.to_string())
        .collect();

    let mut message = String::from("Schema mismatch.\n");
    if !missing_in_current.is_empty() {
        message.push_str(&format!("- Missing in current: {}\n", quoted_list(&missing_in_current)));
    }
    if !extra_in_current.is_empty() {
        message.push_str(&format!("- Extra in current: {}\n", quoted_list(&extra_in_current)));
    }
    message.push_str("- Column order differs or names differ.");

    SchemaValidation {
        ok: false,
        missing_in_current,
        extra_in_current,
        message,
    }
}
