//! Drift orchestrator

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use super::config::DriftConfig;
use super::error::DriftError;
use super::types::{DriftDetails, DriftResult, FeatureDrift};
use crate::inference::{ColumnKind, ColumnSchema, SchemaInferrer};
use crate::metrics::{categorical_shift_with, ks_pvalue_with_limit, missingness_delta, psi_numeric};
use crate::models::{Column, Table};

/// Drift computation engine
///
/// Classifies the baseline columns, scores each column against its
/// counterpart in the current table and ranks the results.
///
/// # Example
///
/// ```rust
/// use data_drift_sdk::engine::{DriftConfig, DriftEngine};
/// use data_drift_sdk::models::{Column, Table};
///
/// let values: Vec<Option<i64>> = (1..=10).map(Some).collect();
/// let baseline = Table::new(vec![Column::from_ints("x", &values)]).unwrap();
/// let current = baseline.clone();
///
/// let engine = DriftEngine::new(DriftConfig::default());
/// let result = engine.compute(&baseline, &current).unwrap();
/// assert!(result.drifts[0].score.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DriftEngine {
    config: DriftConfig,
}

impl DriftEngine {
    pub fn new(config: DriftConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Score every baseline column against the current table
    ///
    /// The current table must expose every baseline column by name; a
    /// missing one aborts the run. Results are ranked by score, highest
    /// first, with ties kept in baseline column order.
    pub fn compute(&self, baseline: &Table, current: &Table) -> Result<DriftResult, DriftError> {
        let span = info_span!(
            "compute_drift",
            columns = baseline.n_cols(),
            baseline_rows = baseline.n_rows(),
            current_rows = current.n_rows()
        );
        let _guard = span.enter();

        let schema = SchemaInferrer::with_config(self.config.inference.clone()).infer(baseline);

        let pairs = schema
            .iter()
            .map(|column_schema| {
                let name = column_schema.name.as_str();
                let b = baseline
                    .column(name)
                    .ok_or_else(|| DriftError::MissingColumn(name.to_string()))?;
                let c = current
                    .column(name)
                    .ok_or_else(|| DriftError::MissingColumn(name.to_string()))?;
                Ok((column_schema, b, c))
            })
            .collect::<Result<Vec<_>, DriftError>>()?;

        #[cfg(feature = "parallel")]
        let iter = pairs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = pairs.iter();

        let mut drifts: Vec<FeatureDrift> = iter
            .map(|(column_schema, b, c)| self.score_feature(column_schema, b, c))
            .collect();

        // Stable, so equal scores keep column order
        drifts.sort_by(|a, b| b.score.total_cmp(&a.score));

        info!(
            features = drifts.len(),
            top = drifts.first().map(|d| d.name.as_str()).unwrap_or(""),
            "Drift computation complete"
        );

        Ok(DriftResult { schema, drifts })
    }

    /// Score one column pair under its baseline classification
    pub fn score_feature(
        &self,
        schema: &ColumnSchema,
        baseline: &Column,
        current: &Column,
    ) -> FeatureDrift {
        let metrics = &self.config.metrics;
        let missing_delta = missingness_delta(baseline.values(), current.values());

        let (score, details) = match schema.kind {
            ColumnKind::Numeric => {
                let psi = psi_numeric(
                    baseline.values(),
                    current.values(),
                    metrics.psi_bins,
                    metrics.psi_eps,
                );
                let ks_pvalue =
                    ks_pvalue_with_limit(baseline.values(), current.values(), metrics.ks_exact_max_n);
                let score = psi + missing_delta.abs() + self.config.bonus_for(ks_pvalue);
                (score, DriftDetails::Numeric { psi, ks_pvalue })
            }
            ColumnKind::Categorical => {
                let shift = categorical_shift_with(baseline.values(), current.values(), metrics);
                let score = shift.js_divergence
                    + missing_delta.abs()
                    + self.config.bonus_for(shift.chi2_pvalue);
                (score, DriftDetails::Categorical(shift))
            }
            ColumnKind::Datetime | ColumnKind::Unknown => {
                (missing_delta.abs(), DriftDetails::Empty {})
            }
        };

        debug!(
            feature = %schema.name,
            kind = %schema.kind,
            missing_delta,
            score,
            "Scored feature"
        );

        FeatureDrift {
            name: schema.name.clone(),
            kind: schema.kind,
            missing_delta,
            score,
            details,
        }
    }
}

/// Compute drift with the default configuration
pub fn compute_drift(baseline: &Table, current: &Table) -> Result<DriftResult, DriftError> {
    DriftEngine::default().compute(baseline, current)
}
