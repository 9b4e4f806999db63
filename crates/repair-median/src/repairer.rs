//! The median quantile-matching repairer

use crate::assemble::assemble;
use crate::classify::ColumnRoles;
use crate::config::RepairConfig;
use crate::index::{CategoricalIndex, NumericIndex};
use crate::quantile::{repair_column, ColumnRepair};
use crate::report::{ColumnSummary, GroupSummary, RepairReport};
use crate::stratify::Stratification;
use repair_core::{
    Dataset, DatasetRepairer, ExecutionEngine, RepairerProperties, Result, SequentialEngine,
};
use tracing::{debug, instrument};

/// Repairs outcome columns toward per-quantile medians across protected groups
///
/// The repairer holds only its configuration and execution engine, so one
/// instance can repair any number of datasets of the configured width.
#[derive(Debug, Clone)]
pub struct MedianRepairer<E: ExecutionEngine = SequentialEngine> {
    config: RepairConfig,
    engine: E,
}

impl MedianRepairer<SequentialEngine> {
    /// Create a sequential repairer from a configuration
    pub fn new(config: RepairConfig) -> Result<Self> {
        Self::with_engine(config, SequentialEngine::new())
    }
}

impl<E: ExecutionEngine> MedianRepairer<E> {
    /// Create a repairer that runs column passes on `engine`
    pub fn with_engine(config: RepairConfig, engine: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &RepairConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Repair `data` and describe what changed
    #[instrument(
        skip_all,
        fields(rows = data.n_rows(), columns = self.config.n_columns, level = self.config.repair_level)
    )]
    pub fn repair_with_report(&self, data: &Dataset) -> Result<(Dataset, RepairReport)> {
        if data.is_empty() {
            debug!("empty dataset, nothing to repair");
            return Ok((Dataset::empty(), RepairReport::default()));
        }
        data.check_width(self.config.n_columns)?;

        let roles = ColumnRoles::from_config(&self.config);
        let outcome_columns = roles.outcome_columns();

        let protected = roles
            .protected_columns()
            .iter()
            .map(|&column| CategoricalIndex::build(data, column))
            .collect::<Result<Vec<_>>>()?;
        let indices = self
            .engine
            .execute_batch(outcome_columns.len(), |k| {
                NumericIndex::build(data, outcome_columns[k])
            })
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        let strata = Stratification::build(&protected, data.n_rows());
        let mut report = RepairReport {
            n_rows: data.n_rows(),
            groups: group_summaries(&strata, &protected),
            num_quantiles: strata.num_quantiles(),
            columns: Vec::new(),
        };
        if strata.is_empty() {
            debug!("no stratification groups, returning input unchanged");
            return Ok((data.clone(), report));
        }
        debug!(
            groups = strata.n_groups(),
            num_quantiles = strata.num_quantiles(),
            outcome_columns = indices.len(),
            "stratified"
        );

        let level = self.config.repair_level;
        let repaired = self
            .engine
            .execute_batch(indices.len(), |k| repair_column(&indices[k], &strata, level))
            .into_iter()
            .collect::<Result<Vec<ColumnRepair>>>()?;

        report.columns = repaired
            .iter()
            .zip(&indices)
            .map(|(repair, index)| ColumnSummary {
                column: repair.column,
                unique_values: index.len(),
                changed_cells: repair.changed,
            })
            .collect();

        Ok((assemble(data, &roles, &repaired), report))
    }
}

fn group_summaries(strata: &Stratification, protected: &[CategoricalIndex]) -> Vec<GroupSummary> {
    strata
        .groups()
        .iter()
        .map(|group| GroupSummary {
            label: group
                .key()
                .iter()
                .zip(protected)
                .filter_map(|(&code, index)| index.value(code))
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("/"),
            size: group.size(),
        })
        .collect()
}

impl<E: ExecutionEngine> RepairerProperties for MedianRepairer<E> {
    fn name(&self) -> &str {
        "Median quantile repair"
    }

    fn repair_level(&self) -> f64 {
        self.config.repair_level
    }
}

impl<E: ExecutionEngine> DatasetRepairer for MedianRepairer<E> {
    fn repair(&self, data: &Dataset) -> Result<Dataset> {
        self.repair_with_report(data).map(|(repaired, _)| repaired)
    }
}
