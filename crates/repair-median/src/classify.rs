//! Column roles

use crate::config::RepairConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the repair does with a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    /// Copied through verbatim, never parsed
    Ignored,
    /// Defines the stratification groups
    Protected,
    /// Numeric column that gets repaired
    Outcome,
}

/// Role of every column, computed once per configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRoles {
    roles: Vec<ColumnRole>,
    protected: Vec<usize>,
}

impl ColumnRoles {
    /// Classify `n_columns` columns. Ignored takes precedence over protected.
    ///
    /// Protected columns are kept in the order given, which fixes the order
    /// of the components in a group key.
    pub fn classify(n_columns: usize, ignored: &BTreeSet<usize>, protected: &[usize]) -> Self {
        let mut roles = vec![ColumnRole::Outcome; n_columns];
        let mut kept = Vec::with_capacity(protected.len());
        for &column in protected {
            if column < n_columns && !ignored.contains(&column) && !kept.contains(&column) {
                roles[column] = ColumnRole::Protected;
                kept.push(column);
            }
        }
        for &column in ignored {
            if column < n_columns {
                roles[column] = ColumnRole::Ignored;
            }
        }
        Self {
            roles,
            protected: kept,
        }
    }

    pub fn from_config(config: &RepairConfig) -> Self {
        Self::classify(
            config.n_columns,
            &config.ignored_columns,
            &config.protected_columns,
        )
    }

    pub fn role(&self, column: usize) -> Option<ColumnRole> {
        self.roles.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Protected columns in group-key order
    pub fn protected_columns(&self) -> &[usize] {
        &self.protected
    }

    /// Outcome columns in ascending order
    pub fn outcome_columns(&self) -> Vec<usize> {
        self.columns_with(ColumnRole::Outcome)
    }

    fn columns_with(&self, role: ColumnRole) -> Vec<usize> {
        self.roles
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == role)
            .map(|(j, _)| j)
            .collect()
    }
}
