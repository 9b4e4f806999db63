//! Stratification of rows by protected value
//!
//! Rows are grouped by the tuple of their protected-column category codes.
//! With a single protected column the tuple has one element. Groups are kept
//! in key order, which is the order a product over each column's sorted
//! categories would visit them.

use crate::index::CategoricalIndex;
use std::collections::BTreeMap;

/// Category codes of a group, one per protected column
pub type GroupKey = Vec<usize>;

/// One entry of a group's column-sorted view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankedRow {
    /// Rank of the row's value in the column's unique-value index
    pub rank: usize,
    /// Row position in the dataset
    pub row: usize,
}

/// Rows sharing one protected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    key: GroupKey,
    rows: Vec<usize>,
}

impl Group {
    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    /// Row indices in ascending order
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// This group's rows ordered by rank in a column, ties by row index
    pub fn sorted_by(&self, row_ranks: &[usize]) -> Vec<RankedRow> {
        let mut entries: Vec<RankedRow> = self
            .rows
            .iter()
            .map(|&row| RankedRow {
                rank: row_ranks[row],
                row,
            })
            .collect();
        entries.sort_unstable();
        entries
    }
}

/// Non-empty groups and the quantile count they share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stratification {
    groups: Vec<Group>,
    num_quantiles: usize,
}

impl Stratification {
    /// Group `n_rows` rows by their codes in each protected index
    pub fn build(protected: &[CategoricalIndex], n_rows: usize) -> Self {
        let mut by_key: BTreeMap<GroupKey, Vec<usize>> = BTreeMap::new();
        for row in 0..n_rows {
            let key: GroupKey = protected.iter().map(|index| index.row_code(row)).collect();
            by_key.entry(key).or_default().push(row);
        }

        let groups: Vec<Group> = by_key
            .into_iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(key, rows)| Group { key, rows })
            .collect();
        let num_quantiles = groups.iter().map(Group::size).min().unwrap_or(0);

        Self {
            groups,
            num_quantiles,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Size of the smallest group, or 0 when there are no groups
    pub fn num_quantiles(&self) -> usize {
        self.num_quantiles
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }
}
