//! Per-column unique-value indices
//!
//! Every non-ignored column is reduced to its sorted distinct values and a
//! value-to-rank map. Each index also records the rank of every row's
//! original value, so the repair works on ranks and never compares derived
//! floats for equality.

use ordered_float::OrderedFloat;
use repair_core::{Cell, CellKey, Dataset, Error, Result};
use std::collections::{BTreeMap, BTreeSet};

fn cell_at(data: &Dataset, row: usize, column: usize) -> Result<&Cell> {
    data.cell(row, column).ok_or_else(|| {
        Error::InvalidInput(format!("Row {row} has no column {column}"))
    })
}

/// Sorted distinct values of an outcome column
#[derive(Debug, Clone, PartialEq)]
pub struct NumericIndex {
    column: usize,
    values: Vec<f64>,
    ranks: BTreeMap<OrderedFloat<f64>, usize>,
    row_ranks: Vec<usize>,
}

impl NumericIndex {
    /// Parse `column` of every row and index the distinct values.
    ///
    /// Fails with [`Error::Parse`] on the first cell that is not a number.
    pub fn build(data: &Dataset, column: usize) -> Result<Self> {
        let parsed = (0..data.n_rows())
            .map(|row| {
                let cell = cell_at(data, row, column)?;
                cell.parse_f64()
                    .map(OrderedFloat)
                    .ok_or_else(|| Error::Parse {
                        row,
                        column,
                        value: cell.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut distinct = parsed.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let ranks: BTreeMap<OrderedFloat<f64>, usize> = distinct
            .iter()
            .enumerate()
            .map(|(rank, v)| (*v, rank))
            .collect();
        let row_ranks = parsed
            .iter()
            .map(|v| {
                ranks.get(v).copied().ok_or_else(|| {
                    Error::Invariant(format!("Value {} missing from column {column}", v.0))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            column,
            values: distinct.into_iter().map(|v| v.0).collect(),
            ranks,
            row_ranks,
        })
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Distinct values, ascending
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, rank: usize) -> Option<f64> {
        self.values.get(rank).copied()
    }

    pub fn rank_of(&self, value: f64) -> Option<usize> {
        self.ranks.get(&OrderedFloat(value)).copied()
    }

    /// Rank of each row's original value, in row order
    pub fn row_ranks(&self) -> &[usize] {
        &self.row_ranks
    }

    /// Original value of each row
    pub fn row_values(&self) -> Vec<f64> {
        self.row_ranks.iter().map(|&r| self.values[r]).collect()
    }
}

/// Sorted distinct values of a protected column, compared as given
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalIndex {
    column: usize,
    values: Vec<CellKey>,
    row_codes: Vec<usize>,
}

impl CategoricalIndex {
    pub fn build(data: &Dataset, column: usize) -> Result<Self> {
        let keys = (0..data.n_rows())
            .map(|row| cell_at(data, row, column).map(Cell::key))
            .collect::<Result<Vec<_>>>()?;

        let values: Vec<CellKey> = keys
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let ranks: BTreeMap<CellKey, usize> = values
            .iter()
            .enumerate()
            .map(|(rank, k)| (k.clone(), rank))
            .collect();
        let row_codes = keys.iter().map(|k| ranks[k]).collect();

        Ok(Self {
            column,
            values,
            row_codes,
        })
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Distinct categories, ascending
    pub fn values(&self) -> &[CellKey] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, code: usize) -> Option<&CellKey> {
        self.values.get(code)
    }

    /// Category code of one row
    pub fn row_code(&self, row: usize) -> usize {
        self.row_codes[row]
    }

    pub fn n_rows(&self) -> usize {
        self.row_codes.len()
    }
}
