//! In-memory tabular data
//!
//! A [`Dataset`] is an ordered list of rows, each an ordered list of
//! [`Cell`]s. Cells are heterogeneous until a column is interpreted: outcome
//! columns are read as numbers, protected columns are compared as given.

use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value before interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Numeric value
    Number(f64),
    /// Raw text, e.g. a field read from a CSV record
    Text(String),
}

impl Cell {
    /// Read this cell as a number.
    ///
    /// Text is trimmed before parsing. Returns `None` when the text is not a
    /// valid floating point literal.
    pub fn parse_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(x) => Some(*x),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Totally ordered key used for categorical comparison
    pub fn key(&self) -> CellKey {
        match self {
            Cell::Number(x) => CellKey::Number(OrderedFloat(*x)),
            Cell::Text(s) => CellKey::Text(s.clone()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(x) => write!(f, "{x}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Number(x)
    }
}

impl From<i64> for Cell {
    fn from(x: i64) -> Self {
        Cell::Number(x as f64)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// Categorical view of a cell with a total order
///
/// Numbers sort before text; numbers compare by value, text lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKey {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKey::Number(x) => write!(f, "{}", x.0),
            CellKey::Text(s) => f.write_str(s),
        }
    }
}

/// Row-major table of cells
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Wrap a list of rows
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a dataset from anything convertible into cells
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Dataset with no rows
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row, or 0 for an empty dataset
    pub fn n_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Iterate over one column, top to bottom
    ///
    /// Rows shorter than `column` are skipped; call
    /// [`check_width`](Self::check_width) first when that matters.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |r| r.get(column))
    }

    /// Fail unless every row has exactly `n_columns` cells
    pub fn check_width(&self, n_columns: usize) -> Result<()> {
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != n_columns {
                return Err(Error::size_mismatch(
                    n_columns,
                    row.len(),
                    &format!("row {i}"),
                ));
            }
        }
        Ok(())
    }
}

impl From<Vec<Vec<Cell>>> for Dataset {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64() {
        assert_eq!(Cell::Number(2.5).parse_f64(), Some(2.5));
        assert_eq!(Cell::from(" 42 ").parse_f64(), Some(42.0));
        assert_eq!(Cell::from("1e3").parse_f64(), Some(1000.0));
        assert_eq!(Cell::from("abc").parse_f64(), None);
        assert_eq!(Cell::from("").parse_f64(), None);
    }

    #[test]
    fn test_cell_key_ordering() {
        let mut keys = vec![
            Cell::from("b").key(),
            Cell::from(3.0).key(),
            Cell::from("a").key(),
            Cell::from(-1.0).key(),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                CellKey::Number(OrderedFloat(-1.0)),
                CellKey::Number(OrderedFloat(3.0)),
                CellKey::Text("a".to_string()),
                CellKey::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_text_and_number_keys_differ() {
        // Categorical comparison is on the value as given
        assert_ne!(Cell::from("1").key(), Cell::from(1.0).key());
    }

    #[test]
    fn test_dataset_shape() {
        let data = Dataset::from_rows(vec![
            vec![Cell::from("A"), Cell::from(1.0)],
            vec![Cell::from("B"), Cell::from(2.0)],
        ]);
        assert_eq!(data.n_rows(), 2);
        assert_eq!(data.n_columns(), 2);
        assert_eq!(data.cell(1, 0), Some(&Cell::from("B")));
        assert_eq!(data.cell(2, 0), None);

        let col: Vec<_> = data.column(1).cloned().collect();
        assert_eq!(col, vec![Cell::Number(1.0), Cell::Number(2.0)]);
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::empty();
        assert!(data.is_empty());
        assert_eq!(data.n_columns(), 0);
        assert!(data.check_width(5).is_ok());
    }

    #[test]
    fn test_check_width_ragged() {
        let data = Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        let err = data.check_width(2).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::from(1.5).to_string(), "1.5");
        assert_eq!(Cell::from("x").to_string(), "x");
        assert_eq!(Cell::from(7i64).key().to_string(), "7");
    }
}
