//! Median quantile-matching repair
//!
//! This crate rewrites the numeric outcome columns of a dataset so that their
//! distributions, stratified by a protected attribute, move toward a common
//! cross-group median. The amount of movement is set by a repair level in
//! [0, 1]: 0 leaves the data as is, 1 gives every group the same per-quantile
//! medians.
//!
//! Repaired values are always chosen from the values the column already
//! contains. A partial repair moves a value's *rank* part of the way toward
//! the median's rank and takes the value found there.
//!
//! # Pipeline
//!
//! 1. [`classify`]: every column is Ignored, Protected or Outcome
//! 2. [`index`]: sorted distinct values and ranks per column
//! 3. [`stratify`]: rows grouped by protected value; the smallest group size
//!    becomes the quantile count
//! 4. [`quantile`]: per outcome column, bucket-by-bucket median matching
//! 5. [`assemble`]: rows rebuilt from the repaired columns
//!
//! # Example
//!
//! ```rust
//! use repair_core::{Cell, Dataset, DatasetRepairer};
//! use repair_median::{MedianRepairer, RepairConfig};
//!
//! let data = Dataset::from_rows(vec![
//!     vec![Cell::from("A"), Cell::from(1.0)],
//!     vec![Cell::from("A"), Cell::from(2.0)],
//!     vec![Cell::from("B"), Cell::from(10.0)],
//!     vec![Cell::from("B"), Cell::from(20.0)],
//! ]);
//!
//! let config = RepairConfig::new(2, 0, 1.0).unwrap();
//! let repairer = MedianRepairer::new(config).unwrap();
//! let repaired = repairer.repair(&data).unwrap();
//!
//! assert_eq!(repaired.n_rows(), 4);
//! assert_eq!(repaired.cell(0, 1), Some(&Cell::Number(10.0)));
//! ```

pub mod assemble;
pub mod builder;
pub mod classify;
pub mod config;
pub mod index;
pub mod quantile;
pub mod repairer;
pub mod report;
pub mod stratify;

pub use builder::RepairerBuilder;
pub use classify::{ColumnRole, ColumnRoles};
pub use config::RepairConfig;
pub use index::{CategoricalIndex, NumericIndex};
pub use quantile::{repair_column, ColumnRepair};
pub use repairer::MedianRepairer;
pub use report::{ColumnSummary, GroupSummary, RepairReport};
pub use stratify::{Group, GroupKey, RankedRow, Stratification};
