//! Core types for fairness repair
//!
//! This crate provides the shared pieces every repair procedure builds on:
//!
//! - [`Dataset`] and [`Cell`]: the in-memory table a repairer consumes and
//!   produces
//! - [`Error`] and [`Result`]: one error type for configuration, parsing and
//!   internal invariant failures
//! - [`DatasetRepairer`]: the trait a repair procedure implements
//! - [`ExecutionEngine`]: sequential or Rayon-backed batch execution
//!
//! # Example
//!
//! ```rust
//! use repair_core::{Cell, Dataset, ExecutionEngine, sequential};
//!
//! let data = Dataset::from_rows(vec![
//!     vec![Cell::from("A"), Cell::from(1.0)],
//!     vec![Cell::from("B"), Cell::from(2.0)],
//! ]);
//! assert_eq!(data.n_columns(), 2);
//!
//! let engine = sequential();
//! let widths = engine.execute_batch(data.n_rows(), |i| data.rows()[i].len());
//! assert_eq!(widths, vec![2, 2]);
//! ```

pub mod dataset;
pub mod error;
pub mod execution;
pub mod traits;

// Re-export core types
pub use dataset::{Cell, CellKey, Dataset};
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use traits::{DatasetRepairer, RepairerProperties};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Cell, Dataset, DatasetRepairer, ExecutionEngine, ExecutionStrategy, RepairerProperties,
        Result, SequentialEngine,
    };

    pub use crate::error::Error;

    #[cfg(feature = "parallel")]
    pub use crate::execution::{parallel, ParallelEngine};
    pub use crate::execution::sequential;
}
