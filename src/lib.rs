//! Fairness preprocessing by median quantile-matching repair
//!
//! Facade over the workspace crates:
//!
//! - [`repair_core`]: dataset model, errors, execution engines
//! - [`repair_median`]: the repair procedure
//!
//! # Example
//!
//! ```rust
//! use fair_repair::prelude::*;
//!
//! let data = Dataset::from_rows(vec![
//!     vec![Cell::from("r1"), Cell::from("A"), Cell::from(1.0)],
//!     vec![Cell::from("r2"), Cell::from("B"), Cell::from(9.0)],
//! ]);
//!
//! let repairer = RepairerBuilder::new(3)
//!     .ignore(0)
//!     .protected(1)
//!     .repair_level(1.0)
//!     .build()?;
//! let repaired = repairer.repair(&data)?;
//!
//! // One bucket; medians 1 and 9, the upper one wins
//! assert_eq!(repaired.cell(0, 2), Some(&Cell::Number(9.0)));
//! assert_eq!(repaired.cell(0, 0), Some(&Cell::from("r1")));
//! # Ok::<(), fair_repair::Error>(())
//! ```

pub use repair_core;
pub use repair_median;

pub use repair_core::{Cell, CellKey, Dataset, DatasetRepairer, Error, Result};
pub use repair_core::{sequential, ExecutionEngine, SequentialEngine};
#[cfg(feature = "parallel")]
pub use repair_core::{parallel, ParallelEngine};
pub use repair_median::{MedianRepairer, RepairConfig, RepairReport, RepairerBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use repair_core::prelude::*;
    pub use repair_median::{
        ColumnRole, MedianRepairer, RepairConfig, RepairReport, RepairerBuilder,
    };
}
