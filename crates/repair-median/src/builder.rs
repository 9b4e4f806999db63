//! Type-safe builder for constructing repairers
//!
//! The type-state pattern makes the protected column and the repair level
//! mandatory at compile time; everything else has a default.

use crate::config::RepairConfig;
use crate::repairer::MedianRepairer;
use repair_core::{ExecutionEngine, Result, SequentialEngine};
use std::collections::BTreeSet;
use std::marker::PhantomData;

/// Type-state markers for builder pattern
pub mod state {
    /// Marker for builder that needs a protected column
    pub struct NeedsProtected;

    /// Marker for builder that needs a repair level
    pub struct NeedsLevel;

    /// Marker for builder that is ready to build
    pub struct Ready;
}

pub use state::{NeedsLevel, NeedsProtected, Ready};

/// Builder state trait
pub trait BuilderState {}

impl BuilderState for NeedsProtected {}
impl BuilderState for NeedsLevel {}
impl BuilderState for Ready {}

/// Builder for [`MedianRepairer`]
///
/// ```rust
/// use repair_median::RepairerBuilder;
///
/// let repairer = RepairerBuilder::new(6)
///     .ignore(0)
///     .ignore(5)
///     .protected(3)
///     .repair_level(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(repairer.config().protected_column(), Some(3));
/// ```
pub struct RepairerBuilder<E, State: BuilderState> {
    n_columns: usize,
    protected: Vec<usize>,
    ignored: BTreeSet<usize>,
    repair_level: f64,
    engine: E,
    _state: PhantomData<State>,
}

impl RepairerBuilder<SequentialEngine, NeedsProtected> {
    /// Start building a repairer for datasets `n_columns` wide
    pub fn new(n_columns: usize) -> Self {
        Self {
            n_columns,
            protected: Vec::new(),
            ignored: BTreeSet::new(),
            repair_level: 0.0,
            engine: SequentialEngine::new(),
            _state: PhantomData,
        }
    }
}

// Available in every state
impl<E, S: BuilderState> RepairerBuilder<E, S> {
    /// Copy a column through untouched
    pub fn ignore(mut self, column: usize) -> Self {
        self.ignored.insert(column);
        self
    }

    /// Copy several columns through untouched
    pub fn ignore_all(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.ignored.extend(columns);
        self
    }

    /// Run column passes on a different engine
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> RepairerBuilder<E2, S> {
        RepairerBuilder {
            n_columns: self.n_columns,
            protected: self.protected,
            ignored: self.ignored,
            repair_level: self.repair_level,
            engine,
            _state: PhantomData,
        }
    }

    fn into_state<S2: BuilderState>(self) -> RepairerBuilder<E, S2> {
        RepairerBuilder {
            n_columns: self.n_columns,
            protected: self.protected,
            ignored: self.ignored,
            repair_level: self.repair_level,
            engine: self.engine,
            _state: PhantomData,
        }
    }
}

impl<E> RepairerBuilder<E, NeedsProtected> {
    /// Set the protected column
    pub fn protected(mut self, column: usize) -> RepairerBuilder<E, NeedsLevel> {
        self.protected.push(column);
        self.into_state()
    }
}

impl<E> RepairerBuilder<E, NeedsLevel> {
    /// Also stratify by `column`
    pub fn stratify_also(mut self, column: usize) -> Self {
        self.protected.push(column);
        self
    }

    /// Set the repair level; validated by [`build`](RepairerBuilder::build)
    pub fn repair_level(mut self, level: f64) -> RepairerBuilder<E, Ready> {
        self.repair_level = level;
        self.into_state()
    }
}

impl<E: ExecutionEngine> RepairerBuilder<E, Ready> {
    /// The configuration that [`build`](Self::build) will validate
    pub fn config(&self) -> RepairConfig {
        RepairConfig {
            n_columns: self.n_columns,
            protected_columns: self.protected.clone(),
            ignored_columns: self.ignored.clone(),
            repair_level: self.repair_level,
        }
    }

    /// Validate the configuration and create the repairer
    pub fn build(self) -> Result<MedianRepairer<E>> {
        let config = self.config();
        MedianRepairer::with_engine(config, self.engine)
    }
}
