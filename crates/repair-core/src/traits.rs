//! Core traits for dataset repair
//!
//! Algorithm-specific repairers live in their own crates and implement
//! [`DatasetRepairer`].

use crate::{Dataset, Result};

/// Intrinsic properties of a repairer that don't depend on the input
pub trait RepairerProperties {
    /// Get the name of this repair procedure
    fn name(&self) -> &str;

    /// Fraction of the distance toward the target applied, in [0, 1]
    fn repair_level(&self) -> f64;
}

/// Trait for transforms that rewrite a dataset to reduce dependency on a
/// protected attribute
///
/// Implementations must be pure with respect to their input: the returned
/// dataset is a new snapshot and `data` is never modified.
pub trait DatasetRepairer: RepairerProperties {
    /// Repair a dataset, returning a new one of identical shape
    fn repair(&self, data: &Dataset) -> Result<Dataset>;
}
