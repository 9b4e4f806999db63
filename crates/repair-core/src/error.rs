//! Error types for fairness repair
//!
//! Provides a unified error type for all repair crates.

use thiserror::Error;

/// Core error type for repair operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Repairer configuration rejected at construction
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An outcome cell could not be read as a number
    #[error("Parse error at row {row}, column {column}: cannot read {value:?} as a number")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal invariant broken during repair
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a repair level outside [0, 1]
    pub fn invalid_repair_level(level: f64) -> Self {
        Self::Configuration(format!("Repair level {level} must be in [0, 1]"))
    }

    /// Create an error for a column index past the dataset width
    pub fn column_out_of_bounds(role: &str, column: usize, n_columns: usize) -> Self {
        Self::Configuration(format!(
            "{role} column {column} is out of bounds for {n_columns} columns"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
