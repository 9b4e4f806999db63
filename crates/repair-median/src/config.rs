//! Repairer configuration

use repair_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// Immutable settings for one repairer
///
/// `protected_columns[0]` is the protected attribute. Further entries add
/// stratification attributes; groups are then keyed by the tuple of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Width every input row must have
    pub n_columns: usize,
    /// Columns whose values define the stratification groups
    pub protected_columns: Vec<usize>,
    /// Columns copied through verbatim
    #[serde(default)]
    pub ignored_columns: BTreeSet<usize>,
    /// Fraction of the rank distance to the median applied, in [0, 1]
    pub repair_level: f64,
}

impl RepairConfig {
    /// Create a validated configuration with no ignored columns
    pub fn new(n_columns: usize, protected_column: usize, repair_level: f64) -> Result<Self> {
        let config = Self {
            n_columns,
            protected_columns: vec![protected_column],
            ignored_columns: BTreeSet::new(),
            repair_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Add columns to the ignored set
    pub fn with_ignored(mut self, columns: impl IntoIterator<Item = usize>) -> Result<Self> {
        self.ignored_columns.extend(columns);
        self.validate()?;
        Ok(self)
    }

    /// Stratify on an additional protected column
    pub fn with_stratify_column(mut self, column: usize) -> Result<Self> {
        if !self.protected_columns.contains(&column) {
            self.protected_columns.push(column);
        }
        self.validate()?;
        Ok(self)
    }

    /// The primary protected column
    pub fn protected_column(&self) -> Option<usize> {
        self.protected_columns.first().copied()
    }

    /// Check every invariant of the configuration.
    ///
    /// Constructors call this already; call it again after deserializing.
    pub fn validate(&self) -> Result<()> {
        if !self.repair_level.is_finite() || !(0.0..=1.0).contains(&self.repair_level) {
            return Err(Error::invalid_repair_level(self.repair_level));
        }
        if self.protected_columns.is_empty() {
            return Err(Error::Configuration(
                "At least one protected column is required".to_string(),
            ));
        }

        let mut seen = BTreeSet::new();
        for &column in &self.protected_columns {
            if column >= self.n_columns {
                return Err(Error::column_out_of_bounds("Protected", column, self.n_columns));
            }
            if !seen.insert(column) {
                return Err(Error::Configuration(format!(
                    "Protected column {column} listed twice"
                )));
            }
        }
        for &column in &self.ignored_columns {
            if column >= self.n_columns {
                return Err(Error::column_out_of_bounds("Ignored", column, self.n_columns));
            }
        }

        let overlap: Vec<usize> = self
            .protected_columns
            .iter()
            .copied()
            .filter(|c| self.ignored_columns.contains(c))
            .collect();
        if overlap.len() == self.protected_columns.len() {
            return Err(Error::Configuration(
                "Every protected column is also ignored".to_string(),
            ));
        }
        if !overlap.is_empty() {
            warn!(?overlap, "protected columns also ignored; ignoring wins");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let config = RepairConfig::new(3, 1, 0.5).unwrap();
        assert_eq!(config.protected_column(), Some(1));
        assert!(config.ignored_columns.is_empty());
        assert_eq!(config.repair_level, 0.5);
    }

    #[test]
    fn test_repair_level_bounds() {
        assert!(RepairConfig::new(2, 0, 0.0).is_ok());
        assert!(RepairConfig::new(2, 0, 1.0).is_ok());
        for level in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let err = RepairConfig::new(2, 0, level).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "level {level}");
        }
    }

    #[test]
    fn test_protected_out_of_bounds() {
        let err = RepairConfig::new(2, 2, 0.5).unwrap_err();
        assert!(err.to_string().contains("Protected column 2"));
    }

    #[test]
    fn test_ignored_out_of_bounds() {
        let err = RepairConfig::new(3, 1, 0.5)
            .unwrap()
            .with_ignored([0, 5])
            .unwrap_err();
        assert!(err.to_string().contains("Ignored column 5"));
    }

    #[test]
    fn test_all_protected_ignored_rejected() {
        let err = RepairConfig::new(3, 1, 0.5)
            .unwrap()
            .with_ignored([1])
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_stratify_column() {
        let config = RepairConfig::new(4, 1, 1.0)
            .unwrap()
            .with_stratify_column(2)
            .unwrap()
            .with_stratify_column(2)
            .unwrap();
        assert_eq!(config.protected_columns, vec![1, 2]);
        assert!(RepairConfig::new(4, 1, 1.0)
            .unwrap()
            .with_stratify_column(9)
            .is_err());
    }

    #[test]
    fn test_deserialized_config_needs_validation() {
        let json = r#"{"n_columns": 3, "protected_columns": [1], "repair_level": 2.0}"#;
        let config: RepairConfig = serde_json::from_str(json).unwrap();
        assert!(config.ignored_columns.is_empty());
        assert!(config.validate().is_err());

        let json = r#"{"n_columns": 3, "protected_columns": [1], "ignored_columns": [0], "repair_level": 0.25}"#;
        let config: RepairConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.ignored_columns.contains(&0));
    }
}
