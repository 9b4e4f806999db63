//! Summary of one repair call

/// Size of one stratification group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    /// Protected values of the group joined with `/`
    pub label: String,
    pub size: usize,
}

/// What happened to one outcome column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub column: usize,
    /// Distinct values observed in the column
    pub unique_values: usize,
    /// Cells whose value changed
    pub changed_cells: usize,
}

/// Returned by [`MedianRepairer::repair_with_report`](crate::MedianRepairer::repair_with_report)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepairReport {
    pub n_rows: usize,
    pub groups: Vec<GroupSummary>,
    pub num_quantiles: usize,
    pub columns: Vec<ColumnSummary>,
}

impl RepairReport {
    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn column(&self, column: usize) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.column == column)
    }

    /// Changed cells across all outcome columns
    pub fn total_changed(&self) -> usize {
        self.columns.iter().map(|c| c.changed_cells).sum()
    }

    pub fn is_unchanged(&self) -> bool {
        self.total_changed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let report = RepairReport {
            n_rows: 10,
            groups: vec![
                GroupSummary {
                    label: "A".to_string(),
                    size: 4,
                },
                GroupSummary {
                    label: "B".to_string(),
                    size: 6,
                },
            ],
            num_quantiles: 4,
            columns: vec![
                ColumnSummary {
                    column: 1,
                    unique_values: 10,
                    changed_cells: 3,
                },
                ColumnSummary {
                    column: 2,
                    unique_values: 7,
                    changed_cells: 0,
                },
            ],
        };
        assert_eq!(report.n_groups(), 2);
        assert_eq!(report.total_changed(), 3);
        assert!(!report.is_unchanged());
        assert_eq!(report.column(2).map(|c| c.unique_values), Some(7));
        assert!(report.column(0).is_none());
        assert!(RepairReport::default().is_unchanged());
    }
}
