//! Reassembly of repaired columns into rows

use crate::classify::{ColumnRole, ColumnRoles};
use crate::quantile::ColumnRepair;
use repair_core::{Cell, Dataset};

/// Build the output dataset.
///
/// Outcome columns with a repair take the repaired number; every other cell
/// (ignored, protected, or an outcome column with no repair) is copied from
/// `original`.
pub fn assemble(original: &Dataset, roles: &ColumnRoles, repaired: &[ColumnRepair]) -> Dataset {
    let mut by_column: Vec<Option<&[f64]>> = vec![None; roles.len()];
    for repair in repaired {
        if let Some(slot) = by_column.get_mut(repair.column) {
            *slot = Some(repair.values.as_slice());
        }
    }

    let rows = original
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, cell)| {
                    match (roles.role(j), by_column.get(j).copied().flatten()) {
                        (Some(ColumnRole::Outcome), Some(values)) => Cell::Number(values[i]),
                        _ => cell.clone(),
                    }
                })
                .collect()
        })
        .collect();
    Dataset::new(rows)
}
