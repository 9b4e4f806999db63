//! Quantile-bucketed median repair of one outcome column
//!
//! Every group is cut into `num_quantiles` buckets by proportional offsets.
//! Bucket `q` of every group is handled together: each group contributes a
//! local median, the median of those is the target, and every row in the
//! bucket moves `repair_level` of its rank distance toward the target.
//!
//! Medians take the element at `len / 2` of the sorted slice, i.e. the upper
//! middle element for even lengths. They are never averaged, so the target is
//! always a rank that exists in the column.

use crate::index::NumericIndex;
use crate::stratify::{RankedRow, Stratification};
use repair_core::{Error, Result};
use tracing::{debug, trace};

/// Repaired values of one outcome column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRepair {
    /// Dataset column index
    pub column: usize,
    /// New value of every row, in row order
    pub values: Vec<f64>,
    /// Number of rows whose value changed
    pub changed: usize,
}

/// Slice of a group of `size` rows covered by the bucket starting at the
/// fractional position `cursor`. Returns `(offset, count)`.
///
/// Both ends are rounded half away from zero, so consecutive buckets tile the
/// group without drift.
pub fn bucket_bounds(cursor: f64, unit: f64, size: usize) -> (usize, usize) {
    let size = size as f64;
    let offset = (cursor * size).round().max(0.0) as usize;
    let end = ((cursor + unit) * size).round().max(0.0) as usize;
    (offset, end.saturating_sub(offset))
}

/// Element at `len / 2` of an ascending slice
pub fn upper_median<T: Copy>(sorted: &[T]) -> Option<T> {
    sorted.get(sorted.len() / 2).copied()
}

/// Rank reached by moving `level` of the way from `rank` to `target`,
/// clamped into `[0, n_unique - 1]`
pub fn shifted_rank(rank: usize, target: usize, level: f64, n_unique: usize) -> usize {
    if n_unique == 0 {
        return rank;
    }
    let distance = target as f64 - rank as f64;
    let shift = (distance * level).round();
    let max_rank = (n_unique - 1) as f64;
    (rank as f64 + shift).clamp(0.0, max_rank) as usize
}

/// Repair one outcome column.
///
/// Reads only the column's index and the shared stratification; the returned
/// values are a fresh working copy.
pub fn repair_column(
    index: &NumericIndex,
    strata: &Stratification,
    repair_level: f64,
) -> Result<ColumnRepair> {
    let original = index.row_ranks();
    let num_quantiles = strata.num_quantiles();
    if num_quantiles == 0 || index.is_empty() {
        return Ok(ColumnRepair {
            column: index.column(),
            values: index.row_values(),
            changed: 0,
        });
    }

    let unit = 1.0 / num_quantiles as f64;
    let sorted: Vec<Vec<RankedRow>> = strata
        .groups()
        .iter()
        .map(|g| g.sorted_by(original))
        .collect();
    let mut cursors = vec![0.0_f64; sorted.len()];
    let mut repaired = original.to_vec();

    for quantile in 0..num_quantiles {
        let mut bucket_rows = Vec::new();
        let mut local_medians = Vec::with_capacity(sorted.len());

        for (entries, cursor) in sorted.iter().zip(cursors.iter_mut()) {
            let (offset, count) = bucket_bounds(*cursor, unit, entries.len());
            *cursor += unit;

            let end = (offset + count).min(entries.len());
            let slice = &entries[offset.min(end)..end];
            // Entries are already ascending by rank
            if let Some(median) = upper_median(slice) {
                local_medians.push(median.rank);
            }
            bucket_rows.extend(slice.iter().map(|e| e.row));
        }

        local_medians.sort_unstable();
        let Some(target) = upper_median(&local_medians) else {
            continue;
        };
        // The target must name a value that maps back to itself
        if index.value(target).and_then(|v| index.rank_of(v)) != Some(target) {
            return Err(Error::Invariant(format!(
                "Median rank {target} does not index the {} values of column {}",
                index.len(),
                index.column()
            )));
        }
        trace!(
            column = index.column(),
            quantile,
            ?local_medians,
            target,
            rows = bucket_rows.len(),
            "bucket median"
        );

        for row in bucket_rows {
            repaired[row] = shifted_rank(original[row], target, repair_level, index.len());
        }
    }

    let changed = repaired
        .iter()
        .zip(original)
        .filter(|(new, old)| new != old)
        .count();
    debug!(
        column = index.column(),
        unique = index.len(),
        changed,
        "column repaired"
    );

    Ok(ColumnRepair {
        column: index.column(),
        values: repaired.iter().map(|&r| index.values()[r]).collect(),
        changed,
    })
}
