//! Common test utilities for repair-median tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use repair_core::{Cell, Dataset};

/// `[outcome, group]` rows: group "A" holds 0..=99, group "B" holds 101..=199
pub fn two_group_dataset() -> Dataset {
    let a = (0..100).map(|i| vec![Cell::from(i as f64), Cell::from("A")]);
    let b = (101..200).map(|i| vec![Cell::from(i as f64), Cell::from("B")]);
    Dataset::new(a.chain(b).collect())
}

/// Same as [`two_group_dataset`] with an identifier prepended to every row
pub fn with_identifiers(data: &Dataset) -> Dataset {
    Dataset::new(
        data.rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut out = vec![Cell::from(format!("id-{i:04}"))];
                out.extend(row.iter().cloned());
                out
            })
            .collect(),
    )
}

/// `[id, group, score_1, score_2]` rows with group-dependent score shifts
pub fn random_dataset(seed: u64, n_rows: usize, n_groups: usize) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = (0..n_rows)
        .map(|i| {
            let group = rng.gen_range(0..n_groups);
            let shift = 10.0 * group as f64;
            vec![
                Cell::from(format!("id-{i}")),
                Cell::from(format!("g{group}")),
                Cell::from(rng.gen_range(0..50) as f64 + shift),
                Cell::from(format!("{}", rng.gen_range(0..1000) as f64 / 10.0 + shift)),
            ]
        })
        .collect();
    Dataset::new(rows)
}

/// One column as numbers
pub fn numeric_column(data: &Dataset, column: usize) -> Vec<f64> {
    data.column(column)
        .map(|c| c.parse_f64().expect("numeric cell"))
        .collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
