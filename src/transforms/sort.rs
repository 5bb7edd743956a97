// src/transforms/sort.rs

use crate::error::Result;
use crate::table::Table;
use std::cmp::Ordering;

/// New table ordered by `column`, largest first.
///
/// Stable: equal keys keep their original order. Missing keys go last.
pub fn sort_descending(table: &Table, column: &str) -> Result<Table> {
    let keys = table.numbers(column)?;
    let mut order: Vec<usize> = (0..table.n_rows()).collect();
    order.sort_by(|&a, &b| match (keys[a], keys[b]) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    Ok(table.take_rows(&order))
}
