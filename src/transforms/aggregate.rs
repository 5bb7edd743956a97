// src/transforms/aggregate.rs

use crate::columns::{INDUSTRY, LAST_TRADED_PRICE};
use crate::error::Result;
use crate::table::{Column, Table, Value};
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use tracing::debug;

/// Mean of `value` per distinct `key`, as a two-column table.
///
/// Keys come out in ascending order. Rows with a missing key are dropped,
/// missing values are skipped, and a group with no numbers has a missing mean.
pub fn group_mean(table: &Table, key: &str, value: &str) -> Result<Table> {
    let keys = &table.column(key)?.values;
    let values = table.numbers(value)?;

    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (k, v) in keys.iter().zip(values) {
        let k = match k {
            Value::Missing => continue,
            other => other.to_string(),
        };
        let bucket = groups.entry(k).or_default();
        if let Some(v) = v {
            bucket.push(v);
        }
    }

    debug!(key, value, groups = groups.len(), "grouped");
    let (names, means): (Vec<Value>, Vec<Value>) = groups
        .into_iter()
        .map(|(k, xs)| {
            let mean = if xs.is_empty() { Value::Missing } else { Value::number(xs.iter().mean()) };
            (Value::Text(k), mean)
        })
        .unzip();

    Table::new(vec![Column::new(key, names), Column::new(value, means)])
}

/// Mean `Last Traded Price` per `Industry`.
pub fn industry_mean_price(table: &Table) -> Result<Table> {
    group_mean(table, INDUSTRY, LAST_TRADED_PRICE)
}
