// src/transforms/derive.rs

use crate::columns::{AVERAGE_PRICE, HIGH, LOW, OPEN, WEEK52_HIGH, WEEK52_LOW, WEEK52_RANGE};
use crate::error::Result;
use crate::table::{Column, Table, Value};
use tracing::debug;

/// Adds `Average Price` = (Open + High + Low) / 3.
pub fn with_average_price(table: Table) -> Result<Table> {
    let open = table.numbers(OPEN)?;
    let high = table.numbers(HIGH)?;
    let low = table.numbers(LOW)?;

    let values = open
        .iter()
        .zip(&high)
        .zip(&low)
        .map(|((o, h), l)| match (o, h, l) {
            (Some(o), Some(h), Some(l)) => Value::number((o + h + l) / 3.0),
            _ => Value::Missing,
        })
        .collect();

    debug!(column = AVERAGE_PRICE, "derived");
    table.with_column(Column::new(AVERAGE_PRICE, values))
}

/// Adds `52 Week Range` = 52 Week High - 52 Week Low. Negative ranges pass through.
pub fn with_week52_range(table: Table) -> Result<Table> {
    let high = table.numbers(WEEK52_HIGH)?;
    let low = table.numbers(WEEK52_LOW)?;

    let values = high
        .iter()
        .zip(&low)
        .map(|(h, l)| match (h, l) {
            (Some(h), Some(l)) => Value::number(h - l),
            _ => Value::Missing,
        })
        .collect();

    debug!(column = WEEK52_RANGE, "derived");
    table.with_column(Column::new(WEEK52_RANGE, values))
}

pub fn derive_columns(table: Table) -> Result<Table> {
    with_week52_range(with_average_price(table)?)
}
