// src/transforms/coerce.rs

use crate::error::Result;
use crate::table::{Column, Table, Value};
use tracing::debug;

/// Converts one cell to a number. Text that does not parse becomes `Missing`.
pub fn coerce_value(value: &Value) -> Value {
    match value {
        Value::Text(s) => s.trim().parse::<f64>().map_or(Value::Missing, Value::number),
        other => other.clone(),
    }
}

/// Coerces every listed column to numbers.
///
/// Never fails on cell content; an absent column is an error.
pub fn coerce_numeric(table: Table, columns: &[&str]) -> Result<Table> {
    for name in columns {
        table.column(name)?;
    }

    let coerced = table.map_columns(|column| {
        if !columns.contains(&column.name.as_str()) {
            return column;
        }
        let before = column.missing_count();
        let values: Vec<Value> = column.values.iter().map(coerce_value).collect();
        let column = Column::new(column.name, values);
        let lost = column.missing_count() - before;
        if lost > 0 {
            debug!(column = %column.name, lost, "unparseable values coerced to missing");
        }
        column
    });
    Ok(coerced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdaError;
    use crate::table::ColumnKind;

    #[test]
    fn bad_token_becomes_missing_not_error() {
        // Arrange
        let table = Table::new(vec![
            Column::new("Open", vec![Value::text("10.5"), Value::text("-"), Value::text(" 7 ")]),
            Column::from_texts("Company Name", &["A", "B", "C"]),
        ])
        .unwrap();

        // Act
        let table = coerce_numeric(table, &["Open"]).unwrap();

        // Assert
        let open = table.column("Open").unwrap();
        assert_eq!(open.kind(), ColumnKind::Numeric);
        assert_eq!(open.numbers(), vec![Some(10.5), None, Some(7.0)]);
        assert_eq!(
            table.column("Company Name").unwrap().kind(),
            ColumnKind::Text,
            "Unlisted columns are left alone."
        );
    }

    #[test]
    fn textual_nan_is_missing() {
        assert!(coerce_value(&Value::text("nan")).is_missing());
        assert_eq!(coerce_value(&Value::Number(3.0)), Value::Number(3.0));
        assert!(coerce_value(&Value::Missing).is_missing());
    }

    #[test]
    fn thousands_separators_do_not_parse() {
        assert!(coerce_value(&Value::text("1,234.5")).is_missing());
    }

    #[test]
    fn absent_column_is_reported() {
        let table = Table::new(vec![Column::from_numbers("Open", &[1.0])]).unwrap();
        let err = coerce_numeric(table, &["Open", "High"]).unwrap_err();
        assert!(matches!(err, EdaError::MissingColumn(c) if c == "High"));
    }
}
