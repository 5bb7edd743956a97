// src/table/loader.rs

use super::frame::{Column, Table};
use super::value::Value;
use crate::error::{EdaError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Field contents a dataframe reader treats as "no value".
pub const MISSING_TOKENS: [&str; 13] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "#N/A", "<NA>", "None",
];

pub fn is_missing_token(field: &str) -> bool {
    MISSING_TOKENS.contains(&field)
}

/// Reads a headed CSV file into a `Table`.
///
/// A row with the wrong number of fields, or bytes that are not UTF-8,
/// abort the load. There is no retry.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading table");
    let file = File::open(path)?;
    load_csv_from_reader(file)
}

/// Same as [`load_csv`] for any byte source.
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for result in rdr.records() {
        let record = result?;
        for (slot, field) in raw.iter_mut().zip(record.iter()) {
            slot.push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(raw)
        .map(|(name, fields)| infer_column(name, fields))
        .collect();

    let table = Table::new(columns)?;
    info!(rows = table.n_rows(), cols = table.n_cols(), "table loaded");
    Ok(table)
}

/// A column is numeric only when every present field parses; otherwise all
/// present fields stay text, numeric-looking ones included.
fn infer_column(name: String, fields: Vec<String>) -> Column {
    let parsed: Option<Vec<Value>> = fields
        .iter()
        .map(|field| {
            if is_missing_token(field) {
                Some(Value::Missing)
            } else {
                field.parse::<f64>().ok().map(Value::number)
            }
        })
        .collect();

    let values = match parsed {
        Some(values) => values,
        None => {
            debug!(column = %name, "column kept as text");
            fields
                .into_iter()
                .map(|field| {
                    if is_missing_token(&field) { Value::Missing } else { Value::Text(field) }
                })
                .collect()
        }
    };
    Column::new(name, values)
}

/// Fails on the first name the table does not have.
pub fn verify_required_columns(table: &Table, required: &[&str]) -> Result<()> {
    for name in required {
        if !table.has_column(name) {
            return Err(EdaError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnKind;

    const SAMPLE: &str = "\
Company Name,Industry,Open,Series
Alpha Ltd, Banks ,10.5,EQ
Beta Ltd,,-,EQ
Gamma Ltd,Power,NaN,BE
";

    #[test]
    fn infers_types_per_column() {
        // Act
        let table = load_csv_from_reader(SAMPLE.as_bytes()).unwrap();

        // Assert
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.column("Company Name").unwrap().kind(), ColumnKind::Text);
        // "-" is not a number, so the whole column is text until coerced.
        let open = table.column("Open").unwrap();
        assert_eq!(open.kind(), ColumnKind::Text);
        assert_eq!(open.values[0], Value::text("10.5"));
        assert_eq!(open.values[2], Value::Missing, "NaN is a missing token.");
    }

    #[test]
    fn trims_fields_and_reads_empty_as_missing() {
        let table = load_csv_from_reader(SAMPLE.as_bytes()).unwrap();
        let industry = table.column("Industry").unwrap();
        assert_eq!(industry.values[0], Value::text("Banks"));
        assert!(industry.values[1].is_missing());
    }

    #[test]
    fn all_numeric_column_is_numeric() {
        let csv = "a,b\n1,x\n2.5,y\n,z\n";
        let table = load_csv_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.numbers("a").unwrap(), vec![Some(1.0), Some(2.5), None]);
    }

    #[test]
    fn ragged_row_aborts() {
        let csv = "a,b\n1,2\n3\n";
        assert!(matches!(load_csv_from_reader(csv.as_bytes()), Err(EdaError::Csv(_))));
    }

    #[test]
    fn missing_file_aborts() {
        assert!(matches!(load_csv("definitely/not/here.csv"), Err(EdaError::Io(_))));
    }

    #[test]
    fn verify_reports_first_absent_column() {
        let table = load_csv_from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(verify_required_columns(&table, &["Open", "Industry"]).is_ok());
        let err = verify_required_columns(&table, &["Open", "High", "Low"]).unwrap_err();
        assert!(matches!(err, EdaError::MissingColumn(c) if c == "High"));
    }
}
