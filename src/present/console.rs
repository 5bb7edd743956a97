// src/present/console.rs

//! Plain-text summaries for the terminal.

use crate::table::Table;
use crate::transforms::MissingCount;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as TextTable};

/// Missing cells per column, one row each.
pub fn missing_counts_table(counts: &[MissingCount]) -> TextTable {
    let mut out = TextTable::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Column", "Missing"]);
    for count in counts {
        out.add_row(vec![count.column.clone(), count.missing.to_string()]);
    }
    out
}

/// The first `n` rows with every column, like a dataframe's `head()`.
pub fn preview_table(table: &Table, n: usize) -> TextTable {
    let head = table.head(n);
    let mut out = TextTable::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(head.column_names());
    for i in 0..head.n_rows() {
        out.add_row(head.row(i).into_iter().map(|v| v.to_string()).collect::<Vec<_>>());
    }
    out
}
