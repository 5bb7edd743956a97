// src/transforms/fill.rs

use crate::columns::{NUMERIC_COLUMNS, PRICE_COLUMNS};
use crate::table::{Column, ColumnKind, Table, Value};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::collections::HashMap;
use tracing::{debug, warn};

/// How missing cells of one column are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    /// Literal zero. On a text column this writes the text "0".
    Zero,
    /// Column mean; zero when the column has no numbers at all.
    Mean,
    /// Leave the missing marker in place.
    Keep,
}

/// Per-column fill decisions. Overrides win, then the column's kind decides.
/// A column with no values at all falls under the text policy.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPlan {
    pub numeric: FillPolicy,
    pub text: FillPolicy,
    pub overrides: HashMap<String, FillPolicy>,
}

impl FillPlan {
    /// Zero everywhere, text columns included. This conflates "absent" with
    /// zero and turns missing names into "0".
    pub fn uniform_zero() -> Self {
        Self {
            numeric: FillPolicy::Zero,
            text: FillPolicy::Zero,
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, column: impl Into<String>, policy: FillPolicy) -> Self {
        self.overrides.insert(column.into(), policy);
        self
    }

    pub fn policy_for(&self, column: &Column) -> FillPolicy {
        if let Some(policy) = self.overrides.get(&column.name) {
            return *policy;
        }
        match column.kind() {
            ColumnKind::Numeric => self.numeric,
            ColumnKind::Text | ColumnKind::Empty => self.text,
        }
    }
}

impl Default for FillPlan {
    /// Mean for prices, zero for the other numeric columns, keep for text.
    fn default() -> Self {
        let mut overrides: HashMap<String, FillPolicy> = NUMERIC_COLUMNS
            .iter()
            .map(|name| (name.to_string(), FillPolicy::Zero))
            .collect();
        for name in PRICE_COLUMNS {
            overrides.insert(name.to_string(), FillPolicy::Mean);
        }
        Self {
            numeric: FillPolicy::Zero,
            text: FillPolicy::Keep,
            overrides,
        }
    }
}

/// Missing cells of one column, as printed before the fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// Missing cells per column, in column order.
pub fn missing_counts(table: &Table) -> Vec<MissingCount> {
    table
        .columns()
        .iter()
        .map(|c| MissingCount {
            column: c.name.clone(),
            missing: c.missing_count(),
        })
        .collect()
}

pub fn total_missing(table: &Table) -> usize {
    table.columns().iter().map(Column::missing_count).sum()
}

/// Replaces missing markers column by column according to `plan`.
pub fn fill_missing(table: Table, plan: &FillPlan) -> Table {
    table.map_columns(|column| {
        let policy = plan.policy_for(&column);
        fill_column(column, policy)
    })
}

fn fill_column(column: Column, policy: FillPolicy) -> Column {
    let missing = column.missing_count();
    if missing == 0 || policy == FillPolicy::Keep {
        return column;
    }

    let fill = match (policy, column.kind()) {
        (FillPolicy::Zero, ColumnKind::Text) => {
            warn!(column = %column.name, missing, "zero-filling a text column");
            Value::text("0")
        }
        (FillPolicy::Mean, ColumnKind::Text) => {
            warn!(column = %column.name, "mean fill ignored for a text column");
            return column;
        }
        (FillPolicy::Mean, _) => {
            let present = column.present_numbers();
            if present.is_empty() { Value::Number(0.0) } else { Value::number(present.iter().mean()) }
        }
        _ => Value::Number(0.0),
    };

    debug!(column = %column.name, missing, ?policy, fill = %fill, "filled missing values");
    let values = column
        .values
        .into_iter()
        .map(|v| if v.is_missing() { fill.clone() } else { v })
        .collect();
    Column::new(column.name, values)
}
