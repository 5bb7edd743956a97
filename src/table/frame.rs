// src/table/frame.rs

use super::value::Value;
use crate::error::{EdaError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// What a column holds, judged from its non-missing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
    /// Every cell is missing.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn from_numbers(name: impl Into<String>, xs: &[f64]) -> Self {
        Self::new(name, xs.iter().copied().map(Value::number).collect())
    }

    pub fn from_texts(name: impl Into<String>, xs: &[&str]) -> Self {
        Self::new(name, xs.iter().map(|s| Value::text(*s)).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A column with mixed numbers and text counts as text.
    pub fn kind(&self) -> ColumnKind {
        let mut kind = ColumnKind::Empty;
        for value in &self.values {
            match value {
                Value::Missing => {}
                Value::Number(_) => kind = ColumnKind::Numeric,
                Value::Text(_) => return ColumnKind::Text,
            }
        }
        kind
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Numeric view: `None` for anything that is not a number.
    pub fn numbers(&self) -> Vec<Option<f64>> {
        self.values.iter().map(Value::as_f64).collect()
    }

    /// Only the numbers present, in row order.
    pub fn present_numbers(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_f64).collect()
    }
}

/// The in-memory table: named, ordered columns of equal length.
///
/// Transforms never mutate a table they borrow; they hand back a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table, checking that names are unique and lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(EdaError::DuplicateColumn(column.name.clone()));
            }
        }
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(EdaError::LengthMismatch {
                    column: bad.name.clone(),
                    expected,
                    found: bad.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| EdaError::MissingColumn(name.to_string()))
    }

    /// Numeric view of a named column.
    pub fn numbers(&self, name: &str) -> Result<Vec<Option<f64>>> {
        Ok(self.column(name)?.numbers())
    }

    /// Returns a table with `column` added at the end, or replacing the
    /// column of the same name in place.
    pub fn with_column(mut self, column: Column) -> Result<Self> {
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            let found = column.len();
            return Err(EdaError::LengthMismatch {
                column: column.name,
                expected: self.n_rows(),
                found,
            });
        }
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(slot) => *slot = column,
            None => self.columns.push(column),
        }
        Ok(self)
    }

    /// Applies `f` to every column, keeping order and names.
    pub fn map_columns<F>(self, mut f: F) -> Self
    where
        F: FnMut(Column) -> Column,
    {
        Self {
            columns: self.columns.into_iter().map(&mut f).collect(),
        }
    }

    /// New table holding the given rows, in the given order.
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: indices.iter().map(|&i| c.values[i].clone()).collect(),
            })
            .collect();
        Self { columns }
    }

    /// The first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> Self {
        let indices: Vec<usize> = (0..n.min(self.n_rows())).collect();
        self.take_rows(&indices)
    }

    /// One row as a slice of cells, in column order.
    pub fn row(&self, index: usize) -> Vec<&Value> {
        self.columns.iter().map(|c| &c.values[index]).collect()
    }
}
