// src/table/value.rs

use serde::Serialize;
use std::fmt;

/// A single cell of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent or unparseable. Serialises as `null`.
    Missing,
    Number(f64),
    Text(String),
}

impl Value {
    /// Builds a number cell. NaN never reaches the table; it becomes `Missing`.
    pub fn number(x: f64) -> Self {
        if x.is_nan() { Value::Missing } else { Value::Number(x) }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn from_option(x: Option<f64>) -> Self {
        x.map_or(Value::Missing, Value::number)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "NaN"),
            Value::Number(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}
