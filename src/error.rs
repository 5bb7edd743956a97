// src/error.rs

use thiserror::Error;

/// Everything that can stop an analysis run.
#[derive(Debug, Error)]
pub enum EdaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Statistics error: {0}")]
    Stats(String),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EdaError>;
