// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod charts;
pub mod columns;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod present;
pub mod stats;
pub mod table;
pub mod transforms;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `table` ---
pub use table::{Column, ColumnKind, Table, Value, load_csv, load_csv_from_reader};

// --- From `pipeline` ---
pub use pipeline::{Analysis, AnalysisConfig, Report};

// --- From `charts` ---
pub use charts::{Chart, ChartId, ChartKind};

// --- From `transforms` ---
pub use transforms::{FillPlan, FillPolicy};

// --- From `present` ---
pub use present::{JsonPresenter, Presenter, WindowPresenter};

// --- Errors and settings ---
pub use config::Settings;
pub use error::{EdaError, Result};
