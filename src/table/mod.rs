// src/table/mod.rs
pub mod frame;
pub mod loader;
pub mod value;

pub use frame::{Column, ColumnKind, Table};
pub use loader::{load_csv, load_csv_from_reader, verify_required_columns};
pub use value::Value;
