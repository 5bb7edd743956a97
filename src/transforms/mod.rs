// src/transforms/mod.rs

// Each step takes a table and hands back a new one.
pub mod aggregate;
pub mod coerce;
pub mod derive;
pub mod fill;
pub mod sort;

pub use aggregate::{group_mean, industry_mean_price};
pub use coerce::{coerce_numeric, coerce_value};
pub use derive::{derive_columns, with_average_price, with_week52_range};
pub use fill::{FillPlan, FillPolicy, MissingCount, fill_missing, missing_counts, total_missing};
pub use sort::sort_descending;
