// src/stats/mod.rs
pub mod correlation;
pub mod density;

pub use correlation::{CorrelationMatrix, correlation_matrix, pearson};
pub use density::{HistogramBin, gaussian_kde, histogram, scott_bandwidth};
