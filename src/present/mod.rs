// src/present/mod.rs

//! Ways to show a finished report. The analysis never depends on these.

pub mod console;
pub mod json;
pub mod window;

use crate::error::Result;
use crate::pipeline::Report;

pub use json::JsonPresenter;
pub use window::WindowPresenter;

/// Anything that can show or export the charts of a report.
/// This allows the display layer to be swapped without touching the analysis.
pub trait Presenter {
    fn present(&mut self, report: &Report) -> Result<()>;
}
