// src/present/json.rs

use super::Presenter;
use crate::error::Result;
use crate::pipeline::Report;
use std::io::Write;

/// Writes the chart specifications as pretty JSON, for an external viewer.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, report: &Report) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &report.charts)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Analysis, AnalysisConfig};
    use crate::table::load_csv_from_reader;

    const ROWS: &str = "\
Company Name,Industry,Open,High,Low,Previous Close,Last Traded Price,Change,Percentage Change,Share Volume,Value (Indian Rupee),52 Week High,52 Week Low,365 Day Percentage Change,30 Day Percentage Change
A,Banks,1,2,3,2,2,0.1,1.0,10,20,5,1,3,1
B,IT,2,3,4,3,3,0.2,2.0,20,60,6,2,4,2
C,IT,3,4,5,4,5,0.3,0.5,30,150,8,2,5,3
";

    #[test]
    fn writes_all_five_charts() {
        // Arrange
        let raw = load_csv_from_reader(ROWS.as_bytes()).unwrap();
        let report = Analysis::new(AnalysisConfig::default()).run(raw).unwrap();
        let mut presenter = JsonPresenter::new(Vec::new());

        // Act
        presenter.present(&report).unwrap();

        // Assert
        let json: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();
        let charts = json.as_array().unwrap();
        assert_eq!(charts.len(), 5);
        assert_eq!(charts[0]["id"], "price_distribution");
        assert_eq!(charts[0]["kind"]["type"], "histogram");
        assert_eq!(charts[4]["kind"]["color_map"], "coolwarm");
    }
}
