// src/pipeline.rs

use crate::charts::{self, Chart};
use crate::columns::{self, NUMERIC_COLUMNS, PERCENTAGE_CHANGE};
use crate::config::{DEFAULT_HISTOGRAM_BINS, DEFAULT_KDE_POINTS, DEFAULT_TOP_N};
use crate::error::Result;
use crate::stats::{CorrelationMatrix, correlation_matrix};
use crate::table::{Table, verify_required_columns};
use crate::transforms::{
    FillPlan, MissingCount, coerce_numeric, derive_columns, fill_missing, industry_mean_price,
    missing_counts, sort_descending,
};
use serde::Serialize;
use tracing::info;

/// Knobs for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub top_n: usize,
    pub histogram_bins: usize,
    pub kde_points: usize,
    pub fill: FillPlan,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            kde_points: DEFAULT_KDE_POINTS,
            fill: FillPlan::default(),
        }
    }
}

/// Everything a run produces. Each stage's output is kept so it can be
/// inspected on its own.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Missing cells per column after coercion, before the fill.
    pub missing_before_fill: Vec<MissingCount>,
    /// Coerced, filled and derived.
    pub table: Table,
    pub industry_means: Table,
    pub sorted: Table,
    pub correlations: CorrelationMatrix,
    pub charts: Vec<Chart>,
}

impl Report {
    pub fn chart(&self, id: charts::ChartId) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id)
    }
}

/// Threads a freshly loaded table through every step.
pub struct Analysis {
    config: AnalysisConfig,
}

impl Analysis {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, raw: Table) -> Result<Report> {
        // 1. Schema
        verify_required_columns(&raw, &columns::required_columns())?;

        // 2. Coerce
        let coerced = coerce_numeric(raw, &NUMERIC_COLUMNS)?;
        let missing_before_fill = missing_counts(&coerced);
        let total: usize = missing_before_fill.iter().map(|m| m.missing).sum();
        info!(missing = total, "coerced numeric columns");

        // 3. Fill
        let filled = fill_missing(coerced, &self.config.fill);

        // 4. Derive
        let table = derive_columns(filled)?;

        // 5. Views
        let industry_means = industry_mean_price(&table)?;
        let sorted = sort_descending(&table, PERCENTAGE_CHANGE)?;
        let correlations = correlation_matrix(&table);
        info!(
            industries = industry_means.n_rows(),
            numeric_columns = correlations.len(),
            "aggregated"
        );

        // 6. Charts
        let charts = vec![
            charts::price_distribution(&table, self.config.histogram_bins, self.config.kde_points)?,
            charts::top_movers(&sorted, self.config.top_n)?,
            charts::industry_prices(&industry_means)?,
            charts::week52_scatter(&table)?,
            charts::correlation_heatmap(&correlations),
        ];

        Ok(Report {
            missing_before_fill,
            table,
            industry_means,
            sorted,
            correlations,
            charts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartId;
    use crate::error::EdaError;
    use crate::table::load_csv_from_reader;

    const SNAPSHOT: &str = "\
Company Name,Symbol,Industry,Series,Open,High,Low,Previous Close,Last Traded Price,Change,Percentage Change,Share Volume,Value (Indian Rupee),52 Week High,52 Week Low,365 Day Percentage Change,30 Day Percentage Change
Alpha,ALP,Banks,EQ,10,20,30,19,21,2,10.5,1000,21000,100,40,12.5,1.5
Beta,BET,Power,EQ,5,6,4,5,5.5,0.5,10,500,2750,7,3,-,2
Gamma,GAM,Banks,EQ,-,8,6,7,7.5,0.5,7.1,200,1500,9,5,3,-1
Delta,DEL,,EQ,1,2,3,2,2,0,,10,20,2,4,1,0
";

    #[test]
    fn snapshot_runs_end_to_end() {
        // Arrange
        let raw = load_csv_from_reader(SNAPSHOT.as_bytes()).unwrap();

        // Act
        let report = Analysis::new(AnalysisConfig::default()).run(raw).unwrap();

        // Assert
        assert_eq!(report.table.n_rows(), 4);
        assert_eq!(report.charts.len(), 5);
        assert_eq!(report.industry_means.n_rows(), 2, "Delta has no industry.");

        let open_missing = report.missing_before_fill.iter().find(|m| m.column == "Open").unwrap();
        assert_eq!(open_missing.missing, 1, "'-' is coerced to missing and counted.");

        let avg = report.table.numbers(columns::AVERAGE_PRICE).unwrap();
        assert_eq!(avg[0], Some(20.0));
        let range = report.table.numbers(columns::WEEK52_RANGE).unwrap();
        assert_eq!(range[0], Some(60.0));
        assert_eq!(range[3], Some(-2.0));
    }

    #[test]
    fn default_fill_leaves_no_numeric_gaps() {
        let raw = load_csv_from_reader(SNAPSHOT.as_bytes()).unwrap();
        let report = Analysis::new(AnalysisConfig::default()).run(raw).unwrap();
        for name in NUMERIC_COLUMNS {
            assert_eq!(report.table.column(name).unwrap().missing_count(), 0, "{name}");
        }
        assert_eq!(report.table.column("Industry").unwrap().missing_count(), 1);
    }

    #[test]
    fn sorted_view_is_non_increasing() {
        let raw = load_csv_from_reader(SNAPSHOT.as_bytes()).unwrap();
        let report = Analysis::new(AnalysisConfig::default()).run(raw).unwrap();
        let keys: Vec<f64> = report.sorted.numbers(PERCENTAGE_CHANGE).unwrap().into_iter().flatten().collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]), "{keys:?}");
    }

    #[test]
    fn heatmap_covers_derived_columns() {
        let raw = load_csv_from_reader(SNAPSHOT.as_bytes()).unwrap();
        let report = Analysis::new(AnalysisConfig::default()).run(raw).unwrap();
        assert!(report.correlations.labels.iter().any(|l| l == columns::AVERAGE_PRICE));
        assert!(report.chart(ChartId::CorrelationHeatmap).is_some());
        assert!(!report.correlations.labels.iter().any(|l| l == "Symbol"));
    }

    #[test]
    fn missing_required_column_aborts() {
        let raw = load_csv_from_reader("Company Name,Industry\nA,B\n".as_bytes()).unwrap();
        let err = Analysis::new(AnalysisConfig::default()).run(raw).unwrap_err();
        assert!(matches!(err, EdaError::MissingColumn(c) if c == "Open"));
    }
}
