// src/charts/builders.rs

use super::spec::{BarDatum, Chart, ChartId, ChartKind, ColorMap, FigureSize};
use crate::columns::{
    COMPANY_NAME, INDUSTRY, LAST_TRADED_PRICE, PERCENTAGE_CHANGE, WEEK52_HIGH, WEEK52_LOW,
};
use crate::error::Result;
use crate::stats::{CorrelationMatrix, gaussian_kde, histogram};
use crate::table::Table;

/// Histogram of `Last Traded Price` with a density curve on the count scale.
pub fn price_distribution(table: &Table, bins: usize, kde_points: usize) -> Result<Chart> {
    let prices = table.column(LAST_TRADED_PRICE)?.present_numbers();
    let bins = histogram(&prices, bins);
    let bin_width = bins.first().map_or(0.0, |b| b.width());
    let density = gaussian_kde(&prices, kde_points, prices.len() as f64 * bin_width)?;

    Ok(Chart {
        id: ChartId::PriceDistribution,
        title: "Distribution of Last Traded Price".into(),
        x_label: LAST_TRADED_PRICE.into(),
        y_label: "Frequency".into(),
        size: FigureSize::WIDE,
        kind: ChartKind::Histogram { bins, density },
    })
}

/// The first `top_n` rows of an already sorted table, as bars.
/// Rows without a percentage change are skipped.
pub fn top_movers(sorted: &Table, top_n: usize) -> Result<Chart> {
    let head = sorted.head(top_n);
    let names = &head.column(COMPANY_NAME)?.values;
    let changes = head.numbers(PERCENTAGE_CHANGE)?;

    let bars = names
        .iter()
        .zip(changes)
        .filter_map(|(name, change)| {
            Some(BarDatum {
                label: name.to_string(),
                value: change?,
            })
        })
        .collect();

    Ok(Chart {
        id: ChartId::TopMovers,
        title: format!("Top {top_n} Companies with Highest Percentage Change"),
        x_label: COMPANY_NAME.into(),
        y_label: PERCENTAGE_CHANGE.into(),
        size: FigureSize::WIDE,
        kind: ChartKind::Bar { bars, label_rotation: 45.0 },
    })
}

/// One bar per industry from the grouped means.
pub fn industry_prices(industry_means: &Table) -> Result<Chart> {
    let industries = &industry_means.column(INDUSTRY)?.values;
    let means = industry_means.numbers(LAST_TRADED_PRICE)?;

    let bars = industries
        .iter()
        .zip(means)
        .filter_map(|(industry, mean)| {
            Some(BarDatum {
                label: industry.to_string(),
                value: mean?,
            })
        })
        .collect();

    Ok(Chart {
        id: ChartId::IndustryPrices,
        title: "Average Last Traded Price by Industry".into(),
        x_label: INDUSTRY.into(),
        y_label: "Average Last Traded Price".into(),
        size: FigureSize::LARGE,
        kind: ChartKind::Bar { bars, label_rotation: 90.0 },
    })
}

pub fn week52_scatter(table: &Table) -> Result<Chart> {
    let highs = table.numbers(WEEK52_HIGH)?;
    let lows = table.numbers(WEEK52_LOW)?;
    let points = highs
        .into_iter()
        .zip(lows)
        .filter_map(|(h, l)| Some((h?, l?)))
        .collect();

    Ok(Chart {
        id: ChartId::Week52Scatter,
        title: "Scatter Plot of 52 Week High vs 52 Week Low".into(),
        x_label: WEEK52_HIGH.into(),
        y_label: WEEK52_LOW.into(),
        size: FigureSize::WIDE,
        kind: ChartKind::Scatter { points },
    })
}

pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> Chart {
    Chart {
        id: ChartId::CorrelationHeatmap,
        title: "Correlation Matrix".into(),
        x_label: String::new(),
        y_label: String::new(),
        size: FigureSize::LARGE,
        kind: ChartKind::Heatmap {
            labels: matrix.labels.clone(),
            cells: matrix.values.clone(),
            annotate: true,
            color_map: ColorMap::Coolwarm,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Value};

    fn snapshot() -> Table {
        Table::new(vec![
            Column::from_texts(COMPANY_NAME, &["A", "B", "C", "D"]),
            Column::from_texts(INDUSTRY, &["Power", "Banks", "Power", "IT"]),
            Column::from_numbers(LAST_TRADED_PRICE, &[10.0, 20.0, 30.0, f64::NAN]),
            Column::from_numbers(PERCENTAGE_CHANGE, &[5.0, 4.0, f64::NAN, 1.0]),
            Column::from_numbers(WEEK52_HIGH, &[12.0, 25.0, 31.0, 8.0]),
            Column::from_numbers(WEEK52_LOW, &[9.0, f64::NAN, 20.0, 2.0]),
        ])
        .unwrap()
    }

    #[test]
    fn distribution_counts_present_prices() {
        let chart = price_distribution(&snapshot(), 30, 50).unwrap();
        match chart.kind {
            ChartKind::Histogram { bins, density } => {
                assert_eq!(bins.len(), 30);
                assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
                assert_eq!(density.len(), 50);
            }
            other => panic!("expected a histogram, got {other:?}"),
        }
    }

    #[test]
    fn top_movers_is_capped_and_skips_gaps() {
        let chart = top_movers(&snapshot(), 3).unwrap();
        let ChartKind::Bar { bars, label_rotation } = chart.kind else {
            panic!("expected bars");
        };
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"], "C has no change and D is past the cap.");
        assert_eq!(label_rotation, 45.0);
    }

    #[test]
    fn scatter_pairs_only_complete_rows() {
        let chart = week52_scatter(&snapshot()).unwrap();
        assert_eq!(chart.mark_count(), 3);
        assert_eq!(chart.x_label, WEEK52_HIGH);
    }

    #[test]
    fn industry_bars_follow_table_order() {
        let means = Table::new(vec![
            Column::from_texts(INDUSTRY, &["Banks", "IT"]),
            Column::new(LAST_TRADED_PRICE, vec![Value::Number(20.0), Value::Missing]),
        ])
        .unwrap();
        let chart = industry_prices(&means).unwrap();
        assert_eq!(chart.mark_count(), 1);
        assert_eq!(chart.size, FigureSize::LARGE);
    }
}
