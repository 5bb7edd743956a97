// src/charts/spec.rs

//! Chart descriptions as plain data. Nothing in here draws; a presenter does.

use crate::stats::HistogramBin;
use serde::Serialize;

/// Stable identifiers for the five charts of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    PriceDistribution,
    TopMovers,
    IndustryPrices,
    Week52Scatter,
    CorrelationHeatmap,
}

/// Figure size in inches, width then height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub const WIDE: FigureSize = FigureSize { width: 10.0, height: 6.0 };
    pub const LARGE: FigureSize = FigureSize { width: 12.0, height: 8.0 };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Histogram {
        bins: Vec<HistogramBin>,
        /// Kernel density scaled to counts, as (x, y) pairs.
        density: Vec<(f64, f64)>,
    },
    Bar {
        bars: Vec<BarDatum>,
        /// Tick label rotation in degrees.
        label_rotation: f32,
    },
    Scatter {
        points: Vec<(f64, f64)>,
    },
    Heatmap {
        labels: Vec<String>,
        cells: Vec<Vec<Option<f64>>>,
        annotate: bool,
        color_map: ColorMap,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMap {
    /// Diverging blue-white-red over [-1, 1].
    Coolwarm,
}

impl ColorMap {
    /// RGB for `value`, clamped to [-1, 1].
    pub fn rgb(self, value: f64) -> [u8; 3] {
        match self {
            ColorMap::Coolwarm => {
                const COLD: [f64; 3] = [59.0, 76.0, 192.0];
                const MID: [f64; 3] = [221.0, 221.0, 221.0];
                const HOT: [f64; 3] = [180.0, 4.0, 38.0];
                let t = value.clamp(-1.0, 1.0);
                let (from, to, w) = if t < 0.0 { (MID, COLD, -t) } else { (MID, HOT, t) };
                let mix = |i: usize| (from[i] + (to[i] - from[i]) * w).round() as u8;
                [mix(0), mix(1), mix(2)]
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: ChartId,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: FigureSize,
    pub kind: ChartKind,
}

impl Chart {
    /// Number of plotted marks: bins, bars, points or cells.
    pub fn mark_count(&self) -> usize {
        match &self.kind {
            ChartKind::Histogram { bins, .. } => bins.len(),
            ChartKind::Bar { bars, .. } => bars.len(),
            ChartKind::Scatter { points } => points.len(),
            ChartKind::Heatmap { labels, .. } => labels.len() * labels.len(),
        }
    }
}
