// src/charts/mod.rs
pub mod builders;
pub mod spec;

pub use builders::{correlation_heatmap, industry_prices, price_distribution, top_movers, week52_scatter};
pub use spec::{BarDatum, Chart, ChartId, ChartKind, ColorMap, FigureSize};
