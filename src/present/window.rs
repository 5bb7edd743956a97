// src/present/window.rs

use super::Presenter;
use crate::charts::{BarDatum, Chart, ChartKind, ColorMap};
use crate::error::{EdaError, Result};
use crate::pipeline::Report;
use crate::stats::HistogramBin;
use eframe::egui;
use egui::{Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

/// Opens one native window; a side panel switches between the charts.
pub struct WindowPresenter {
    title: String,
}

impl WindowPresenter {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Default for WindowPresenter {
    fn default() -> Self {
        Self::new("Market Explorer")
    }
}

impl Presenter for WindowPresenter {
    fn present(&mut self, report: &Report) -> Result<()> {
        let app = ChartViewer {
            charts: report.charts.clone(),
            selected: 0,
        };

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 750.0])
                .with_title(self.title.clone()),
            ..Default::default()
        };

        eframe::run_native(&self.title, native_options, Box::new(|_cc| Box::new(app)))
            .map_err(|e| EdaError::Render(e.to_string()))
    }
}

struct ChartViewer {
    charts: Vec<Chart>,
    selected: usize,
}

impl eframe::App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("chart_list").resizable(false).show(ctx, |ui| {
            ui.heading("Charts");
            ui.separator();
            for (i, chart) in self.charts.iter().enumerate() {
                ui.selectable_value(&mut self.selected, i, chart.title.as_str());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(chart) = self.charts.get(self.selected) else {
                ui.label("Nothing to show.");
                return;
            };
            ui.heading(chart.title.as_str());
            ui.separator();
            match &chart.kind {
                ChartKind::Histogram { bins, density } => draw_histogram(ui, chart, bins, density),
                ChartKind::Bar { bars, .. } => draw_bars(ui, chart, bars),
                ChartKind::Scatter { points } => draw_scatter(ui, chart, points),
                ChartKind::Heatmap { labels, cells, annotate, color_map } => {
                    draw_heatmap(ui, labels, cells, *annotate, *color_map)
                }
            }
        });
    }
}

fn base_plot(chart: &Chart) -> Plot {
    Plot::new(format!("{:?}", chart.id))
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
}

fn draw_histogram(ui: &mut egui::Ui, chart: &Chart, bins: &[HistogramBin], density: &[(f64, f64)]) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| Bar::new(b.center(), b.count as f64).width(b.width()))
        .collect();
    let curve: Vec<[f64; 2]> = density.iter().map(|&(x, y)| [x, y]).collect();

    base_plot(chart).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE).name("Count"));
        plot_ui.line(
            Line::new(PlotPoints::from(curve))
                .color(Color32::DARK_BLUE)
                .stroke(Stroke::new(2.0, Color32::DARK_BLUE))
                .name("Density"),
        );
    });
}

fn draw_bars(ui: &mut egui::Ui, chart: &Chart, data: &[BarDatum]) {
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, d)| Bar::new(i as f64, d.value).width(0.8).name(d.label.as_str()))
        .collect();

    // Category names do not fit under the axis; list them by bar position.
    egui::CollapsingHeader::new(format!("{} ({})", chart.x_label, data.len()))
        .id_source(format!("{:?}_labels", chart.id))
        .show(ui, |ui| {
            egui::Grid::new(format!("{:?}_grid", chart.id)).striped(true).show(ui, |ui| {
                for (i, d) in data.iter().enumerate() {
                    ui.label(i.to_string());
                    ui.label(d.label.as_str());
                    ui.label(format!("{:.2}", d.value));
                    ui.end_row();
                }
            });
        });

    base_plot(chart).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE).name(chart.y_label.as_str()));
    });
}

fn draw_scatter(ui: &mut egui::Ui, chart: &Chart, points: &[(f64, f64)]) {
    let xy: Vec<[f64; 2]> = points.iter().map(|&(x, y)| [x, y]).collect();
    base_plot(chart).show(ui, |plot_ui| {
        plot_ui.points(Points::new(PlotPoints::from(xy)).radius(3.0).color(Color32::LIGHT_BLUE));
    });
}

fn draw_heatmap(
    ui: &mut egui::Ui,
    labels: &[String],
    cells: &[Vec<Option<f64>>],
    annotate: bool,
    color_map: ColorMap,
) {
    egui::ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("correlation_grid").spacing([2.0, 2.0]).show(ui, |ui| {
            ui.label("");
            for label in labels {
                ui.label(RichText::new(label.as_str()).small());
            }
            ui.end_row();

            for (label, row) in labels.iter().zip(cells) {
                ui.label(RichText::new(label.as_str()).small());
                for cell in row {
                    let (fill, text) = match cell {
                        Some(r) => {
                            let [red, green, blue] = color_map.rgb(*r);
                            (Color32::from_rgb(red, green, blue), format!("{r:.2}"))
                        }
                        None => (Color32::DARK_GRAY, "n/a".to_string()),
                    };
                    let text = if annotate { text } else { "     ".to_string() };
                    ui.label(
                        RichText::new(text)
                            .monospace()
                            .color(Color32::BLACK)
                            .background_color(fill),
                    );
                }
                ui.end_row();
            }
        });
    });
}
