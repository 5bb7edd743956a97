// src/bin/market_explorer.rs

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use market_explorer::config::DEFAULT_CONFIG_PATH;
use market_explorer::present::console;
use market_explorer::{Analysis, FillPlan, JsonPresenter, Presenter, Settings, WindowPresenter, load_csv};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exploratory analysis of a stock-market snapshot CSV.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV to analyse. Overrides `data.path` from the config.
    data: Option<PathBuf>,

    /// Optional TOML settings file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Where the charts go.
    #[arg(long, value_enum, default_value_t = Output::Window)]
    output: Output,

    /// Missing-value handling. `zero` fills every column, text included, with 0.
    #[arg(long, value_enum)]
    fill: Option<FillMode>,

    /// Rows of the loaded table to print before analysing.
    #[arg(long, default_value_t = 5)]
    preview: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    /// An interactive chart window.
    Window,
    /// Chart specifications as JSON on stdout.
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum FillMode {
    /// Mean for prices, zero for other numbers, text left missing.
    Default,
    /// Zero everywhere.
    Zero,
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;
    let mut config = settings.analysis_config();
    match cli.fill {
        Some(FillMode::Zero) => config.fill = FillPlan::uniform_zero(),
        Some(FillMode::Default) => config.fill = FillPlan::default(),
        None => {}
    }

    let data_path = cli.data.unwrap_or(settings.data.path);
    let raw = load_csv(&data_path).with_context(|| format!("reading {}", data_path.display()))?;

    if cli.preview > 0 {
        eprintln!("{}", console::preview_table(&raw, cli.preview));
    }

    let report = Analysis::new(config).run(raw).context("analysis failed")?;
    eprintln!("{}", console::missing_counts_table(&report.missing_before_fill));
    info!(charts = report.charts.len(), "analysis complete");

    let mut presenter: Box<dyn Presenter> = match cli.output {
        Output::Window => Box::new(WindowPresenter::default()),
        Output::Json => Box::new(JsonPresenter::new(std::io::stdout().lock())),
    };
    presenter.present(&report).context("presenting charts")?;

    Ok(())
}
