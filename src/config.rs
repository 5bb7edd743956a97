// src/config.rs

//! Run settings. Built-in defaults, then an optional TOML file, then
//! `MARKET_EXPLORER__SECTION__KEY` environment variables.

use crate::error::Result;
use crate::pipeline::AnalysisConfig;
use crate::transforms::{FillPlan, FillPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// --- Defaults ---
pub const DEFAULT_DATA_PATH: &str = "nifty_500.csv";
pub const DEFAULT_CONFIG_PATH: &str = "market_explorer.toml";
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;
pub const DEFAULT_KDE_POINTS: usize = 200;
pub const ENV_PREFIX: &str = "MARKET_EXPLORER";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub analysis: AnalysisSettings,
    pub fill: FillSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// CSV to analyse, relative to the working directory.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Bars in the top-movers chart.
    pub top_n: usize,
    pub histogram_bins: usize,
    /// Sample points on the density curve.
    pub kde_points: usize,
}

/// One column's fill policy, e.g. `{ column = "Open", policy = "keep" }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnFill {
    pub column: String,
    pub policy: FillPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FillSettings {
    /// Zero everywhere, text included. Other fill keys are ignored when set.
    pub uniform_zero: bool,
    pub numeric: FillPolicy,
    pub text: FillPolicy,
    /// Applied on top of the built-in per-column policies.
    pub overrides: Vec<ColumnFill>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DATA_PATH) }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            kde_points: DEFAULT_KDE_POINTS,
        }
    }
}

impl Default for FillSettings {
    fn default() -> Self {
        let plan = FillPlan::default();
        Self {
            uniform_zero: false,
            numeric: plan.numeric,
            text: plan.text,
            overrides: Vec::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DataSettings::default(),
            analysis: AnalysisSettings::default(),
            fill: FillSettings::default(),
        }
    }
}

impl FillSettings {
    pub fn to_plan(&self) -> FillPlan {
        if self.uniform_zero {
            return FillPlan::uniform_zero();
        }
        let mut plan = FillPlan {
            numeric: self.numeric,
            text: self.text,
            ..FillPlan::default()
        };
        for o in &self.overrides {
            plan.overrides.insert(o.column.clone(), o.policy);
        }
        plan
    }
}

impl Settings {
    /// Loads settings. The file is optional; a missing one leaves the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = builder.try_deserialize::<Settings>()?;
        Ok(settings)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            top_n: self.analysis.top_n,
            histogram_bins: self.analysis.histogram_bins,
            kde_points: self.analysis.kde_points,
            fill: self.fill.to_plan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let settings = Settings::load("no/such/market_explorer.toml").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.analysis_config().fill, FillPlan::default());
    }

    #[test]
    fn file_values_override_defaults() {
        // Arrange
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[data]
path = "data/snapshot.csv"

[analysis]
top_n = 5

[fill]
text = "zero"
overrides = [{{ column = "Open", policy = "keep" }}]
"#
        )
        .unwrap();

        // Act
        let settings = Settings::load(file.path()).unwrap();
        let config = settings.analysis_config();

        // Assert
        assert_eq!(settings.data.path, PathBuf::from("data/snapshot.csv"));
        assert_eq!(config.top_n, 5);
        assert_eq!(config.histogram_bins, DEFAULT_HISTOGRAM_BINS, "Unset keys keep their default.");
        assert_eq!(config.fill.text, FillPolicy::Zero);
        assert_eq!(config.fill.overrides.get("Open"), Some(&FillPolicy::Keep));
        assert_eq!(config.fill.overrides.get("High"), Some(&FillPolicy::Mean), "Built-in policies survive.");
    }

    #[test]
    fn uniform_zero_switch_wins() {
        let fill = FillSettings {
            uniform_zero: true,
            ..FillSettings::default()
        };
        assert_eq!(fill.to_plan(), FillPlan::uniform_zero());
    }
}
