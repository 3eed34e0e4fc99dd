use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use monthgrid_calendar::WeekStart;
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "monthgrid.toml";

/// Top-level monthgrid configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthgridConfig {
    /// First column of the grid.
    #[serde(default)]
    pub week_start: WeekStartSetting,

    /// Whether tapping a day selects it.
    #[serde(default = "default_true")]
    pub select_on_click: bool,

    /// Custom styles applied whenever their month is displayed.
    #[serde(default)]
    pub marks: Vec<MarkToml>,
}

impl Default for MonthgridConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStartSetting::default(),
            select_on_click: true,
            marks: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Week-start convention as spelled in config files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartSetting {
    #[default]
    Sunday,
    Monday,
    Saturday,
}

impl From<WeekStartSetting> for WeekStart {
    fn from(setting: WeekStartSetting) -> Self {
        match setting {
            WeekStartSetting::Sunday => WeekStart::Sunday,
            WeekStartSetting::Monday => WeekStart::Monday,
            WeekStartSetting::Saturday => WeekStart::Saturday,
        }
    }
}

/// One `[[marks]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkToml {
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    /// Caller-defined style id.
    pub style: u32,
}

/// Loads the config at `path`, or `./monthgrid.toml` if present, or defaults.
pub fn load(path: Option<&Path>) -> Result<MonthgridConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.exists() {
                return Ok(MonthgridConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
