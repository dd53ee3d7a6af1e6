use serde::Deserialize;

use crate::common::error::{Error, Result};

const DEFAULT_FORMAT: OutputFormat = OutputFormat::Table;

/// Analyzer configuration, loaded from TOML.
///
/// Every section and key is optional; missing values take their defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&text)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_analysis: bool,
}

/// How the analysis report is rendered.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    #[serde(default = "default_show_decode")]
    pub show_decode: bool,

    /// Directory receiving one listing per technique, if set.
    #[serde(default)]
    pub save_dir: Option<String>,

    /// Save results with the technique header instead of a plain listing.
    #[serde(default)]
    pub annotated: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_decode: default_show_decode(),
            save_dir: None,
            annotated: false,
        }
    }
}

fn default_format() -> OutputFormat {
    DEFAULT_FORMAT
}

fn default_show_decode() -> bool {
    true
}
