//! Configuration loading and parsing

use anyhow::{Context, Result};
use event_log_analysis::{ConformanceMode, LoaderConfig, DEFAULT_REFERENCE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Log files or directories of log files
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_reference")]
    pub reference: String,
    #[serde(default)]
    pub mode: ConformanceMode,
}

fn default_reference() -> String {
    DEFAULT_REFERENCE.to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            mode: ConformanceMode::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    #[serde(default)]
    pub include_diagram: bool,
    /// Only list events whose label contains this text
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

/// Problems found while validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no input files configured")]
    NoInputs,

    #[error("input not found: {0:?}")]
    MissingInput(PathBuf),

    #[error(transparent)]
    InvalidReference(#[from] event_log_analysis::AnalysisError),
}

impl AppConfig {
    /// Check that inputs exist and the reference process parses
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.input.files.is_empty() {
            return Err(ConfigError::NoInputs);
        }
        if let Some(missing) = self.input.files.iter().find(|path| !path.exists()) {
            return Err(ConfigError::MissingInput(missing.clone()));
        }
        self.analysis
            .reference
            .parse::<event_log_analysis::ReferenceProcess>()?;
        Ok(())
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
