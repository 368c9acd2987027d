//! Loader and analysis configuration types
//!
//! This module defines the small amount of configuration the library needs.
//! Anything beyond parsing and analysis (input discovery, report formats) is
//! handled by the application layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Configuration for the trace loader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Field separator between label and timestamp
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Skip lines that do not split into exactly two fields (false = reject the file)
    #[serde(default = "default_true")]
    pub skip_malformed: bool,

    /// File extensions picked up when scanning a directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "csv".to_string(), "log".to_string()]
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            skip_malformed: true,
            extensions: default_extensions(),
        }
    }
}

impl LoaderConfig {
    /// Create a new loader configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method: skip or reject malformed lines
    pub fn with_skip_malformed(mut self, enabled: bool) -> Self {
        self.skip_malformed = enabled;
        self
    }

    /// Builder method: replace the directory scan extensions
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Check if a file extension should be picked up in a directory scan
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// How a trace is compared against a reference process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConformanceMode {
    /// Label sequence must equal the reference exactly
    #[default]
    Strict,
    /// Reference labels must appear in order; other events may be interleaved
    Subsequence,
}

impl fmt::Display for ConformanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConformanceMode::Strict => write!(f, "strict"),
            ConformanceMode::Subsequence => write!(f, "subsequence"),
        }
    }
}

impl FromStr for ConformanceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ConformanceMode::Strict),
            "subsequence" => Ok(ConformanceMode::Subsequence),
            other => Err(format!("unknown conformance mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config_builder() {
        let config = LoaderConfig::new()
            .with_delimiter(';')
            .with_skip_malformed(false)
            .with_extensions(vec!["csv".to_string()]);

        assert_eq!(config.delimiter, ';');
        assert!(!config.skip_malformed);
        assert!(config.accepts_extension("CSV"));
        assert!(!config.accepts_extension("txt"));
    }

    #[test]
    fn test_loader_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.delimiter, ',');
        assert!(config.skip_malformed);
        assert!(config.accepts_extension("txt"));
        assert!(config.accepts_extension("log"));
    }

    #[test]
    fn test_conformance_mode_parsing() {
        assert_eq!("strict".parse::<ConformanceMode>(), Ok(ConformanceMode::Strict));
        assert_eq!(
            "Subsequence".parse::<ConformanceMode>(),
            Ok(ConformanceMode::Subsequence)
        );
        assert!("fuzzy".parse::<ConformanceMode>().is_err());
        assert_eq!(ConformanceMode::default().to_string(), "strict");
    }
}
