//! CLI configuration, read from `promql.toml`.
//!
//! Lookup order: `./promql.toml`, then `<config dir>/promql/config.toml`,
//! then built-in defaults.
//!
//! ```toml
//! output = "json"
//! color = false
//! log_filter = "promql_builder=debug"
//! validate = true
//! ```

use crate::error::{PromqlError, PromqlResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = "promql.toml";

/// How the CLI prints rendered queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PromqlConfig {
    pub output: OutputFormat,

    /// Colored terminal output
    pub color: bool,

    /// tracing-subscriber filter directive, overridden by RUST_LOG
    pub log_filter: String,

    /// Run the validator before rendering and report every issue
    pub validate: bool,
}

impl Default for PromqlConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            color: true,
            log_filter: "warn".to_string(),
            validate: false,
        }
    }
}

impl PromqlConfig {
    /// Create a new configuration builder
    pub fn builder() -> PromqlConfigBuilder {
        PromqlConfigBuilder::default()
    }

    /// Load the first config file found, or defaults when there is none.
    pub fn load() -> PromqlResult<Self> {
        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::from_path(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> PromqlResult<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromqlError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Candidate config files, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("promql").join("config.toml"));
        }
        paths
    }
}

/// Builder for PromqlConfig
#[derive(Debug, Default)]
pub struct PromqlConfigBuilder {
    config: PromqlConfig,
}

impl PromqlConfigBuilder {
    pub fn output(mut self, output: OutputFormat) -> Self {
        self.config.output = output;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.config.color = color;
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.config.validate = validate;
        self
    }

    /// Build the configuration
    pub fn build(self) -> PromqlConfig {
        self.config
    }
}
