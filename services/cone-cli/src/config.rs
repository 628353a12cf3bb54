//! storm-cone configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! `STORM_CONE_*` environment variables, then command-line flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use forecast_cone::{LayerOptions, ZoneStyle};
use storm_common::{Basin, StormFilters};

/// Environment variable names.
pub mod env_vars {
    pub const INPUT: &str = "STORM_CONE_INPUT";
    pub const OUTPUT: &str = "STORM_CONE_OUTPUT";
    pub const NAME: &str = "STORM_CONE_NAME";
    pub const YEAR: &str = "STORM_CONE_YEAR";
    pub const BASIN: &str = "STORM_CONE_BASIN";
    pub const PRETTY: &str = "STORM_CONE_PRETTY";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Which non-zone features to emit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayersConfig {
    #[serde(default = "default_true")]
    pub track: bool,
    #[serde(default = "default_true")]
    pub markers: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            track: true,
            markers: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConeConfig {
    /// Storm GeoJSON to read.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Destination file; `None` or `-` writes to stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub filters: StormFilters,

    #[serde(default)]
    pub layers: LayersConfig,

    #[serde(default)]
    pub style: ZoneStyle,

    #[serde(default)]
    pub pretty: bool,
}

impl ConeConfig {
    /// Parse configuration from YAML text. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse storm-cone config")
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load config: {:?}", path))?;
        tracing::info!(path = ?path, "Loaded configuration file");
        Ok(config)
    }

    /// Overlay values from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(env_vars::INPUT) {
            self.input = Some(PathBuf::from(input));
        }
        if let Some(output) = lookup(env_vars::OUTPUT) {
            self.output = Some(PathBuf::from(output));
        }
        if let Some(name) = lookup(env_vars::NAME) {
            self.filters.name = Some(name);
        }
        if let Some(year) = lookup(env_vars::YEAR) {
            let parsed = year.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: env_vars::YEAR,
                value: year.clone(),
            })?;
            self.filters.year = Some(parsed);
        }
        if let Some(basin) = lookup(env_vars::BASIN) {
            self.filters.basin = Some(Basin::from_code(&basin));
        }
        if let Some(pretty) = lookup(env_vars::PRETTY) {
            self.pretty = parse_bool(env_vars::PRETTY, &pretty)?;
        }
        Ok(self)
    }

    /// Output goes to stdout.
    pub fn writes_to_stdout(&self) -> bool {
        match &self.output {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }

    pub fn layer_options(&self) -> LayerOptions {
        LayerOptions {
            track: self.layers.track,
            markers: self.layers.markers,
            style: self.style,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}
