//! Configuration management for the CLI

use anyhow::{Context, Result};
use breakdown_lib::{Interval, OptimizationType};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default recommendation interval
    pub default_interval: Option<Interval>,
    /// Default optimization engine
    pub default_engine: Option<OptimizationType>,
    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()?),
        }
    }

    /// Load configuration from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config file")
    }

    /// Save configuration to a file
    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Resolve the output format: flag, then config, then table
    pub fn format(&self, flag: Option<OutputFormat>) -> Result<OutputFormat> {
        if let Some(format) = flag {
            return Ok(format);
        }
        match &self.default_format {
            Some(name) => OutputFormat::from_str(name, true)
                .map_err(|e| anyhow::anyhow!("Invalid default_format in config: {}", e)),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn interval(&self, flag: Option<Interval>) -> Interval {
        flag.or(self.default_interval).unwrap_or_default()
    }

    pub fn engine(&self, flag: Option<OptimizationType>) -> OptimizationType {
        flag.or(self.default_engine).unwrap_or_default()
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let home = dirs_next::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("ros").join("config.json"))
    }
}
