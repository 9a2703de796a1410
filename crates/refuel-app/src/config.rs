//! Configuration management for refuel-dispatch
//!
//! Config stored at: ~/.config/refuel-dispatch/config.json

use refuel_types::{ConfigError, LogFormat, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle file used when none is given on the command line
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log line format (pretty, json)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("input-data.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_format: OutputFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("refuel-dispatch");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Refuel Dispatch Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Input file:     {}", self.input_path.display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Log format:     {}", self.log_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
