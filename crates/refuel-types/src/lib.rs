//! Core types for refuel dispatching

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Log line format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Table).unwrap();
        assert_eq!(json, "\"table\"");
        let parsed: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, OutputFormat::Json);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
