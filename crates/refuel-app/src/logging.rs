//! Logging initialization
//!
//! A single initialization point for the tracing subscriber. Log lines go
//! to stderr so stdout carries only command output.

use std::sync::Once;

use refuel_types::LogFormat;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output
    Development,
    /// JSON structured output
    Production,
    /// No output
    Test,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Default filter directive when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "refuel=debug"
    } else {
        "refuel=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Initialize the logging facility
///
/// Only the first call has an effect.
pub fn init(profile: Profile, verbose: bool) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(verbose))
                .finish()
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(verbose))
                .finish()
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
