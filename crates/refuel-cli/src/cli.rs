//! CLI definition using clap

use clap::{Parser, Subcommand};
use refuel_types::{LogFormat, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "refuel-dispatch")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Assign refueling tasks to employees and price them")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign every vehicle in a JSON file to an employee
    Assign {
        /// Path to vehicle JSON file. Uses config value if not specified.
        input: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default vehicle file
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set log line format
        #[arg(long)]
        set_log_format: Option<LogFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
