//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::output_dispatch;
use refuel_app::app::DispatchService;
use refuel_app::config::Config;
use refuel_app::logging::{self, Profile};
use refuel_app::repository::{open_vehicle_repo, open_vehicle_repo_at};
use refuel_domain::VehicleRepository;
use refuel_types::{LogFormat, OutputFormat, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Reset must not depend on the stored config being readable
    if let Commands::Config { reset: true, .. } = cli.command {
        logging::init(Profile::from(LogFormat::default()), cli.verbose);
        return cmd_reset_config();
    }

    // Load config
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(Profile::from(config.log_format), cli.verbose);

    match &cli.command {
        Commands::Assign { input } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            let repo = match input {
                Some(path) => {
                    if let Some(e) = load_error {
                        warn!(error = %e, "ignoring unreadable config, using defaults");
                    }
                    info!(input = %path.display(), "loading vehicles");
                    open_vehicle_repo_at(path.clone())?
                }
                None => {
                    if let Some(e) = load_error {
                        return Err(e);
                    }
                    info!(input = %config.input_path.display(), "loading vehicles");
                    open_vehicle_repo(&config)?
                }
            };
            cmd_assign(repo, output_format)
        }

        Commands::Config {
            show,
            set_input,
            set_output,
            set_log_format,
            ..
        } => {
            if let Some(e) = load_error {
                return Err(e);
            }
            cmd_config(config, *show, set_input.clone(), *set_output, *set_log_format)
        }
    }
}

fn cmd_assign<R: VehicleRepository>(repo: R, output_format: OutputFormat) -> Result<()> {
    let dispatch = DispatchService::new(repo).run()?;

    output_dispatch(output_format, &dispatch)
}

fn cmd_reset_config() -> Result<()> {
    Config::default().save()?;
    writeln!(io::stdout().lock(), "Configuration reset to defaults.")?;
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_input: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_log_format: Option<LogFormat>,
) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut changed = false;

    if let Some(input) = set_input {
        config.input_path = input;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(format) = set_log_format {
        config.log_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        writeln!(out, "Configuration saved.")?;
    }

    if show || !changed {
        write!(out, "{}", config)?;
    }

    Ok(())
}
