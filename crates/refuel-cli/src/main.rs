//! Refuel Dispatch - refueling task assignment for a two-person crew
//!
//! A CLI tool that reads vehicles from a JSON file, assigns each refueling
//! task to an employee and prints the priced assignments.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use refuel_types::Error;
use std::io::ErrorKind;

fn main() {
    let cli = Cli::parse();

    match commands::execute(cli) {
        Ok(()) => {}
        // Reader closed early (e.g. `| head`); nothing left to report
        Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
