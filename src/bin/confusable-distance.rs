//! confusable-distance - edit distance after collapsing confusable characters
//!
//! Command-line front-end for the distance engine.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use confusable_distance::cli::commands::{self, Outcome};
use confusable_distance::cli::Cli;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("confusable_distance={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::execute(cli.command, cli.config.as_deref()) {
        Ok(Outcome::Success) => {}
        Ok(Outcome::Rejected) => process::exit(1),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            process::exit(1);
        }
    }
}
