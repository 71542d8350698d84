//! appconfig CLI
//!
//! Inspect application configuration snapshots captured from the message
//! stream.

use appconfig_core::log_op_error;
use appconfig_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};
use std::time::Instant;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "appconfig")]
#[command(about = "Query application configuration snapshots", long_about = None)]
struct Cli {
    /// Logging profile (development or production); RUST_LOG overrides the filter
    #[arg(long, global = true, default_value = "production")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode one envelope file and print its projections
    Inspect(commands::inspect::InspectArgs),
    /// Aggregate identity values across several envelope files
    Summarize(commands::summarize::SummarizeArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);
    let start = Instant::now();

    let (op, result) = match cli.command {
        Commands::Inspect(args) => ("inspect", commands::inspect::execute(args)),
        Commands::Summarize(args) => ("summarize", commands::summarize::execute(args)),
    };

    if let Err(e) = result {
        let elapsed = start.elapsed().as_millis() as u64;
        log_op_error!(op, e.clone(), duration_ms = elapsed);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
