//! # Filepick Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Filepick CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the select handler and reporting any error that escapes it
//!
//! ## Examples
//!
//! ```bash
//! # Run the default selector (osascript select_files.scpt)
//! filepick
//!
//! # Same, with debug logging on stderr
//! filepick -vv
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Run the selector once and print the selected paths
//! 4. Format and display any configuration error that occurs
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The select handler
mod common; // Process invocation and selection output
mod core; // Configuration and error types

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "filepick",
    about = "Run an external file-selector script and print the chosen paths",
    long_about = "Runs a selector script through a scripting interpreter (osascript by default),\n\
                  then prints each file path the script returns under a 'Selected files:' header.",
    version
)]
struct Cli {
    #[command(flatten)]
    select: commands::select::SelectArgs,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::select::handle_select(cli.select) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
