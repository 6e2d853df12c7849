//! # Filepick Select Handler
//!
//! File: cli/src/commands/select.rs
//!
//! ## Overview
//!
//! This module implements the single action Filepick performs: run the
//! configured selector script once and print the paths it returns.
//!
//! ## Architecture
//!
//! 1. Resolve the configuration (defaults, config files, then `SelectArgs` overrides).
//! 2. Build a `ProcessInvoker` for `<interpreter> <script_path>`.
//! 3. Invoke it. Failures are reported on stderr by the invoker and become `None`.
//! 4. Split the payload into paths and print them, or print the no-selection message.
//!
//! Only configuration problems make this handler return an error. Every
//! selector failure ends with the no-selection message and a normal exit.
//!
//! ## Usage
//!
//! ```bash
//! # Use the defaults (osascript select_files.scpt)
//! filepick
//!
//! # Use another selector
//! filepick --interpreter sh --script ./pick.sh
//! FILEPICK_SCRIPT=~/scripts/pick.scpt filepick
//! ```
//!
use crate::common::process::{CommandRunner, ProcessInvoker};
use crate::common::selection;
use crate::core::config::{self, SelectorOverrides};
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::io::{self, Write};
use tracing::info;

/// # Select Arguments (`SelectArgs`)
///
/// Optional overrides for the selector configuration.
#[derive(Args, Debug, Default)]
pub struct SelectArgs {
    /// Path to the external selector script (default: select_files.scpt).
    #[arg(long = "script", value_name = "PATH", env = "FILEPICK_SCRIPT")]
    pub script_path: Option<String>,

    /// Scripting interpreter that runs the script (default: osascript).
    #[arg(long, value_name = "CMD", env = "FILEPICK_INTERPRETER")]
    pub interpreter: Option<String>,
}

impl From<SelectArgs> for SelectorOverrides {
    fn from(args: SelectArgs) -> Self {
        SelectorOverrides {
            script_path: args.script_path,
            interpreter: args.interpreter,
        }
    }
}

/// # Handle Select (`handle_select`)
///
/// Loads the configuration and runs the selector once, printing to stdout.
pub fn handle_select(args: SelectArgs) -> Result<()> {
    info!("Handling select...");
    let cfg = config::load_config(&args.into())?;

    let invoker = ProcessInvoker::new(&cfg.selector.interpreter, &cfg.selector.script_path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut diagnostics = stderr.lock();
    run_selection(&invoker, &mut out, &mut diagnostics)
}

/// Invokes the selector and renders its outcome to `out`.
fn run_selection<R: CommandRunner, W: Write, D: Write>(
    invoker: &ProcessInvoker<R>,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<()> {
    let payload = invoker.invoke_with_diagnostics(diagnostics);
    let paths = selection::selection_from_payload(payload.as_deref());
    info!(
        "Selector returned {} path(s)",
        paths.as_ref().map_or(0, Vec::len)
    );
    selection::render_selection(out, paths.as_deref()).context("Failed to write selection")
}
