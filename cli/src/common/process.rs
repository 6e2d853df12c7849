//! # Filepick Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module runs the external selector script and turns its outcome into
//! either a payload (the trimmed standard output) or the "no result" sentinel.
//!
//! ## Architecture
//!
//! - **`InvocationResult`**: exit code plus captured stdout/stderr of one run.
//! - **`CommandRunner`**: the seam between the invoker and the OS. `SystemRunner`
//!   is the real implementation on top of `std::process::Command`; tests provide
//!   their own runners with canned results.
//! - **`ProcessInvoker`**: applies the success/failure policy:
//!   - exit code 0: the trimmed stdout is the payload
//!   - non-zero exit (or killed by a signal): `Error: <stderr>` is surfaced
//!   - spawn/I/O error: `Exception occurred: <error>` is surfaced
//!
//!   Both failure kinds end in the same `None`; nothing propagates.
//!
//! The call blocks until the child exits. There is no timeout.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::ProcessInvoker;
//!
//! let invoker = ProcessInvoker::new("osascript", "select_files.scpt");
//! match invoker.invoke_with_diagnostics(&mut std::io::stderr()) {
//!     Some(payload) => println!("{}", payload),
//!     None => println!("nothing selected"),
//! }
//! ```
//!
use crate::core::error::FilepickError;
use std::io::{self, Write};
use std::process::Command;
use tracing::{debug, warn};

/// Captured outcome of a single external command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn status_description(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs a program with arguments, capturing its output and exit status.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<InvocationResult>;
}

/// `CommandRunner` backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<InvocationResult> {
        // `output()` pipes stdout/stderr, waits for exit and closes every
        // handle before returning, on success and on error alike.
        let output = Command::new(program).args(args).output()?;
        Ok(InvocationResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// # Process Invoker (`ProcessInvoker`)
///
/// Runs `<command> <script_path>` once per call through a `CommandRunner`.
/// The command and script are fixed at construction.
#[derive(Debug, Clone)]
pub struct ProcessInvoker<R = SystemRunner> {
    runner: R,
    command: String,
    script_path: String,
}

impl ProcessInvoker<SystemRunner> {
    pub fn new(command: impl Into<String>, script_path: impl Into<String>) -> Self {
        Self::with_runner(SystemRunner, command, script_path)
    }
}

impl<R: CommandRunner> ProcessInvoker<R> {
    pub fn with_runner(
        runner: R,
        command: impl Into<String>,
        script_path: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            command: command.into(),
            script_path: script_path.into(),
        }
    }

    /// Runs the script and returns the trimmed payload, or the typed reason
    /// the run did not produce one.
    pub fn run_checked(&self) -> std::result::Result<String, FilepickError> {
        debug!("Running selector: {} {}", self.command, self.script_path);

        let result = self
            .runner
            .run(&self.command, &[self.script_path.as_str()])
            .map_err(|source| FilepickError::Invocation {
                cmd: self.command.clone(),
                source,
            })?;

        debug!(
            "Selector finished: status={}, stdout='{}', stderr='{}'",
            result.status_description(),
            result.stdout,
            result.stderr
        );

        if !result.success() {
            return Err(FilepickError::ExternalProcessFailure {
                cmd: format!("{} {}", self.command, self.script_path),
                status: result.status_description(),
                stderr: result.stderr.trim().to_string(),
            });
        }

        Ok(result.stdout.trim().to_string())
    }

    /// # Invoke (`invoke_with_diagnostics`)
    ///
    /// Runs the script and returns its payload, or `None` on any failure.
    /// Failure messages are written to `diagnostics` (stderr in the binary).
    pub fn invoke_with_diagnostics<W: Write>(&self, diagnostics: &mut W) -> Option<String> {
        match self.run_checked() {
            Ok(payload) => Some(payload),
            Err(e) => {
                let message = match &e {
                    FilepickError::ExternalProcessFailure { cmd, status, .. } => {
                        warn!("Selector '{}' failed with {}", cmd, status);
                        format!("Error: {}", e)
                    }
                    _ => {
                        warn!("Could not run selector: {}", e);
                        format!("Exception occurred: {}", e)
                    }
                };
                if let Err(write_err) = writeln!(diagnostics, "{}", message) {
                    debug!("Failed to write selector diagnostics: {}", write_err);
                }
                None
            }
        }
    }
}
