//! # Filepick Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Filepick. The
//! invocation errors never reach the user as-is: the process invoker converts
//! them into the "no result" sentinel after surfacing their message. Only
//! configuration errors propagate up to `main`.
//!
//! ## Architecture
//!
//! - `FilepickError`: a custom error enum using `thiserror`
//! - `Result<T>`: a type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Inspect why an invocation failed
//! match invoker.run_checked() {
//!     Ok(payload) => println!("{}", payload),
//!     Err(FilepickError::ExternalProcessFailure { status, .. }) => {
//!         println!("Selector exited with {}", status);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Filepick application.
#[derive(Error, Debug)]
pub enum FilepickError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external command ran but exited with a non-zero (or no) status.
    /// `stderr` is already trimmed.
    #[error("{stderr}")]
    ExternalProcessFailure {
        cmd: String,
        status: String,
        stderr: String,
    },

    /// Spawning or talking to the external command failed.
    #[error("Failed to run '{cmd}': {source}")]
    Invocation {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
