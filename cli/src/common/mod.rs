//! # Filepick Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command layer, kept separate from command
//! wiring (`commands::`) and infrastructure (`core::`).
//!
//! - **`process`**: runs the external selector and applies the success/failure policy.
//! - **`selection`**: splits the payload into paths and prints the result.
//!

/// Running external processes and capturing their output.
pub mod process;
/// Parsing and printing the list of selected paths.
pub mod selection;
