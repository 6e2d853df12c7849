//! # Filepick Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Command handlers reachable from `main.rs`. Filepick has a single action,
//! so there is no subcommand layer: `main` flattens `select::SelectArgs` into
//! its top-level arguments and calls `select::handle_select`.
//!

/// Runs the selector script once and prints the selected paths.
pub mod select;
