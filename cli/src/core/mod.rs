//! # Filepick Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by the command layer:
//! - `config`: configuration loading, merging and validation
//! - `error`: error types and the crate `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{FilepickError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
