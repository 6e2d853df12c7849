//! # Filepick Selection Output (`common::selection`)
//!
//! File: cli/src/common/selection.rs
//!
//! ## Overview
//!
//! Turns the selector's payload into an ordered list of paths and prints it
//! using the fixed text contract:
//!
//! ```text
//! Selected files:
//! /Users/me/a.txt
//! /Users/me/b.txt
//! ```
//!
//! or, when nothing came back, the single line
//! `No files selected or an error occurred.`
//!
//! An empty payload (after trimming) is treated as "nothing came back",
//! never as one blank path. Paths are not validated, deduplicated or
//! individually trimmed.
//!
use std::io::{self, Write};

pub const SELECTED_HEADER: &str = "Selected files:";
pub const NO_SELECTION_MESSAGE: &str = "No files selected or an error occurred.";

/// Ordered paths as printed by the selector. Duplicates are kept.
pub type FilePathList = Vec<String>;

/// Splits a payload into paths, one per line (`\n` or `\r\n`).
///
/// Surrounding whitespace of the whole block is dropped first, so an empty
/// or blank payload yields an empty list.
pub fn parse_paths(payload: &str) -> FilePathList {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(str::to_string).collect()
}

/// Converts the invoker outcome into the paths to print, if any.
pub fn selection_from_payload(payload: Option<&str>) -> Option<FilePathList> {
    let paths = parse_paths(payload?);
    if paths.is_empty() {
        None
    } else {
        Some(paths)
    }
}

/// Writes the header and paths, or the no-selection message.
pub fn render_selection<W: Write>(out: &mut W, selection: Option<&[String]>) -> io::Result<()> {
    match selection {
        Some(paths) => {
            writeln!(out, "{}", SELECTED_HEADER)?;
            for path in paths {
                writeln!(out, "{}", path)?;
            }
        }
        None => writeln!(out, "{}", NO_SELECTION_MESSAGE)?,
    }
    out.flush()
}
