//! # Filepick CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Every command built here
//! runs in an isolated temporary directory with its own HOME/XDG config
//! location, so neither the developer's `config.toml` nor a stray
//! `.filepick.toml` can leak into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `filepick` binary,
/// isolated from the caller's environment and rooted in `dir`.
pub fn filepick_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("filepick").expect("Failed to find filepick binary for testing");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("FILEPICK_SCRIPT")
        .env_remove("FILEPICK_INTERPRETER")
        .env_remove("RUST_LOG");
    cmd
}

/// Location of the user `config.toml` for a command built by `filepick_cmd(dir)`.
pub fn user_config_path(dir: &Path) -> PathBuf {
    if cfg!(target_os = "macos") {
        dir.join("Library/Application Support/com.Filepick.filepick/config.toml")
    } else {
        dir.join(".config/filepick/config.toml")
    }
}

/// Writes `contents` as the user `config.toml` under `dir`.
pub fn write_user_config(dir: &Path, contents: &str) {
    let path = user_config_path(dir);
    fs::create_dir_all(path.parent().expect("config path has a parent"))
        .expect("Failed to create user config dir");
    fs::write(path, contents).expect("Failed to write user config");
}

/// Temporary workspace holding a stand-in selector script.
pub struct SelectorFixture {
    pub dir: TempDir,
    pub script: PathBuf,
}

impl SelectorFixture {
    /// Writes `body` as a POSIX shell script, meant to be run with `--interpreter sh`.
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let script = dir.path().join("select_files.sh");
        fs::write(&script, body).expect("Failed to write selector script");
        SelectorFixture { dir, script }
    }

    /// `filepick --interpreter sh --script <script>`
    pub fn cmd(&self) -> Command {
        let mut cmd = filepick_cmd(self.dir.path());
        cmd.arg("--interpreter")
            .arg("sh")
            .arg("--script")
            .arg(&self.script);
        cmd
    }
}
