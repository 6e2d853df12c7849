//! # Filepick Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module resolves which selector script to run and which interpreter
//! runs it. Nothing here is required: with no files and no flags the
//! built-in defaults (`osascript select_files.scpt`) are used.
//!
//! ## Architecture
//!
//! Configuration sources (later entries win):
//! 1. Default values defined in the code
//! 2. User-specific `config.toml` in the platform config dir (e.g. `~/.config/filepick/`)
//! 3. Project-specific `.filepick.toml` in the current directory or its ancestors
//! 4. Command-line flags / `FILEPICK_*` environment variables (`SelectorOverrides`)
//!
//! Each file is read as a `ConfigFile` whose fields are optional, so a
//! layer only replaces the values it actually sets (including setting a
//! value back to its default). Built-in defaults fill whatever no layer set.
//! After merging, `~` in the script path is expanded and the result is
//! validated. The script path itself is never checked for existence; a
//! missing script is the selector's failure to report.
//!
//! ## Examples
//!
//! ```toml
//! [selector]
//! script_path = "~/scripts/select_files.scpt"
//! interpreter = "osascript"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&SelectorOverrides::default())?;
//! let invoker = ProcessInvoker::new(&cfg.selector.interpreter, &cfg.selector.script_path);
//! ```
//!
use crate::core::error::{FilepickError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration used to build the process invoker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub selector: SelectorConfig,
}

/// Which external selector to run and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Location of the external selector script (can use ~). Will be expanded.
    pub script_path: String,
    /// Scripting interpreter binary used to run the script.
    pub interpreter: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            script_path: default_script_path(),
            interpreter: default_interpreter(),
        }
    }
}

/// Contents of one TOML configuration file (user or project).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub selector: SelectorOverrides,
}

/// Selector values set by one configuration layer; `None` leaves the
/// value from the layers below in place.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SelectorOverrides {
    pub script_path: Option<String>,
    pub interpreter: Option<String>,
}

impl SelectorOverrides {
    /// Layers `self` on top of `lower`.
    fn over(self, lower: SelectorOverrides) -> SelectorOverrides {
        SelectorOverrides {
            script_path: self.script_path.or(lower.script_path),
            interpreter: self.interpreter.or(lower.interpreter),
        }
    }
}

fn default_script_path() -> String {
    "select_files.scpt".to_string()
}
fn default_interpreter() -> String {
    "osascript".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".filepick.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Loads the merged configuration, searching for a project file from the
/// current working directory upwards.
pub fn load_config(overrides: &SelectorOverrides) -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config = load_user_config()?;
    let project_config = load_project_config(&current_dir)?;
    resolve_config(user_config, project_config, overrides)
}

/// Merges the already-loaded sources, applies overrides, expands and validates.
fn resolve_config(
    user: Option<ConfigFile>,
    project: Option<ConfigFile>,
    overrides: &SelectorOverrides,
) -> Result<Config> {
    let mut merged = merge_configs(user, project, overrides.clone());
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Filepick", "filepick") {
        load_user_config_from(proj_dirs.config_dir())
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_user_config_from(config_dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = config_dir.join(USER_CONFIG_FILENAME);
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.filepick.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start_dir` looking for `.filepick.toml`, stopping at the
/// first directory that contains `.git`.
fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Stacks user, project and command-line values (last wins), then fills
/// anything still unset from the built-in defaults.
fn merge_configs(
    user: Option<ConfigFile>,
    project: Option<ConfigFile>,
    overrides: SelectorOverrides,
) -> Config {
    if let Some(script_path) = &overrides.script_path {
        debug!("Overriding script path from command line: {}", script_path);
    }
    if let Some(interpreter) = &overrides.interpreter {
        debug!("Overriding interpreter from command line: {}", interpreter);
    }
    let layered = overrides
        .over(project.unwrap_or_default().selector)
        .over(user.unwrap_or_default().selector);
    Config {
        selector: SelectorConfig {
            script_path: layered.script_path.unwrap_or_else(default_script_path),
            interpreter: layered.interpreter.unwrap_or_else(default_interpreter),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    config.selector.script_path = shellexpand::tilde(&config.selector.script_path).into_owned();
    debug!("Expanded script path: {}", config.selector.script_path);
}

fn validate_config(config: &Config) -> Result<()> {
    let selector = &config.selector;
    if selector.script_path.trim().is_empty() {
        return Err(anyhow!(FilepickError::Config(
            "Selector script path cannot be empty.".to_string()
        )));
    }
    if selector.interpreter.trim().is_empty() {
        return Err(anyhow!(FilepickError::Config(
            "Selector interpreter cannot be empty.".to_string()
        )));
    }
    // The interpreter is a single program name; arguments are not parsed out of it.
    if selector.interpreter.chars().any(char::is_whitespace) {
        return Err(anyhow!(FilepickError::Config(format!(
            "Invalid interpreter '{}'. Expected a single command name without arguments.",
            selector.interpreter
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
