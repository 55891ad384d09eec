//! # lemonutils Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the optional configuration that
//! tunes how the filesystem helper behaves: whether failures are reported on
//! the diagnostic channel, the component name those reports carry, and whether
//! `write` may create files that do not exist yet.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.lemon.toml` in the current directory or its ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/lemonutils/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [diagnostics]
//! enabled = true
//! component = "lemonutils"
//!
//! [write]
//! allow_create = false
//! ```
//!
use crate::core::error::Result;
use anyhow::{bail, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub write: WriteConfig,
}

/// Settings for the diagnostic channel failures are reported on.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Report failed operations through `tracing` (defaults to true).
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Component name attached to every report.
    #[serde(default = "default_component")]
    pub component: String,
}

/// Settings for `write`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WriteConfig {
    /// Allow `write` to create a missing file when its parent directory is
    /// accessible. When false the target itself must already be accessible.
    #[serde(default)]
    pub allow_create: Option<bool>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            component: default_component(),
        }
    }
}

impl DiagnosticsConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl WriteConfig {
    pub fn allows_create(&self) -> bool {
        self.allow_create.unwrap_or(true)
    }
}

pub(crate) fn default_component() -> String {
    "lemonutils".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".lemon.toml";

/// Loads the user and project configuration, merges them and validates the result.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

/// Loads a single configuration file, bypassing discovery and merging.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let config = load_config_from_path(path)?;
    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "lemonutils", "lemonutils") {
        let config_path = proj_dirs.config_dir().join("config.toml");
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
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.lemon.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
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

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever the project file set them explicitly.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.diagnostics.enabled = project_cfg
        .diagnostics
        .enabled
        .or(user.diagnostics.enabled);
    merged.diagnostics.component = if project_cfg.diagnostics.component != default_component() {
        project_cfg.diagnostics.component
    } else {
        user.diagnostics.component
    };
    merged.write.allow_create = project_cfg.write.allow_create.or(user.write.allow_create);
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    let component = &config.diagnostics.component;
    if component.is_empty() {
        bail!("Diagnostics component name cannot be empty.");
    }
    if component.chars().any(char::is_whitespace) {
        bail!(
            "Diagnostics component name '{}' must not contain whitespace.",
            component
        );
    }
    Ok(())
}
