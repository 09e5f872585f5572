// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Path Resolution Order
//!
//! The settings directory is resolved in priority order:
//! 1. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 2. **Environment variable** (`FINDERY_CONFIG_DIR`, if set and non-empty)
//! 3. **Platform default** - via the `dirs` crate (e.g. `~/.config/Findery/`)

use crate::domain::SortKey;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Findery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FINDERY_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Should be called once at application startup, before any load/save.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_override(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub sort_order: Option<SortKey>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            sort_order: Some(SortKey::Date),
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(Some(dir)) = CLI_CONFIG_DIR.get() {
        return Some(dir.clone());
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    // Invalid TOML falls back to defaults rather than failing startup.
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
