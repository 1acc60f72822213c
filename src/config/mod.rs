// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gestures]` - Double-tap zoom target and zoom button step
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PINCH_VIEWER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pinch_viewer::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Use the first-generation double-tap target
//! config.gestures.double_tap_scale = Some(config::LEGACY_DOUBLE_TAP_SCALE);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::{DoubleTapScale, GestureSettings, ScaleStep};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file could not be read.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

/// Gesture tuning settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Scale reached by double-tapping an unzoomed image.
    #[serde(
        default = "default_double_tap_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_scale: Option<f32>,

    /// Scale added or removed by the zoom buttons.
    #[serde(
        default = "default_scale_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub scale_step: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_scale: default_double_tap_scale(),
            scale_step: default_scale_step(),
        }
    }
}

/// Viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Gesture tuning settings.
    #[serde(default)]
    pub gestures: GestureConfig,
}

impl Config {
    /// Builds validated gesture settings, clamping out-of-range values.
    #[must_use]
    pub fn gesture_settings(&self) -> GestureSettings {
        GestureSettings {
            double_tap_scale: self
                .gestures
                .double_tap_scale
                .map(DoubleTapScale::new)
                .unwrap_or_default(),
            scale_step: self
                .gestures
                .scale_step
                .map(ScaleStep::new)
                .unwrap_or_default(),
        }
    }
}

fn default_double_tap_scale() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_SCALE)
}

fn default_scale_step() -> Option<f32> {
    Some(DEFAULT_SCALE_STEP)
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
