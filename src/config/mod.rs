// SPDX-License-Identifier: MPL-2.0
//! Loading user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language override
//! - `[display]` - Surface background and wheel zoom step
//! - `[animation]` - Zoom animation timing
//!
//! # Examples
//!
//! ```no_run
//! use zoom_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     // First start: leave a template next to where the file is looked up.
//!     config::write_default_if_missing().expect("Failed to write defaults");
//! }
//! println!("{:?}", config.general.language);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
    Checkerboard,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Surface display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Background drawn behind the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_theme: Option<BackgroundTheme>,

    /// Multiplicative zoom step per wheel notch.
    #[serde(
        default = "default_wheel_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_step: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background_theme: Some(BackgroundTheme::default()),
            wheel_zoom_step: default_wheel_zoom_step(),
        }
    }
}

/// Zoom animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Duration of animated zoom changes; `0` disables animation.
    #[serde(
        default = "default_zoom_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_duration_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            zoom_duration_ms: default_zoom_duration_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_wheel_zoom_step() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_STEP)
}

fn default_zoom_duration_ms() -> Option<u64> {
    Some(DEFAULT_ZOOM_ANIMATION_MS)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning_key). If loading fails, the
/// default config is returned together with a warning key for the UI.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid configuration, using defaults");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
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

/// Writes a settings file holding the defaults when none exists yet, giving
/// users a template to edit. Returns true when a file was written.
pub fn write_default_if_missing() -> Result<bool> {
    write_default_if_missing_with_override(None)
}

/// Same as [`write_default_if_missing`] inside a custom directory.
pub fn write_default_if_missing_with_override(base_dir: Option<PathBuf>) -> Result<bool> {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Ok(false);
    };
    if path.exists() {
        return Ok(false);
    }
    save_to_path(&Config::default(), &path)?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    Ok(true)
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            display: DisplayConfig {
                background_theme: Some(BackgroundTheme::Checkerboard),
                wheel_zoom_step: Some(1.5),
            },
            animation: AnimationConfig {
                zoom_duration_ms: Some(0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn default_file_is_written_once_and_loads_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("fresh");

        let written = write_default_if_missing_with_override(Some(base.clone()))
            .expect("failed to write defaults");
        assert!(written);
        assert!(base.join(CONFIG_FILE).exists());

        let (config, warning) = load_with_override(Some(base.clone()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());

        let written_again = write_default_if_missing_with_override(Some(base))
            .expect("second call should succeed");
        assert!(!written_again);
    }

    #[test]
    fn existing_file_is_never_overwritten() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("failed to write config");

        let written = write_default_if_missing_with_override(Some(temp_dir.path().to_path_buf()))
            .expect("failed to check config");
        assert!(!written);
        let content = fs::read_to_string(&path).expect("failed to read config");
        assert!(content.contains("fr"));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[display\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("valid toml");
        assert_eq!(config.display.wheel_zoom_step, Some(DEFAULT_WHEEL_ZOOM_STEP));
        assert_eq!(
            config.animation.zoom_duration_ms,
            Some(DEFAULT_ZOOM_ANIMATION_MS)
        );
    }

    #[test]
    fn background_theme_uses_kebab_case() {
        let config: Config =
            toml::from_str("[display]\nbackground_theme = \"checkerboard\"\n").expect("valid toml");
        assert_eq!(
            config.display.background_theme,
            Some(BackgroundTheme::Checkerboard)
        );
    }
}
