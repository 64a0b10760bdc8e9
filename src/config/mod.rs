// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[magazine]` - Page source and carousel transition
//! - `[viewer]` - Lightbox zoom steps
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config, TransitionStyle};
//!
//! let (mut config, _warning) = config::load();
//! config.magazine.transition_style = Some(TransitionStyle::Slide);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How the carousel animates from one spread to the next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionStyle {
    /// Outgoing page fades out while the incoming page fades in.
    #[default]
    Crossfade,
    /// Both pages move together along a horizontal track.
    Slide,
    /// The incoming page replaces the outgoing one at the end of the transition.
    Cut,
}

impl std::str::FromStr for TransitionStyle {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "crossfade" | "fade" => Ok(TransitionStyle::Crossfade),
            "slide" => Ok(TransitionStyle::Slide),
            "cut" | "instant" => Ok(TransitionStyle::Cut),
            other => Err(Error::Config(format!("invalid transition style: {other}"))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Magazine content and carousel behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MagazineConfig {
    /// Transition rendering strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_style: Option<TransitionStyle>,

    /// Transition duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Local directory holding the page images. Takes precedence over `url_pattern`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_dir: Option<PathBuf>,

    /// Remote URL pattern; `{n}` is replaced by the 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_pattern: Option<String>,

    /// Number of pages behind `url_pattern`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

impl Default for MagazineConfig {
    fn default() -> Self {
        Self {
            transition_style: Some(TransitionStyle::default()),
            transition_ms: default_transition_ms(),
            pages_dir: None,
            url_pattern: None,
            page_count: None,
        }
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Zoom change for the zoom buttons.
    #[serde(
        default = "default_button_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub button_zoom_step: Option<f32>,

    /// Zoom change per mouse wheel event.
    #[serde(
        default = "default_wheel_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_step: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            button_zoom_step: default_button_zoom_step(),
            wheel_zoom_step: default_wheel_zoom_step(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Magazine content and carousel behavior.
    #[serde(default)]
    pub magazine: MagazineConfig,

    /// Lightbox settings.
    #[serde(default)]
    pub viewer: ViewerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_button_zoom_step() -> Option<f32> {
    Some(DEFAULT_BUTTON_ZOOM_STEP)
}

fn default_wheel_zoom_step() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_STEP)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
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
                    log::warn!("Ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================
