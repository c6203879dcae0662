// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from the
//! user's `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Transition duration, image height and frame style
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let transition = config.carousel.transition();
//! println!("slides ease over {} ms", transition.millis());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::{ImageHeight, StyleClass, TransitionDuration, UnknownStyleClass};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning returned when an existing config cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Carousel presentation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Slide transition duration in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: Option<u32>,

    /// Maximum height of slide images in logical pixels.
    #[serde(default = "default_max_image_height")]
    pub max_image_height: Option<f32>,

    /// Cosmetic frame style token (`default`, `bordered`, `compact`).
    #[serde(default)]
    pub style: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            max_image_height: default_max_image_height(),
            style: None,
        }
    }
}

impl CarouselConfig {
    /// Validated transition duration.
    #[must_use]
    pub fn transition(&self) -> TransitionDuration {
        self.transition_ms
            .map_or_else(TransitionDuration::default, TransitionDuration::new)
    }

    /// Validated maximum image height.
    #[must_use]
    pub fn image_height(&self) -> ImageHeight {
        self.max_image_height
            .map_or_else(ImageHeight::default, ImageHeight::new)
    }

    /// Frame style; unknown tokens fall back to the default style.
    #[must_use]
    pub fn style_class(&self) -> StyleClass {
        let Some(token) = self.style.as_deref() else {
            return StyleClass::default();
        };
        token.parse().unwrap_or_else(|err: UnknownStyleClass| {
            tracing::warn!(token = %err.0, "unknown carousel style, using default");
            StyleClass::default()
        })
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Carousel presentation settings.
    #[serde(default)]
    pub carousel: CarouselConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_transition_ms() -> Option<u32> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_max_image_height() -> Option<f32> {
    Some(DEFAULT_MAX_IMAGE_HEIGHT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
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

// =============================================================================
// Tests
// =============================================================================
