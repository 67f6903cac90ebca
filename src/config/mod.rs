// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. Settings are never written back.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[display]` - Reserved bar heights and the window icon
//! - `[slideshow]` - Default interval and fullscreen reserved height
//! - `[video]` - Frame delay and restart grace
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `LANTERN_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! Out-of-range values are clamped by the accessors.
//!
//! # Examples
//!
//! ```no_run
//! use lantern::config;
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("metadata bar: {}px", config.display.metadata_bar_height());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::video_playback::PlaybackTiming;
use crate::domain::playback::SlideshowInterval;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Display settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_metadata_bar_height")]
    pub metadata_bar_height: Option<u32>,

    #[serde(default = "default_navigation_bar_height")]
    pub navigation_bar_height: Option<u32>,

    /// Image file used as the window icon.
    #[serde(default)]
    pub window_icon: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            metadata_bar_height: default_metadata_bar_height(),
            navigation_bar_height: default_navigation_bar_height(),
            window_icon: None,
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn metadata_bar_height(&self) -> u32 {
        self.metadata_bar_height
            .unwrap_or(DEFAULT_METADATA_BAR_HEIGHT)
            .min(MAX_BAR_HEIGHT)
    }

    #[must_use]
    pub fn navigation_bar_height(&self) -> u32 {
        self.navigation_bar_height
            .unwrap_or(DEFAULT_NAVIGATION_BAR_HEIGHT)
            .min(MAX_BAR_HEIGHT)
    }

    /// Total height reserved below the viewport in the windowed viewer.
    #[must_use]
    pub fn reserved_height(&self) -> u32 {
        self.metadata_bar_height() + self.navigation_bar_height()
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SlideshowConfig {
    #[serde(default = "default_slideshow_interval_secs")]
    pub default_interval_secs: Option<u32>,

    #[serde(default = "default_slideshow_reserved_height")]
    pub reserved_height: Option<u32>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            default_interval_secs: default_slideshow_interval_secs(),
            reserved_height: default_slideshow_reserved_height(),
        }
    }
}

impl SlideshowConfig {
    #[must_use]
    pub fn default_interval(&self) -> SlideshowInterval {
        self.default_interval_secs
            .map_or_else(SlideshowInterval::default, SlideshowInterval::clamped)
    }

    #[must_use]
    pub fn reserved_height(&self) -> u32 {
        self.reserved_height
            .unwrap_or(DEFAULT_SLIDESHOW_RESERVED_HEIGHT)
            .min(MAX_SLIDESHOW_RESERVED_HEIGHT)
    }
}

/// Video playback settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VideoConfig {
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: Option<u64>,

    #[serde(default = "default_restart_grace_ms")]
    pub restart_grace_ms: Option<u64>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: default_frame_delay_ms(),
            restart_grace_ms: default_restart_grace_ms(),
        }
    }
}

impl VideoConfig {
    #[must_use]
    pub fn timing(&self) -> PlaybackTiming {
        let frame_delay = self
            .frame_delay_ms
            .unwrap_or(DEFAULT_FRAME_DELAY_MS)
            .clamp(MIN_FRAME_DELAY_MS, MAX_FRAME_DELAY_MS);
        let restart_grace = self
            .restart_grace_ms
            .unwrap_or(DEFAULT_RESTART_GRACE_MS)
            .min(MAX_RESTART_GRACE_MS);
        PlaybackTiming {
            frame_delay: Duration::from_millis(frame_delay),
            restart_grace: Duration::from_millis(restart_grace),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub video: VideoConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_metadata_bar_height() -> Option<u32> {
    Some(DEFAULT_METADATA_BAR_HEIGHT)
}

#[allow(clippy::unnecessary_wraps)]
fn default_navigation_bar_height() -> Option<u32> {
    Some(DEFAULT_NAVIGATION_BAR_HEIGHT)
}

#[allow(clippy::unnecessary_wraps)]
fn default_slideshow_interval_secs() -> Option<u32> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_slideshow_reserved_height() -> Option<u32> {
    Some(DEFAULT_SLIDESHOW_RESERVED_HEIGHT)
}

#[allow(clippy::unnecessary_wraps)]
fn default_frame_delay_ms() -> Option<u64> {
    Some(DEFAULT_FRAME_DELAY_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_restart_grace_ms() -> Option<u64> {
    Some(DEFAULT_RESTART_GRACE_MS)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning key). A missing file yields
/// the defaults silently; an unreadable or invalid one yields the defaults
/// plus the i18n key of a warning to show.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("Loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("Ignoring settings file {}: {err}", path.display());
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
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
