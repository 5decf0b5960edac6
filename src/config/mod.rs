// SPDX-License-Identifier: MPL-2.0
//! This module handles the element's style block, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[label]` - Label text, size (device pixels) and colour
//! - `[image]` - Path of the image to display
//! - `[layout]` - Optional fixed width/height; absent means "size yourself"
//! - `[display]` - Display density used to normalise device-pixel sizes
//!
//! Sizes in the style block are device pixels. They are converted once, by
//! [`Config::label_size`], into the logical pixels the rest of the crate uses.
//!
//! # Examples
//!
//! ```no_run
//! use movable_view::config;
//!
//! // Falls back to defaults (with a warning) when the file is unreadable
//! let (config, warning) = config::load_with_override(None);
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("label size: {}", config.label_size());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::{LabelColor, SizeConstraint};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Label settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LabelConfig {
    /// Label text; absent or empty means no label.
    #[serde(default)]
    pub text: Option<String>,

    /// Font size in device pixels.
    #[serde(default = "default_label_size")]
    pub size: f32,

    /// Colour as `#RRGGBB` or `#RRGGBBAA`.
    #[serde(default = "default_label_color")]
    pub color: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: None,
            size: DEFAULT_LABEL_SIZE_PX,
            color: DEFAULT_LABEL_COLOR.to_string(),
        }
    }
}

/// Image settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ImageConfig {
    /// Image file to display (raster formats or SVG).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Element layout settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Fixed element width in logical pixels.
    #[serde(default)]
    pub width: Option<f32>,

    /// Fixed element height in logical pixels.
    #[serde(default)]
    pub height: Option<f32>,
}

/// Display settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Device pixels per logical pixel.
    #[serde(default = "default_density")]
    pub density: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub label: LabelConfig,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Density, falling back to the default for nonsensical values.
    #[must_use]
    pub fn density(&self) -> f32 {
        if self.display.density.is_finite() && self.display.density > MIN_DENSITY {
            self.display.density
        } else {
            DEFAULT_DENSITY
        }
    }

    /// Label font size in logical pixels.
    #[must_use]
    pub fn label_size(&self) -> f32 {
        (self.label.size / self.density()).max(MIN_LABEL_SIZE)
    }

    /// Label colour; an unparsable value falls back to black.
    #[must_use]
    pub fn label_color(&self) -> LabelColor {
        parse_color(&self.label.color).unwrap_or_else(|err| {
            log::warn!("{err}; using default label colour");
            LabelColor::BLACK
        })
    }

    /// Width constraint for the measurement pass.
    #[must_use]
    pub fn width_constraint(&self) -> SizeConstraint {
        constraint(self.layout.width)
    }

    /// Height constraint for the measurement pass.
    #[must_use]
    pub fn height_constraint(&self) -> SizeConstraint {
        constraint(self.layout.height)
    }
}

fn constraint(size: Option<f32>) -> SizeConstraint {
    match size {
        Some(size) if size.is_finite() && size >= 0.0 => SizeConstraint::Exact(size),
        _ => SizeConstraint::Unspecified,
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the string is not a hex colour.
pub fn parse_color(value: &str) -> Result<LabelColor> {
    let invalid = || Error::Config(format!("invalid colour '{value}'"));

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel =
        |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).map_err(|_| invalid());
    let alpha = if hex.len() == 8 { channel(6)? } else { u8::MAX };

    Ok(LabelColor::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
}

fn default_label_size() -> f32 {
    DEFAULT_LABEL_SIZE_PX
}

fn default_label_color() -> String {
    DEFAULT_LABEL_COLOR.to_string()
}

fn default_density() -> f32 {
    DEFAULT_DENSITY
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

/// Loads `settings.toml` from `base_dir`, or from the default config directory.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults with a warning.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return load_or_default(&path);
        }
    }
    (Config::default(), None)
}

/// Loads a specific file, falling back to defaults with a warning on failure.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("failed to load {}: {err}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
