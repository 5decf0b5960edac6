// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use iced::Point;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The element was dragged to a new top-left position.
    ElementMoved(Point),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Explicit `settings.toml` to load instead of the default location.
    pub config_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MOVABLE_VIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Image to display, overriding `[image].path`.
    pub image: Option<PathBuf>,
    /// Label text, overriding `[label].text`.
    pub label: Option<String>,
}
