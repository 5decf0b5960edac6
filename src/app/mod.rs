// SPDX-License-Identifier: MPL-2.0
//! Application root state for the demo window.
//!
//! The `App` loads the style block once at startup, builds the element's
//! content from it (image decoding and label measurement happen here, before
//! the first frame), and hosts the movable element in a window-filling
//! container.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::SizeConstraint;
use crate::media::{self, LoadedContent};
use iced::{window, Element, Length, Point, Task};
use std::fmt;

/// Root Iced application state.
pub struct App {
    content: LoadedContent,
    width: Length,
    height: Length,
    last_position: Option<Point>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_image", &self.content.image.is_some())
            .field("has_label", &self.content.content.label.is_some())
            .field("last_position", &self.last_position)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 200;
pub const MIN_WINDOW_WIDTH: u32 = 200;

/// Builds the window settings
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

/// Resolves the configuration for `flags` and applies CLI overrides.
pub fn resolve_config(flags: &Flags) -> (Config, Option<String>) {
    let (mut config, warning) = match &flags.config_path {
        Some(path) => config::load_or_default(path),
        None => config::load_with_override(flags.config_dir.clone()),
    };

    if let Some(image) = &flags.image {
        config.image.path = Some(image.clone());
    }
    if let Some(label) = &flags.label {
        config.label.text = Some(label.clone());
    }

    (config, warning)
}

fn length_from(constraint: SizeConstraint) -> Length {
    match constraint {
        SizeConstraint::Exact(size) => Length::Fixed(size),
        SizeConstraint::Unspecified => Length::Shrink,
    }
}

impl App {
    /// Initializes application state from the resolved configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = resolve_config(&flags);
        if let Some(warning) = warning {
            log::warn!("{warning}; using default style");
        }

        (Self::from_config(&config), Task::none())
    }

    fn from_config(config: &Config) -> Self {
        let content = media::load_content(config);
        log::info!(
            "element content: image={}, label={}",
            content.image.is_some(),
            content.content.label.is_some()
        );

        Self {
            content,
            width: length_from(config.width_constraint()),
            height: length_from(config.height_constraint()),
            last_position: None,
        }
    }

    fn title(&self) -> String {
        String::from("Movable View")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ElementMoved(position) => {
                log::trace!("element moved to ({}, {})", position.x, position.y);
                self.last_position = Some(position);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            content: &self.content,
            width: self.width,
            height: self.height,
            last_position: self.last_position,
        })
    }
}
