// SPDX-License-Identifier: MPL-2.0
//! Turning style attributes into displayable content.
//!
//! Decodes the element's image and measures its label, producing the
//! immutable [`ElementContent`] the sizing rules work on.

pub mod image;
pub mod text;

pub use image::{load_image, ImageData};
pub use text::{measure_text, measured_label, LINE_HEIGHT_FACTOR};

use crate::config::Config;
use crate::domain::ElementContent;

/// Element content together with the decoded pixels it refers to.
#[derive(Debug, Clone, Default)]
pub struct LoadedContent {
    pub content: ElementContent,
    pub image: Option<ImageData>,
}

/// Builds the element content described by `config`.
///
/// A missing or undecodable image is logged and left out; the element is
/// still usable with its label alone (or empty).
#[must_use]
pub fn load_content(config: &Config) -> LoadedContent {
    let image = config
        .image
        .path
        .as_ref()
        .and_then(|path| match load_image(path) {
            Ok(data) => {
                log::debug!("loaded image {} ({}x{})", path.display(), data.width, data.height);
                Some(data)
            }
            Err(err) => {
                log::warn!("failed to load image {}: {err}", path.display());
                None
            }
        });

    let label = config
        .label
        .text
        .as_deref()
        .and_then(|text| measured_label(text, config.label_size(), config.label_color()));

    LoadedContent {
        content: ElementContent::new(image.as_ref().map(ImageData::content), label),
        image,
    }
}
