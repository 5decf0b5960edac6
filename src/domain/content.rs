// SPDX-License-Identifier: MPL-2.0
//! What the element shows: an optional image and an optional text label.
//!
//! Content is fixed once built. The label's bounding box is supplied at
//! construction time, so every [`Label`] is measured before it can ever be
//! drawn.

use super::geometry::Dimensions;

/// Intrinsic pixel size of the element's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageContent {
    pub width: u32,
    pub height: u32,
}

impl ImageContent {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Image size as floating-point dimensions.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn dimensions(self) -> Dimensions {
        Dimensions::new(self.width as f32, self.height as f32)
    }
}

/// RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LabelColor {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}

impl Default for LabelColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A measured, non-empty text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    size: f32,
    color: LabelColor,
    bounds: Dimensions,
}

impl Label {
    /// Builds a label from its text and the bounding box measured for it.
    ///
    /// Returns `None` for an empty string: an empty label is the same as no
    /// label at all.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        size: f32,
        color: LabelColor,
        bounds: Dimensions,
    ) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text,
            size,
            color,
            bounds,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font size in logical pixels.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn color(&self) -> LabelColor {
        self.color
    }

    /// Measured bounding box of the rendered text.
    #[must_use]
    pub fn bounds(&self) -> Dimensions {
        self.bounds
    }
}

/// Everything the element displays. Either part may be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementContent {
    pub image: Option<ImageContent>,
    pub label: Option<Label>,
}

impl ElementContent {
    #[must_use]
    pub fn new(image: Option<ImageContent>, label: Option<Label>) -> Self {
        Self { image, label }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.label.is_none()
    }
}
