// SPDX-License-Identifier: MPL-2.0
//! Self-sizing rules for the movable element.
//!
//! Each axis is resolved on its own: an exact constraint from the host layout
//! always wins, otherwise the element takes the size of its content (the
//! larger of image and label when both are present).

use super::content::ElementContent;
use super::geometry::{Dimensions, Rect};

/// Host-imposed rule for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeConstraint {
    /// The host has decided the size, in pixels.
    Exact(f32),
    /// The element sizes itself from its content.
    #[default]
    Unspecified,
}

/// Result of one measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComputedSize {
    pub width: f32,
    pub height: f32,
}

impl ComputedSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn dimensions(self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Image placement derived from a measurement pass.
///
/// The whole image (`source`) is stretched over the whole element
/// (`destination`); aspect ratio is not preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRects {
    pub source: Rect,
    pub destination: Rect,
}

/// Output of [`measure`]: the element size plus the image rectangles used by
/// rendering until the next pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub size: ComputedSize,
    pub image: Option<ImageRects>,
}

/// Computes the element size for the given constraints and content.
#[must_use]
pub fn measure(
    width: SizeConstraint,
    height: SizeConstraint,
    content: &ElementContent,
) -> Measurement {
    let image = content.image.map(|image| image.dimensions());
    let label = content.label.as_ref().map(|label| label.bounds());

    let size = ComputedSize::new(
        resolve_axis(width, image.map(|d| d.width), label.map(|d| d.width)),
        resolve_axis(height, image.map(|d| d.height), label.map(|d| d.height)),
    );

    let image = image.map(|intrinsic| ImageRects {
        source: Rect::from_dimensions(intrinsic),
        destination: Rect::from_dimensions(size.dimensions()),
    });

    Measurement { size, image }
}

fn resolve_axis(constraint: SizeConstraint, image: Option<f32>, label: Option<f32>) -> f32 {
    match constraint {
        SizeConstraint::Exact(size) => size,
        SizeConstraint::Unspecified => match (image, label) {
            (Some(image), Some(label)) => image.max(label),
            (Some(image), None) => image,
            (None, Some(label)) => label,
            (None, None) => 0.0,
        },
    }
}
