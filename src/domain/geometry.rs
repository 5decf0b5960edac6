// SPDX-License-Identifier: MPL-2.0
//! Plain geometry value objects shared by the sizing, drag and render rules.
//!
//! These mirror the shapes Iced uses (`Size`, `Rectangle`, `Point`) so the
//! domain stays free of any presentation framework. Conversions live in
//! [`crate::ui`].

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    /// Zero-sized dimensions.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin covering `dimensions`.
    #[must_use]
    pub const fn from_dimensions(dimensions: Dimensions) -> Self {
        Self::new(0.0, 0.0, dimensions.width, dimensions.height)
    }

    /// Returns true if the point lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Top-left corner of the element in parent-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// The container origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
