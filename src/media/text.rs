// SPDX-License-Identifier: MPL-2.0
//! Label measurement using cosmic-text.
//!
//! Labels are measured once, when the element content is built, so the
//! sizing rules never see an unmeasured label.

use crate::domain::{Dimensions, Label, LabelColor};
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use std::sync::{Mutex, OnceLock};

/// Line height as a multiple of the font size. The canvas draws the label
/// with the same relative line height, so the measured box is the drawn one.
pub const LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Process-wide font database; loading system fonts is expensive.
static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();

fn font_system() -> &'static Mutex<FontSystem> {
    FONT_SYSTEM.get_or_init(|| {
        log::info!("Initializing FontSystem");
        Mutex::new(FontSystem::new())
    })
}

/// Measures the bounding box of `text` rendered at `size` pixels.
///
/// Width is the right edge of the widest shaped line, height one line height
/// per line. Empty text measures zero.
#[must_use]
pub fn measure_text(text: &str, size: f32) -> Dimensions {
    if text.is_empty() {
        return Dimensions::ZERO;
    }

    let line_height = size * LINE_HEIGHT_FACTOR;
    let metrics = Metrics::new(size, line_height);

    let mut font_system = match font_system().lock() {
        Ok(guard) => guard,
        // A panic elsewhere while measuring leaves the font database intact.
        Err(poisoned) => poisoned.into_inner(),
    };

    let mut buffer = Buffer::new(&mut font_system, metrics);
    let mut buffer = buffer.borrow_with(&mut font_system);

    let attrs = Attrs::new().family(Family::SansSerif);
    buffer.set_size(None, None);
    buffer.set_text(text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(true);

    let mut width: f32 = 0.0;
    let mut height: f32 = 0.0;
    for run in buffer.layout_runs() {
        if let Some(last) = run.glyphs.last() {
            width = width.max(last.x + last.w);
        }
        height += line_height;
    }

    if width == 0.0 {
        // Nothing shaped (no fonts available): rough per-character estimate.
        return estimate(text, size, line_height);
    }

    Dimensions::new(width, height)
}

#[allow(clippy::cast_precision_loss)]
fn estimate(text: &str, size: f32, line_height: f32) -> Dimensions {
    let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0) as f32;
    let lines = text.lines().count().max(1) as f32;
    Dimensions::new(widest * size * 0.55, lines * line_height)
}

/// Builds a measured label, or `None` for empty text.
#[must_use]
pub fn measured_label(text: &str, size: f32, color: LabelColor) -> Option<Label> {
    Label::new(text, size, color, measure_text(text, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(measure_text("", 15.0), Dimensions::ZERO);
        assert!(measured_label("", 15.0, LabelColor::BLACK).is_none());
    }

    #[test]
    fn single_line_has_positive_size() {
        let size = measure_text("OK", 15.0);
        assert!(size.width > 0.0, "width should be positive");
        assert!(size.height > 0.0, "height should be positive");
    }

    #[test]
    fn single_line_is_one_line_height_tall() {
        let size = measure_text("Hello", 20.0);
        assert_abs_diff_eq!(size.height, 26.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn multiline_text_is_taller() {
        let single = measure_text("Line 1", 15.0);
        let multi = measure_text("Line 1\nLine 2\nLine 3", 15.0);
        assert!(
            multi.height > single.height,
            "multi-line ({}) should be taller than single line ({})",
            multi.height,
            single.height
        );
    }

    #[test]
    fn larger_font_is_wider() {
        let small = measure_text("Drag me", 12.0);
        let large = measure_text("Drag me", 24.0);
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn measured_label_carries_bounds() {
        let label = measured_label("OK", 15.0, LabelColor::BLACK).expect("non-empty label");
        assert_eq!(label.bounds(), measure_text("OK", 15.0));
    }
}
