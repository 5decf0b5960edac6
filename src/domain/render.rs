// SPDX-License-Identifier: MPL-2.0
//! Draw plan for one frame of the element, in element-local coordinates.

use super::content::ElementContent;
use super::geometry::Rect;
use super::sizing::Measurement;

/// One drawing step. Commands are emitted back to front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Draw the image's `source` region stretched into `destination`.
    Image { source: Rect, destination: Rect },
    /// Draw the label with its left edge at `x` and its baseline at `baseline`.
    Label { x: f32, baseline: f32 },
}

/// Image first, label on top of it.
#[must_use]
pub fn plan(content: &ElementContent, measurement: &Measurement) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(2);

    if let Some(rects) = measurement.image {
        commands.push(DrawCommand::Image {
            source: rects.source,
            destination: rects.destination,
        });
    }

    if let Some(label) = &content.label {
        let size = measurement.size;
        let bounds = label.bounds();
        commands.push(DrawCommand::Label {
            x: (size.width - bounds.width) / 2.0,
            baseline: (size.height + bounds.height) / 2.0,
        });
    }

    commands
}
