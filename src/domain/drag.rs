// SPDX-License-Identifier: MPL-2.0
//! Drag controller
//!
//! Moves the element by the pointer delta between consecutive events and
//! keeps it inside its container. Pointer coordinates are screen (window)
//! coordinates, not element-local ones: the element moves under the pointer
//! during a drag, so local coordinates would feed its own motion back into
//! the delta.

use super::container::ContainerBounds;
use super::geometry::Position;
use super::sizing::ComputedSize;

/// Pointer input, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release,
}

/// Whether the host should stop propagating an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The element claimed the event; no click/tap handling should follow.
    Captured,
    /// The event may continue to other handlers.
    Ignored,
}

impl EventStatus {
    #[must_use]
    pub fn is_captured(self) -> bool {
        matches!(self, EventStatus::Captured)
    }
}

/// Pointer position at the previous event of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub last_pointer_x: f32,
    pub last_pointer_y: f32,
}

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Owns the element position and the drag session.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    position: Position,
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Applies one pointer event.
    ///
    /// `element` is the size from the latest measurement pass and `container`
    /// the latest known parent size (zero while unknown).
    pub fn handle(
        &mut self,
        event: PointerEvent,
        element: ComputedSize,
        container: ContainerBounds,
    ) -> EventStatus {
        match (event, self.state) {
            (PointerEvent::Press { x, y }, _) => {
                // A press while already dragging means the release was lost;
                // the new session replaces the stale one.
                self.state = DragState::Dragging(DragSession {
                    last_pointer_x: x,
                    last_pointer_y: y,
                });
                EventStatus::Captured
            }
            (PointerEvent::Move { x, y }, DragState::Dragging(session)) => {
                let delta_x = x - session.last_pointer_x;
                let delta_y = y - session.last_pointer_y;

                self.position = Position::new(
                    clamp_axis(self.position.x + delta_x, container.width - element.width),
                    clamp_axis(self.position.y + delta_y, container.height - element.height),
                );
                self.state = DragState::Dragging(DragSession {
                    last_pointer_x: x,
                    last_pointer_y: y,
                });
                EventStatus::Ignored
            }
            (PointerEvent::Release, DragState::Dragging(_)) => {
                self.state = DragState::Idle;
                EventStatus::Ignored
            }
            (PointerEvent::Move { .. } | PointerEvent::Release, DragState::Idle) => {
                EventStatus::Ignored
            }
        }
    }
}

/// Saturates at 0 first, then at `max`.
///
/// When the element is larger than its container `max` is negative and wins,
/// pinning the element's far edge to the container's far edge.
fn clamp_axis(candidate: f32, max: f32) -> f32 {
    let mut next = candidate;
    if next < 0.0 {
        next = 0.0;
    }
    if next > max {
        next = max;
    }
    next
}
