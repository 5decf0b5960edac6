// SPDX-License-Identifier: MPL-2.0
//! Per-widget state kept in the Iced widget tree.
//!
//! Survives `view` rebuilds, so the element keeps its position and any
//! active drag while the application re-renders.

use crate::domain::{ContainerObserver, DragController};
use iced::touch;

/// State of one movable element.
#[derive(Debug, Default)]
pub struct State {
    /// Position and drag session.
    pub drag: DragController,
    /// Subscription to the container's layout.
    pub container: ContainerObserver,
    /// Finger driving a touch drag, if any.
    pub finger: Option<touch::Finger>,
}
