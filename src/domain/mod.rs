// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core element logic with ZERO external dependencies.
//!
//! This module contains the sizing rules, the drag state machine and the
//! draw plan. It has no dependencies on external crates (except `std`) so it
//! can be exercised without a window or a renderer.
//!
//! # Modules
//!
//! - [`content`]: What the element shows ([`ElementContent`](content::ElementContent),
//!   [`Label`](content::Label), [`ImageContent`](content::ImageContent))
//! - [`sizing`]: Measurement ([`SizeConstraint`](sizing::SizeConstraint),
//!   [`ComputedSize`](sizing::ComputedSize), [`measure`](sizing::measure))
//! - [`drag`]: Drag controller ([`DragController`](drag::DragController),
//!   [`PointerEvent`](drag::PointerEvent))
//! - [`container`]: Parent size tracking ([`ContainerObserver`](container::ContainerObserver))
//! - [`render`]: Draw plan ([`DrawCommand`](render::DrawCommand))
//! - [`geometry`]: Shared value objects

pub mod container;
pub mod content;
pub mod drag;
pub mod geometry;
pub mod render;
pub mod sizing;

pub use container::{ContainerBounds, ContainerObserver, LayoutUpdate};
pub use content::{ElementContent, ImageContent, Label, LabelColor};
pub use drag::{DragController, DragSession, DragState, EventStatus, PointerEvent};
pub use geometry::{Dimensions, Position, Rect};
pub use render::DrawCommand;
pub use sizing::{measure, ComputedSize, ImageRects, Measurement, SizeConstraint};
