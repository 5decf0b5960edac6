// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! - [`movable`] - Canvas program hosting the sizing and drag rules
//! - [`state`] - Widget-tree state (position, drag session, container subscription)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod movable;
pub mod state;

pub use movable::{constraint_from_length, MovableView};
