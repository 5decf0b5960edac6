// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Widget-tree state for the movable element, separated from the canvas
//! program that reads it.

pub mod movable;

pub use movable::State;
