// SPDX-License-Identifier: MPL-2.0
//! `movable_view` is a self-sizing element that can be dragged around inside
//! its container, built with the Iced GUI framework.
//!
//! The element sizes itself from an optional image and an optional text
//! label, and follows the pointer while dragged, clamped so it never leaves
//! the region it lives in. The sizing and drag rules live in [`domain`] and
//! are independent of Iced; [`ui`] hosts them in an Iced canvas.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
