// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Label Defaults
// ==========================================================================

/// Default label font size, in device pixels (before density scaling).
pub const DEFAULT_LABEL_SIZE_PX: f32 = 15.0;

/// Default label colour.
pub const DEFAULT_LABEL_COLOR: &str = "#000000";

/// Smallest label size accepted after density scaling.
pub const MIN_LABEL_SIZE: f32 = 1.0;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default display density (device pixels per logical pixel).
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Densities at or below this are treated as the default.
pub const MIN_DENSITY: f32 = 0.1;
