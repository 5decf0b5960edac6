// SPDX-License-Identifier: MPL-2.0
//! Size of the region the element lives in.
//!
//! The parent's size is only known once the parent has finished its own
//! layout, and it changes whenever the parent is laid out again. The element
//! subscribes explicitly when it is attached and unsubscribes when it is
//! detached; attaching twice is a no-op, so repeated measurement passes never
//! stack up duplicate subscriptions.

use super::geometry::Dimensions;

/// Width and height of the immediate parent region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerBounds {
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<Dimensions> for ContainerBounds {
    fn from(dimensions: Dimensions) -> Self {
        Self::new(dimensions.width, dimensions.height)
    }
}

/// Outcome of delivering a parent-layout notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutUpdate {
    /// The observer is detached; the notification was dropped.
    Ignored,
    /// Same bounds as before.
    Unchanged,
    /// New bounds were recorded.
    Changed(ContainerBounds),
}

/// Explicit subscription to the parent's layout-finished signal.
#[derive(Debug, Clone, Default)]
pub struct ContainerObserver {
    attached: bool,
    bounds: Option<ContainerBounds>,
}

impl ContainerObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to parent layout notifications.
    ///
    /// Returns `true` only when this call created the subscription.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        true
    }

    /// Drops the subscription. Previously learned bounds are forgotten.
    pub fn detach(&mut self) {
        self.attached = false;
        self.bounds = None;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Delivers the parent's size after it finished a layout pass.
    pub fn on_parent_layout(&mut self, bounds: ContainerBounds) -> LayoutUpdate {
        if !self.attached {
            return LayoutUpdate::Ignored;
        }
        if self.bounds == Some(bounds) {
            return LayoutUpdate::Unchanged;
        }
        self.bounds = Some(bounds);
        LayoutUpdate::Changed(bounds)
    }

    /// Last known parent size, if any notification arrived yet.
    #[must_use]
    pub fn bounds(&self) -> Option<ContainerBounds> {
        self.bounds
    }

    /// Parent size, with unknown bounds treated as zero.
    #[must_use]
    pub fn bounds_or_zero(&self) -> ContainerBounds {
        self.bounds.unwrap_or_default()
    }
}
