// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-release classification.
//!
//! A release is classified from two numbers only: how far the strip moved
//! since the gesture began and the pointer velocity at release.
//!
//! 1. Movement below [`GestureThresholds::click_distance`] is a click. The
//!    gesture itself does not navigate; item click handlers own that case.
//! 2. Otherwise, a speed above [`GestureThresholds::flick_velocity`] is a flick:
//!    exactly one step in the direction of motion, wherever the strip settled.
//! 3. Otherwise the strip snaps to the item nearest the viewport center.
//!
//! ```
//! use understory_gesture::release::{
//!     GestureThresholds, ReleaseKind, StepDirection, classify_release,
//! };
//!
//! let t = GestureThresholds::default();
//! assert_eq!(classify_release(2.0, 3.0, &t), ReleaseKind::Click);
//! assert_eq!(
//!     classify_release(-40.0, -1.2, &t),
//!     ReleaseKind::Flick(StepDirection::Forward)
//! );
//! assert_eq!(classify_release(180.0, 0.1, &t), ReleaseKind::Snap);
//! ```

use understory_strip_layout::StripLayout;

/// Thresholds used while dragging and on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Net strip movement (px) below which a release counts as a click.
    pub click_distance: f64,
    /// Release speed (px/ms) above which a release counts as a flick.
    pub flick_velocity: f64,
    /// Parallax offset per unit of velocity (px per px/ms), applied negated.
    pub parallax_gain: f64,
    /// Maximum magnitude of the parallax offset.
    pub parallax_limit: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            click_distance: 5.0,
            flick_velocity: 0.5,
            parallax_gain: 8.0,
            parallax_limit: 20.0,
        }
    }
}

impl GestureThresholds {
    /// Cosmetic parallax offset for inactive items at a given velocity.
    ///
    /// Proportional to `-velocity` and clamped to `±parallax_limit`.
    #[must_use]
    pub fn parallax(&self, velocity: f64) -> f64 {
        let limit = self.parallax_limit.abs();
        (velocity * -self.parallax_gain).clamp(-limit, limit)
    }
}

/// One-step navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Toward index `0`.
    Backward,
    /// Toward the last index.
    Forward,
}

impl StepDirection {
    /// Direction of a signed accumulator (positive is forward).
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub fn from_sign(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Self::Forward)
        } else if value < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    /// Steps `index` once, clamped to `0..len`.
    ///
    /// An empty strip always yields `0`.
    #[must_use]
    pub fn apply(self, index: usize, len: usize) -> usize {
        let Some(last) = len.checked_sub(1) else {
            return 0;
        };
        let index = index.min(last);
        match self {
            Self::Backward => index.saturating_sub(1),
            Self::Forward => (index + 1).min(last),
        }
    }
}

/// What a drag release means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseKind {
    /// The strip barely moved.
    Click,
    /// Fast release; move one step.
    Flick(StepDirection),
    /// Settle on the nearest item.
    Snap,
}

/// Classifies a release from net strip movement and release velocity.
///
/// Dragging the strip toward larger coordinates (positive velocity) reveals
/// earlier items, so a positive flick steps [`StepDirection::Backward`].
#[must_use]
pub fn classify_release(distance: f64, velocity: f64, thresholds: &GestureThresholds) -> ReleaseKind {
    if distance.abs() < thresholds.click_distance {
        ReleaseKind::Click
    } else if velocity.abs() > thresholds.flick_velocity {
        if velocity > 0.0 {
            ReleaseKind::Flick(StepDirection::Backward)
        } else {
            ReleaseKind::Flick(StepDirection::Forward)
        }
    } else {
        ReleaseKind::Snap
    }
}

/// Navigation outcome of a finished gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigationIntent {
    /// Leave navigation to the item click handler.
    Stay,
    /// Commit a new active index.
    Commit(usize),
    /// Keep the active index and bring the strip back to `offset`.
    Return {
        /// Centering offset of the unchanged active item.
        offset: f64,
    },
}

/// Turns a classified release into a navigation intent.
///
/// `final_offset` is the strip translation at release. When the target equals
/// `active` (a snap back onto the same item, or a flick clamped at either end)
/// the strip returns to the active item's centering offset.
#[must_use]
pub fn resolve_release(
    kind: ReleaseKind,
    final_offset: f64,
    layout: &StripLayout<'_>,
    active: usize,
) -> NavigationIntent {
    let target = match kind {
        ReleaseKind::Click => return NavigationIntent::Stay,
        ReleaseKind::Flick(direction) => direction.apply(active, layout.len()),
        ReleaseKind::Snap => layout.closest_index(final_offset, active),
    };
    if target == active {
        NavigationIntent::Return {
            offset: layout.centering_offset(active),
        }
    } else {
        NavigationIntent::Commit(target)
    }
}
