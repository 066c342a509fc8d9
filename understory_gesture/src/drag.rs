// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip drag state: rigid strip movement, release velocity, and snap preview.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`StripDrag::begin`], passing the pointer position
//!    and the strip translation currently on screen.
//! 2) On each move event, call [`StripDrag::update`] to get the live strip
//!    translation, the pending index preview, and a parallax offset.
//! 3) Finish with [`StripDrag::end`] (normal release) or [`StripDrag::cancel`]
//!    (lost capture, interrupted touch). Both classify the release and clear
//!    the interaction; `cancel` treats velocity as zero.
//! 4) [`StripDrag::abort`] drops the interaction without any navigation, for
//!    hosts that tear down or re-orient mid-gesture.
//!
//! Only one gesture is tracked at a time: `begin` is ignored while dragging.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::drag::{DragPhase, StripDrag};
//! use understory_strip_layout::{Axis, StripLayout, StripMetrics};
//!
//! let extents = [300.0; 4];
//! let layout = StripLayout::new(&extents, StripMetrics::default(), 600.0);
//!
//! let mut drag = StripDrag::default();
//! assert!(drag.begin(Axis::Vertical, Point::new(10.0, 300.0), -50.0, 0.0));
//! assert_eq!(drag.phase(), DragPhase::Dragging);
//!
//! // Only the main-axis (here: y) coordinate matters.
//! let preview = drag.update(Point::new(99.0, 280.0), 16.0, &layout, 0).unwrap();
//! assert_eq!(preview.strip_offset, -70.0);
//! ```

use kurbo::Point;
use understory_strip_layout::{Axis, StripLayout};

use crate::release::{
    GestureThresholds, NavigationIntent, ReleaseKind, classify_release, resolve_release,
};

/// Projects a pointer position onto `axis`.
#[must_use]
pub fn main_coord(axis: Axis, pos: Point) -> f64 {
    match axis {
        Axis::Horizontal => pos.x,
        Axis::Vertical => pos.y,
    }
}

/// Coarse gesture phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No pointer gesture in progress.
    #[default]
    Idle,
    /// A pointer is down and moving the strip.
    Dragging,
}

/// State of one pointer gesture, alive from pointer-down to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    /// Axis the gesture was started on.
    pub axis: Axis,
    /// Pointer coordinate at pointer-down.
    pub start_pointer: f64,
    /// Strip translation at pointer-down.
    pub start_strip_offset: f64,
    /// Strip translation following the pointer.
    pub live_offset: f64,
    /// Pointer coordinate of the previous sample.
    pub last_pointer: f64,
    /// Timestamp (ms) of the previous sample.
    pub last_sample_ms: f64,
    /// Instantaneous pointer velocity (px/ms) from the two most recent samples.
    pub velocity: f64,
    /// Index the strip would snap to if released now.
    pub pending_index: Option<usize>,
}

/// Live feedback produced by a move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragPreview {
    /// Strip translation to apply immediately.
    pub strip_offset: f64,
    /// Snap target preview.
    pub pending_index: usize,
    /// Cosmetic offset for inactive items, opposite to the motion.
    pub parallax: f64,
}

/// Result of a finished gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Classification of the release.
    pub kind: ReleaseKind,
    /// Net strip movement since pointer-down.
    pub distance: f64,
    /// Velocity used for classification.
    pub velocity: f64,
    /// Strip translation at release.
    pub final_offset: f64,
    /// What the host should do next.
    pub intent: NavigationIntent,
}

/// Pointer drag state machine for a focal-point strip.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripDrag {
    interaction: Option<Interaction>,
    thresholds: GestureThresholds,
}

impl StripDrag {
    /// Creates an idle drag tracker with custom thresholds.
    #[must_use]
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            interaction: None,
            thresholds,
        }
    }

    /// Thresholds used for classification and parallax.
    #[must_use]
    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    /// Replaces the thresholds. Takes effect for the next event.
    pub fn set_thresholds(&mut self, thresholds: GestureThresholds) {
        self.thresholds = thresholds;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.interaction.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_some()
    }

    /// The in-flight interaction, if any.
    #[must_use]
    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    /// Pending index preview of the in-flight interaction.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        self.interaction.and_then(|i| i.pending_index)
    }

    /// Starts a gesture at `pos` with the strip currently at `strip_offset`.
    ///
    /// Returns `false` (and changes nothing) if a gesture is already active.
    pub fn begin(&mut self, axis: Axis, pos: Point, strip_offset: f64, now_ms: f64) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        let pointer = main_coord(axis, pos);
        self.interaction = Some(Interaction {
            axis,
            start_pointer: pointer,
            start_strip_offset: strip_offset,
            live_offset: strip_offset,
            last_pointer: pointer,
            last_sample_ms: now_ms,
            velocity: 0.0,
            pending_index: None,
        });
        true
    }

    /// Feeds a move event.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(
        &mut self,
        pos: Point,
        now_ms: f64,
        layout: &StripLayout<'_>,
        active: usize,
    ) -> Option<DragPreview> {
        let thresholds = self.thresholds;
        let interaction = self.interaction.as_mut()?;
        let pointer = main_coord(interaction.axis, pos);

        let dt = now_ms - interaction.last_sample_ms;
        if dt > 0.0 {
            interaction.velocity = (pointer - interaction.last_pointer) / dt;
        }
        interaction.last_pointer = pointer;
        interaction.last_sample_ms = now_ms;

        interaction.live_offset =
            interaction.start_strip_offset + (pointer - interaction.start_pointer);
        let pending = layout.closest_index(interaction.live_offset, active);
        interaction.pending_index = Some(pending);

        Some(DragPreview {
            strip_offset: interaction.live_offset,
            pending_index: pending,
            parallax: thresholds.parallax(interaction.velocity),
        })
    }

    /// Ends the gesture normally and classifies the release.
    ///
    /// Returns `None` when no gesture is active.
    pub fn end(&mut self, layout: &StripLayout<'_>, active: usize) -> Option<DragRelease> {
        let interaction = self.interaction.take()?;
        Some(self.release(&interaction, interaction.velocity, layout, active))
    }

    /// Ends the gesture abnormally; behaves as [`end`](Self::end) with zero velocity.
    pub fn cancel(&mut self, layout: &StripLayout<'_>, active: usize) -> Option<DragRelease> {
        let interaction = self.interaction.take()?;
        Some(self.release(&interaction, 0.0, layout, active))
    }

    /// Drops the gesture without classifying it.
    pub fn abort(&mut self) -> Option<Interaction> {
        self.interaction.take()
    }

    fn release(
        &self,
        interaction: &Interaction,
        velocity: f64,
        layout: &StripLayout<'_>,
        active: usize,
    ) -> DragRelease {
        let distance = interaction.live_offset - interaction.start_strip_offset;
        let kind = classify_release(distance, velocity, &self.thresholds);
        DragRelease {
            kind,
            distance,
            velocity,
            final_offset: interaction.live_offset,
            intent: resolve_release(kind, interaction.live_offset, layout, active),
        }
    }
}
