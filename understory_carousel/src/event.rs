// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output of the carousel, drained by the host.

use understory_strip_layout::Axis;

/// How a change should reach the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Apply immediately.
    Instant,
    /// Ease toward the target over `duration_ms`.
    Animate {
        /// Animation length in milliseconds.
        duration_ms: f64,
    },
}

/// Target geometry for every slide and the strip.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutCommand {
    /// Axis the extents and offset apply to.
    pub axis: Axis,
    /// Main-axis extent per item, in item order.
    pub extents: Vec<f64>,
    /// Strip translation along `axis`.
    pub strip_offset: f64,
    /// How to reach the target.
    pub motion: Motion,
    /// The axis just flipped: zero the strip translation on the other axis.
    pub reset_stale_axis: bool,
}

/// Something the host has to react to.
#[derive(Clone, Debug, PartialEq)]
pub enum CarouselEvent {
    /// Committed navigation (click, flick, snap, or wheel). Never fired for
    /// drag previews or external index sets.
    ActiveIndexChanged(usize),
    /// Live drag preview; `None` once the drag is over.
    PendingIndexChanged(Option<usize>),
    /// Relayout every slide and the strip.
    Layout(LayoutCommand),
    /// Move only the strip (live drag, or rubber-band return).
    StripMoved {
        /// Axis of the translation.
        axis: Axis,
        /// Strip translation.
        offset: f64,
        /// How to reach it.
        motion: Motion,
    },
    /// Cosmetic offset for the images inside inactive slides.
    Parallax {
        /// Offset along the main axis; `0` clears it.
        offset: f64,
    },
    /// Cross-axis size per slide while a horizontal drag preview is live.
    CrossExtents(Vec<f64>),
    /// A new aspect sample is needed; fetch it with
    /// [`Carousel::take_sample_request`](crate::Carousel::take_sample_request).
    SampleRequested {
        /// Generation of the request.
        generation: u64,
    },
}
