// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch sampling and generation bookkeeping.
//!
//! Sampling is *cancel-on-supersede*: whenever the item list or the strip's
//! cross-axis size changes, the owner calls [`SampleGate::begin`] and starts a
//! new [`SampleRequest`]. Older requests keep running (nothing blocks or
//! aborts them), but their outcomes fail [`SampleGate::accept`] and are
//! dropped. Whichever request was started last wins, regardless of which one
//! finishes last.

use futures::future::join_all;
use tracing::{debug, warn};
use understory_strip_layout::Axis;

use crate::AspectProbe;

/// Measured aspect of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AspectSample {
    /// Natural `width / height`.
    Measured {
        /// Width over height.
        ratio: f64,
    },
    /// The image could not be measured; use the fallback extent.
    Fallback,
}

impl AspectSample {
    /// The measured ratio, if any.
    #[must_use]
    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::Measured { ratio } => Some(ratio),
            Self::Fallback => None,
        }
    }

    /// Main-axis extent of the item at a fixed cross-axis size.
    ///
    /// Horizontal strips fix height, so the extent is `cross * ratio`; vertical
    /// strips fix width, so it is `cross / ratio`. Both round to whole pixels.
    #[must_use]
    pub fn main_extent(self, cross_axis_size: f64, axis: Axis, fallback: f64) -> f64 {
        match self {
            Self::Measured { ratio } => match axis {
                Axis::Horizontal => (cross_axis_size * ratio).round(),
                Axis::Vertical => (cross_axis_size / ratio).round(),
            },
            Self::Fallback => fallback,
        }
    }
}

/// Probes every image concurrently and returns samples in input order.
///
/// Completion order does not matter; result `i` always belongs to
/// `image_refs[i]`. A failed or degenerate probe degrades to
/// [`AspectSample::Fallback`] for that item and never fails the batch.
pub async fn sample_aspects<P, S>(probe: &P, image_refs: &[S]) -> Vec<AspectSample>
where
    P: AspectProbe + ?Sized,
    S: AsRef<str>,
{
    join_all(image_refs.iter().map(|image_ref| async move {
        let image_ref = image_ref.as_ref();
        match probe.probe(image_ref).await {
            Ok(size) => match size.ratio() {
                Some(ratio) => AspectSample::Measured { ratio },
                None => {
                    warn!(
                        image_ref,
                        width = size.width,
                        height = size.height,
                        "degenerate image size; using fallback extent"
                    );
                    AspectSample::Fallback
                }
            },
            Err(err) => {
                warn!(image_ref, %err, "aspect probe failed; using fallback extent");
                AspectSample::Fallback
            }
        }
    }))
    .await
}

/// Generation counter deciding which sample outcome may commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleGate {
    current: u64,
    accepted: bool,
}

impl Default for SampleGate {
    /// A gate with nothing in flight.
    fn default() -> Self {
        Self {
            current: 0,
            accepted: true,
        }
    }
}

impl SampleGate {
    /// Starts a new generation, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.accepted = false;
        self.current
    }

    /// Invalidates every in-flight generation without starting a new one.
    pub fn cancel(&mut self) {
        self.begin();
        self.accepted = true;
    }

    /// The most recently started generation.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Returns `true` while the latest generation may still commit.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.accepted
    }

    /// Returns `true` if `generation` is the latest and has not committed yet.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current && !self.accepted
    }

    /// Marks `generation` as committed if it is current.
    ///
    /// Returns `false` for stale, cancelled, or already committed generations.
    pub fn accept(&mut self, generation: u64) -> bool {
        if self.is_current(generation) {
            self.accepted = true;
            true
        } else {
            debug!(
                generation,
                current = self.current,
                "discarding superseded aspect sample"
            );
            false
        }
    }
}

/// Everything needed to run one sampling pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRequest {
    /// Generation from [`SampleGate::begin`].
    pub generation: u64,
    /// Image references in item order.
    pub image_refs: Vec<String>,
    /// Fixed cross-axis size of the strip.
    pub cross_axis_size: f64,
    /// Main axis of the strip.
    pub axis: Axis,
}

impl SampleRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(generation: u64, image_refs: Vec<String>, cross_axis_size: f64, axis: Axis) -> Self {
        Self {
            generation,
            image_refs,
            cross_axis_size,
            axis,
        }
    }

    /// Runs the request against `probe`.
    pub async fn run<P: AspectProbe + ?Sized>(self, probe: &P) -> SampleOutcome {
        debug!(
            generation = self.generation,
            items = self.image_refs.len(),
            cross_axis_size = self.cross_axis_size,
            axis = ?self.axis,
            "sampling aspect ratios"
        );
        let samples = sample_aspects(probe, self.image_refs.as_slice()).await;
        SampleOutcome {
            generation: self.generation,
            cross_axis_size: self.cross_axis_size,
            axis: self.axis,
            samples,
        }
    }
}

/// Result of a [`SampleRequest`].
#[derive(Clone, Debug, PartialEq)]
pub struct SampleOutcome {
    /// Generation of the request that produced this outcome.
    pub generation: u64,
    /// Cross-axis size the request was made for.
    pub cross_axis_size: f64,
    /// Axis the request was made for.
    pub axis: Axis,
    /// One sample per image, in request order.
    pub samples: Vec<AspectSample>,
}

impl SampleOutcome {
    /// Main-axis extents for every item.
    #[must_use]
    pub fn main_extents(&self, fallback: f64) -> Vec<f64> {
        self.samples
            .iter()
            .map(|s| s.main_extent(self.cross_axis_size, self.axis, fallback))
            .collect()
    }
}
