// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel state machine.

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace};
use understory_aspect::{SampleGate, SampleOutcome, SampleRequest};
use understory_gesture::drag::{DragRelease, StripDrag};
use understory_gesture::release::NavigationIntent;
use understory_gesture::wheel::WheelStepper;
use understory_strip_layout::{Axis, LayoutFrame, StripLayout};

use crate::indicator::Indicator;
use crate::{CarouselConfig, CarouselEvent, ConfigError, Item, LayoutCommand, Motion};

/// What the carousel shows.
///
/// `active_index` is the single source of truth for which item is enlarged;
/// everything else on screen is derived from it, the axis, and the sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    /// Enlarged, centered item.
    pub active_index: usize,
    /// Main axis of the strip.
    pub axis: Axis,
    /// Measured main-axis extent per item.
    pub sizes: Vec<f64>,
    /// `true` once `sizes` match the current items, axis and cross size.
    pub loaded: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            active_index: 0,
            axis: Axis::Horizontal,
            sizes: Vec::new(),
            loaded: false,
        }
    }
}

/// Color treatment of a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideTone {
    /// The active slide, in full color.
    Full,
    /// A hovered inactive slide, partially desaturated.
    Muted,
    /// Every other inactive slide.
    Grayscale,
}

/// Headless focal-point carousel.
///
/// Feed it items, viewport sizes, pointer and wheel input; drain
/// [`CarouselEvent`]s with [`drain_events`](Self::drain_events) and apply
/// them to the rendered strip. Every input takes the host's monotonic clock
/// in milliseconds.
#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    items: Vec<Item>,
    viewport: Size,
    state: CarouselState,
    cross_axis_size: f64,
    gate: SampleGate,
    request: Option<SampleRequest>,
    drag: StripDrag,
    wheel: WheelStepper,
    strip_offset: f64,
    laid_out_axis: Option<Axis>,
    snap_instantly: bool,
    transition_until_ms: f64,
    overlay_open: bool,
    hovered: Option<usize>,
    previewed: Option<usize>,
    last_gesture_distance: Option<f64>,
    events: Vec<CarouselEvent>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl Carousel {
    /// Creates an empty carousel.
    ///
    /// The configuration is used as is; see [`try_new`](Self::try_new).
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let state = CarouselState::default();
        Self {
            cross_axis_size: config.cross_axis_size(Size::ZERO, state.axis),
            drag: StripDrag::new(config.thresholds()),
            wheel: WheelStepper::new(config.wheel()),
            config,
            items: Vec::new(),
            viewport: Size::ZERO,
            state,
            gate: SampleGate::default(),
            request: None,
            strip_offset: 0.0,
            laid_out_axis: None,
            snap_instantly: true,
            transition_until_ms: f64::NEG_INFINITY,
            overlay_open: false,
            hovered: None,
            previewed: None,
            last_gesture_distance: None,
            events: Vec::new(),
        }
    }

    /// Creates an empty carousel after validating `config`.
    pub fn try_new(config: CarouselConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Enlarged item.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// Live drag preview, if a drag is moving the strip.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        self.drag.pending_index()
    }

    /// Main axis of the strip.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.state.axis
    }

    /// `true` once item sizes are known for the current geometry.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state.loaded
    }

    /// Strip translation along the main axis as last commanded.
    #[must_use]
    pub fn strip_offset(&self) -> f64 {
        self.strip_offset
    }

    /// Fixed cross-axis size of the strip.
    #[must_use]
    pub fn cross_axis_size(&self) -> f64 {
        self.cross_axis_size
    }

    /// Last viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a commanded animation is still running at `now_ms`.
    #[must_use]
    pub fn is_transitioning(&self, now_ms: f64) -> bool {
        now_ms < self.transition_until_ms
    }

    /// Full layout for the current state, once it can be computed.
    #[must_use]
    pub fn frame(&self) -> Option<LayoutFrame> {
        let viewport_main = self.viewport_main();
        if !self.state.loaded || self.items.is_empty() || viewport_main <= 0.0 {
            return None;
        }
        let layout = StripLayout::new(&self.state.sizes, self.config.metrics(), viewport_main);
        Some(layout.frame(self.state.active_index))
    }

    /// Indicator model reflecting the active item and any drag preview.
    #[must_use]
    pub fn indicator(&self) -> Indicator {
        let mut indicator = Indicator::new(self.items.len());
        indicator.set_active(self.state.active_index);
        indicator.set_pending(self.pending_index());
        indicator
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        core::mem::take(&mut self.events)
    }

    /// Replaces the item list.
    ///
    /// The active index is clamped into the new list and sizes are sampled
    /// again. The first layout after new data is applied without animation.
    /// An empty list is valid: nothing is laid out.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.abort_gesture();
        self.items = items;
        self.state.sizes.clear();
        self.state.loaded = false;
        self.snap_instantly = true;
        self.hovered = None;
        match self.items.len().checked_sub(1) {
            Some(last) => {
                self.state.active_index = self.state.active_index.min(last);
                self.resample();
            }
            None => {
                self.state.active_index = 0;
                self.request = None;
                self.gate.cancel();
            }
        }
    }

    /// Reports a new viewport size.
    ///
    /// Crossing the breakpoint flips the axis: any drag is dropped and the
    /// next layout snaps on the new axis with the stale axis zeroed. A change
    /// of cross-axis size re-samples, as does any viewport after
    /// [`unmount`](Self::unmount). Any other size change drops the drag and
    /// relayouts.
    pub fn set_viewport(&mut self, viewport: Size, now_ms: f64) {
        let axis = self.config.axis_for(viewport);
        let cross = self.config.cross_axis_size(viewport, axis);
        let previous = core::mem::replace(&mut self.viewport, viewport);

        let flipped = axis != self.state.axis;
        if flipped {
            debug!(from = ?self.state.axis, to = ?axis, "carousel axis flipped");
            self.abort_gesture();
            self.wheel.reset();
            self.state.axis = axis;
        }

        let unsampled = !self.state.loaded && !self.gate.is_pending();
        if flipped || unsampled || cross != self.cross_axis_size {
            self.cross_axis_size = cross;
            self.resample();
        } else if previous != viewport {
            self.abort_gesture();
            self.relayout(now_ms);
        }
    }

    /// Takes the pending sample request, if any.
    ///
    /// The host runs it (see [`SampleRequest::run`]) and hands the outcome
    /// to [`apply_sample`](Self::apply_sample).
    pub fn take_sample_request(&mut self) -> Option<SampleRequest> {
        self.request.take()
    }

    /// Commits a sample outcome.
    ///
    /// Returns `false` and changes nothing when the outcome was superseded
    /// by a newer request or the carousel was unmounted.
    pub fn apply_sample(&mut self, outcome: SampleOutcome, now_ms: f64) -> bool {
        if !self.gate.accept(outcome.generation) {
            return false;
        }
        self.request = None;
        self.abort_gesture();
        self.state.sizes = outcome.main_extents(self.config.fallback_extent);
        self.state.loaded = true;
        debug!(
            generation = outcome.generation,
            items = self.state.sizes.len(),
            "aspect sample committed"
        );
        self.relayout(now_ms);
        true
    }

    /// Sets the active index from outside (clamped).
    ///
    /// Relayouts like any navigation but does not report
    /// [`CarouselEvent::ActiveIndexChanged`], which is reserved for
    /// navigation the user performed.
    pub fn set_active_index(&mut self, index: usize, now_ms: f64) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        let index = index.min(last);
        if index == self.state.active_index {
            return;
        }
        self.abort_gesture();
        self.state.active_index = index;
        self.relayout(now_ms);
    }

    /// Handles a click on slide `index`.
    ///
    /// Ignored when the pointer gesture that produced the click moved the
    /// strip by the click threshold or more, or while a drag is active.
    pub fn click_item(&mut self, index: usize, now_ms: f64) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        if self
            .last_gesture_distance
            .is_some_and(|d| d.abs() >= self.config.click_distance)
        {
            trace!(index, "click suppressed after drag");
            return false;
        }
        self.commit(index, now_ms)
    }

    /// Starts a pointer drag. Returns `false` if ignored.
    pub fn pointer_down(&mut self, pos: Point, now_ms: f64) -> bool {
        if !self.state.loaded || self.items.is_empty() {
            return false;
        }
        if !self
            .drag
            .begin(self.state.axis, pos, self.strip_offset, now_ms)
        {
            return false;
        }
        trace!(?pos, strip_offset = self.strip_offset, "drag started");
        self.last_gesture_distance = Some(0.0);
        self.previewed = None;
        true
    }

    /// Moves the active drag.
    pub fn pointer_move(&mut self, pos: Point, now_ms: f64) {
        let axis = self.state.axis;
        let layout = StripLayout::new(&self.state.sizes, self.config.metrics(), self.viewport_main());
        let Some(preview) = self
            .drag
            .update(pos, now_ms, &layout, self.state.active_index)
        else {
            return;
        };
        self.strip_offset = preview.strip_offset;
        self.last_gesture_distance = self
            .drag
            .interaction()
            .map(|i| i.live_offset - i.start_strip_offset);

        self.events.push(CarouselEvent::StripMoved {
            axis,
            offset: preview.strip_offset,
            motion: Motion::Instant,
        });
        self.events.push(CarouselEvent::Parallax {
            offset: preview.parallax,
        });
        self.events
            .push(CarouselEvent::PendingIndexChanged(Some(preview.pending_index)));
        if self.previewed != Some(preview.pending_index) {
            self.previewed = Some(preview.pending_index);
            if axis == Axis::Horizontal {
                self.push_cross_extents();
            }
        }
    }

    /// Ends the active drag normally.
    pub fn pointer_up(&mut self, now_ms: f64) -> Option<DragRelease> {
        self.finish_drag(now_ms, false)
    }

    /// Ends the active drag abnormally (lost capture, interrupted touch).
    ///
    /// Resolves like [`pointer_up`](Self::pointer_up) with zero velocity.
    pub fn pointer_cancel(&mut self, now_ms: f64) -> Option<DragRelease> {
        self.finish_drag(now_ms, true)
    }

    /// Feeds one wheel event. Returns `true` if it navigated.
    ///
    /// Wheel input is ignored while an overlay is open, during a drag, and
    /// until the previous animated transition has finished.
    pub fn wheel(&mut self, delta: Vec2, now_ms: f64) -> bool {
        if !self.state.loaded
            || self.items.is_empty()
            || self.overlay_open
            || self.drag.is_dragging()
            || self.is_transitioning(now_ms)
        {
            self.wheel.reset();
            return false;
        }
        let Some(direction) = self.wheel.push_wheel(self.state.axis, delta, now_ms) else {
            return false;
        };
        let target = direction.apply(self.state.active_index, self.items.len());
        trace!(?direction, target, "wheel step");
        self.commit(target, now_ms)
    }

    /// When the wheel burst in progress ends if no further event arrives.
    #[must_use]
    pub fn wheel_deadline(&self) -> Option<f64> {
        self.wheel.deadline()
    }

    /// Ends the wheel burst if its debounce window has elapsed.
    pub fn expire_wheel(&mut self, now_ms: f64) -> bool {
        self.wheel.expire(now_ms)
    }

    /// Marks a modal overlay as open or closed. Wheel input is ignored while open.
    pub fn set_overlay_open(&mut self, open: bool) {
        self.overlay_open = open;
        if open {
            self.wheel.reset();
        }
    }

    /// Sets or clears the hovered slide.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.items.len());
    }

    /// Hovered slide, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Color treatment of slide `index`.
    #[must_use]
    pub fn slide_tone(&self, index: usize) -> SlideTone {
        if index == self.state.active_index {
            SlideTone::Full
        } else if self.hovered == Some(index) {
            SlideTone::Muted
        } else {
            SlideTone::Grayscale
        }
    }

    /// Reports the strip translation currently on screen.
    ///
    /// Hosts that animate call this before a pointer-down so a drag that
    /// grabs the strip mid-animation starts where the strip is.
    pub fn sync_strip_offset(&mut self, offset: f64) {
        if !self.drag.is_dragging() {
            self.strip_offset = offset;
        }
    }

    /// Tears the carousel down.
    ///
    /// In-flight samples become inert, any drag is dropped without
    /// navigation, the wheel burst is forgotten and queued events are
    /// discarded. Setting items or a viewport afterwards starts over.
    pub fn unmount(&mut self) {
        self.gate.cancel();
        self.request = None;
        self.drag.abort();
        self.wheel.reset();
        self.previewed = None;
        self.state.loaded = false;
        self.snap_instantly = true;
        self.laid_out_axis = None;
        self.last_gesture_distance = None;
        self.transition_until_ms = f64::NEG_INFINITY;
        self.events.clear();
        debug!("carousel unmounted");
    }

    fn viewport_main(&self) -> f64 {
        self.state
            .axis
            .main(self.viewport.width, self.viewport.height)
    }

    fn resample(&mut self) {
        if self.items.is_empty() || self.cross_axis_size <= 0.0 {
            self.request = None;
            self.gate.cancel();
            self.state.loaded = false;
            return;
        }
        let generation = self.gate.begin();
        self.state.loaded = false;
        let image_refs = self.items.iter().map(|i| i.image_ref.clone()).collect();
        self.request = Some(SampleRequest::new(
            generation,
            image_refs,
            self.cross_axis_size,
            self.state.axis,
        ));
        debug!(
            generation,
            cross_axis_size = self.cross_axis_size,
            axis = ?self.state.axis,
            "aspect sample requested"
        );
        self.events
            .push(CarouselEvent::SampleRequested { generation });
    }

    fn commit(&mut self, index: usize, now_ms: f64) -> bool {
        let Some(last) = self.items.len().checked_sub(1) else {
            return false;
        };
        let index = index.min(last);
        if index == self.state.active_index {
            return false;
        }
        debug!(from = self.state.active_index, to = index, "active index committed");
        self.state.active_index = index;
        self.events.push(CarouselEvent::ActiveIndexChanged(index));
        self.relayout(now_ms);
        true
    }

    fn relayout(&mut self, now_ms: f64) {
        let viewport_main = self.viewport_main();
        if !self.state.loaded || self.items.is_empty() || viewport_main <= 0.0 {
            return;
        }
        let axis = self.state.axis;
        let frame = StripLayout::new(&self.state.sizes, self.config.metrics(), viewport_main)
            .frame(self.state.active_index);

        let reset_stale_axis = self.laid_out_axis.is_some_and(|a| a != axis);
        let motion = if self.snap_instantly || reset_stale_axis {
            self.transition_until_ms = now_ms;
            Motion::Instant
        } else {
            self.transition_until_ms = now_ms + self.config.relayout_ms;
            Motion::Animate {
                duration_ms: self.config.relayout_ms,
            }
        };
        self.snap_instantly = false;
        self.laid_out_axis = Some(axis);
        self.strip_offset = frame.centering_offset;

        trace!(?axis, active = frame.active, ?motion, "relayout");
        self.events.push(CarouselEvent::Layout(LayoutCommand {
            axis,
            extents: frame.extents().collect(),
            strip_offset: frame.centering_offset,
            motion,
            reset_stale_axis,
        }));
    }

    fn finish_drag(&mut self, now_ms: f64, cancelled: bool) -> Option<DragRelease> {
        let active = self.state.active_index;
        let layout = StripLayout::new(&self.state.sizes, self.config.metrics(), self.viewport_main());
        let centering = layout.centering_offset(active);
        let release = if cancelled {
            self.drag.cancel(&layout, active)
        } else {
            self.drag.end(&layout, active)
        };
        let release = release?;
        trace!(kind = ?release.kind, distance = release.distance, velocity = release.velocity, "drag released");

        self.clear_preview();
        self.last_gesture_distance = Some(release.distance);
        match release.intent {
            NavigationIntent::Stay => {
                if release.final_offset != centering {
                    self.return_strip(centering, now_ms);
                }
            }
            NavigationIntent::Commit(index) => {
                self.commit(index, now_ms);
            }
            NavigationIntent::Return { offset } => self.return_strip(offset, now_ms),
        }
        Some(release)
    }

    fn return_strip(&mut self, offset: f64, now_ms: f64) {
        self.strip_offset = offset;
        self.transition_until_ms = now_ms + self.config.return_ms;
        self.events.push(CarouselEvent::StripMoved {
            axis: self.state.axis,
            offset,
            motion: Motion::Animate {
                duration_ms: self.config.return_ms,
            },
        });
    }

    fn abort_gesture(&mut self) {
        if self.drag.abort().is_some() {
            trace!("drag aborted");
            self.clear_preview();
        }
    }

    fn clear_preview(&mut self) {
        self.events.push(CarouselEvent::Parallax { offset: 0.0 });
        self.events.push(CarouselEvent::PendingIndexChanged(None));
        if self.previewed.take().is_some() && self.state.axis == Axis::Horizontal {
            self.push_cross_extents();
        }
    }

    fn push_cross_extents(&mut self) {
        let extents = self.config.emphasis().cross_extents(
            self.items.len(),
            self.previewed,
            self.cross_axis_size,
        );
        self.events.push(CarouselEvent::CrossExtents(extents));
    }
}
