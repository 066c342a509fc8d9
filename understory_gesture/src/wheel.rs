// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel-to-step adapter.
//!
//! Wheel devices report wildly different delta magnitudes: a mouse notch may be
//! 100px, a trackpad swipe dozens of 2px events. [`WheelStepper`] coalesces a
//! burst into at most one step per threshold crossing:
//!
//! - each event adds its main-axis delta to an accumulator,
//! - once the accumulator's magnitude exceeds the threshold, one step is
//!   emitted in its direction and the accumulator resets to zero,
//! - if no event arrives within the debounce window, the burst is over and the
//!   accumulator resets.
//!
//! The debounce window is evaluated lazily on the next event. Hosts with a
//! timer queue can also schedule [`WheelStepper::deadline`] and call
//! [`WheelStepper::expire`] when it fires.

use kurbo::Vec2;
use understory_strip_layout::Axis;

use crate::release::StepDirection;

/// Wheel coalescing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Accumulated magnitude that must be exceeded to emit a step.
    pub step_threshold: f64,
    /// Quiet time (ms) after which a burst is considered finished.
    pub debounce_ms: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            step_threshold: 80.0,
            debounce_ms: 150.0,
        }
    }
}

/// Picks the wheel delta component that drives a strip on `axis`.
///
/// Horizontal strips prefer `dx` and fall back to `dy`, so a plain vertical
/// mouse wheel still scrolls them.
#[must_use]
pub fn wheel_delta(axis: Axis, delta: Vec2) -> f64 {
    match axis {
        Axis::Vertical => delta.y,
        Axis::Horizontal => {
            if delta.x != 0.0 {
                delta.x
            } else {
                delta.y
            }
        }
    }
}

/// Debounced wheel accumulator.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelStepper {
    config: WheelConfig,
    accumulator: f64,
    last_event_ms: Option<f64>,
}

impl WheelStepper {
    /// Creates an empty stepper.
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
            last_event_ms: None,
        }
    }

    /// Coalescing parameters.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Current accumulated delta.
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Time at which the current burst ends if no further event arrives.
    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.last_event_ms.map(|t| t + self.config.debounce_ms)
    }

    /// Ends the current burst if its debounce window has elapsed.
    ///
    /// Returns `true` if the accumulator was reset.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        match self.deadline() {
            Some(deadline) if now_ms >= deadline => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Forgets the current burst.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_event_ms = None;
    }

    /// Feeds one wheel delta along the main axis.
    ///
    /// Returns a step when the accumulator crosses the threshold; the
    /// accumulator is zero immediately afterwards.
    pub fn push(&mut self, delta: f64, now_ms: f64) -> Option<StepDirection> {
        self.expire(now_ms);
        self.accumulator += delta;
        self.last_event_ms = Some(now_ms);

        if self.accumulator.abs() > self.config.step_threshold {
            let direction = StepDirection::from_sign(self.accumulator);
            self.accumulator = 0.0;
            direction
        } else {
            None
        }
    }

    /// Feeds a 2D wheel delta, projected with [`wheel_delta`].
    pub fn push_wheel(&mut self, axis: Axis, delta: Vec2, now_ms: f64) -> Option<StepDirection> {
        self.push(wheel_delta(axis, delta), now_ms)
    }
}
