// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: navigation gestures for focal-point strips.
//!
//! This crate turns raw input streams into navigation intents for a strip laid
//! out with `understory_strip_layout`. It has three parts:
//!
//! - [`drag`]: a pointer drag state machine (`idle → dragging → idle`) that
//!   moves the strip rigidly, estimates release velocity, and previews the
//!   index the strip would snap to.
//! - [`release`]: the pure drag-release classifier. A release is a click, a
//!   flick (one step in the direction of motion), or a snap to the nearest
//!   item.
//! - [`wheel`]: a debounced accumulator that turns bursts of wheel deltas into
//!   single steps.
//!
//! Nothing here owns timers or event loops. Hosts pass positions as
//! [`kurbo::Point`], wheel deltas as [`kurbo::Vec2`], and timestamps in
//! milliseconds from any monotonic clock.
//!
//! ## Drag example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::drag::StripDrag;
//! use understory_gesture::release::NavigationIntent;
//! use understory_strip_layout::{Axis, StripLayout, StripMetrics};
//!
//! let extents = [400.0; 5];
//! let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);
//! let start = layout.centering_offset(2);
//!
//! let mut drag = StripDrag::default();
//! drag.begin(Axis::Horizontal, Point::new(500.0, 0.0), start, 0.0);
//!
//! // Slow drag to the left by ~one collapsed slot.
//! for step in 1..=30 {
//!     let x = 500.0 - 10.0 * f64::from(step);
//!     drag.update(Point::new(x, 0.0), 100.0 * f64::from(step), &layout, 2);
//! }
//!
//! let release = drag.end(&layout, 2).unwrap();
//! assert_eq!(release.intent, NavigationIntent::Commit(3));
//! assert!(!drag.is_dragging());
//! ```
//!
//! ## Wheel example
//!
//! ```rust
//! use understory_gesture::release::StepDirection;
//! use understory_gesture::wheel::WheelStepper;
//!
//! let mut wheel = WheelStepper::default();
//! assert_eq!(wheel.push(50.0, 0.0), None);
//! assert_eq!(wheel.push(50.0, 16.0), Some(StepDirection::Forward));
//! assert_eq!(wheel.accumulator(), 0.0);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
pub mod release;
pub mod wheel;
