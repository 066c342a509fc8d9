// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless focal-point carousel.
//!
//! One item of an ordered list is enlarged and centered; the others collapse
//! to a fixed extent on either side. Users navigate by clicking, dragging,
//! flicking, or scrolling the wheel. The strip runs horizontally on wide
//! viewports and vertically below a breakpoint.
//!
//! [`Carousel`] ties the lower layers together:
//!
//! - `understory_aspect` measures images; the carousel hands out
//!   [`SampleRequest`]s and only commits the most recent outcome.
//! - `understory_strip_layout` turns sizes and the active index into
//!   extents and a centering strip offset.
//! - `understory_gesture` classifies drags and coalesces wheel bursts.
//!
//! The carousel never renders, owns timers, or spawns tasks. Hosts feed it
//! input with timestamps and apply the [`CarouselEvent`]s it queues.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_carousel::{
//!     AspectSample, Carousel, CarouselConfig, CarouselEvent, Item, Motion, SampleOutcome,
//! };
//!
//! let mut carousel = Carousel::new(CarouselConfig::default());
//! carousel.set_viewport(Size::new(800.0, 600.0), 0.0);
//! carousel.set_items(
//!     (0..5)
//!         .map(|i| Item::new(format!("{i}"), format!("/img/{i}.jpg"), format!("Work {i}")))
//!         .collect(),
//! );
//! carousel.set_active_index(2, 0.0);
//!
//! // The host measures images however it likes.
//! let request = carousel.take_sample_request().unwrap();
//! let mut samples = vec![AspectSample::Fallback; 5];
//! samples[2] = AspectSample::Measured { ratio: 400.0 / 384.0 };
//! let outcome = SampleOutcome {
//!     generation: request.generation,
//!     cross_axis_size: request.cross_axis_size,
//!     axis: request.axis,
//!     samples,
//! };
//! assert!(carousel.apply_sample(outcome, 10.0));
//!
//! let layout = carousel
//!     .drain_events()
//!     .into_iter()
//!     .find_map(|event| match event {
//!         CarouselEvent::Layout(layout) => Some(layout),
//!         _ => None,
//!     })
//!     .unwrap();
//! assert_eq!(layout.extents, vec![128.0, 128.0, 400.0, 128.0, 128.0]);
//! assert_eq!(layout.strip_offset, -96.0);
//! // The first layout after data loads is not animated.
//! assert_eq!(layout.motion, Motion::Instant);
//! ```

mod carousel;
mod config;
mod event;
pub mod indicator;
mod item;

pub use carousel::{Carousel, CarouselState, SlideTone};
pub use config::{CarouselConfig, ConfigError};
pub use event::{CarouselEvent, LayoutCommand, Motion};
pub use item::Item;

pub use understory_aspect::{AspectSample, SampleOutcome, SampleRequest};
pub use understory_strip_layout::{Axis, LayoutFrame};
