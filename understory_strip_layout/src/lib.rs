// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_strip_layout --heading-base-level=0

//! Understory Strip Layout: focal-point strip layout primitives.
//!
//! This crate models a strip of items laid out along one axis where exactly one
//! item is *active*: the active item takes its measured main-axis extent and
//! every other item collapses to a fixed inactive extent. The strip is then
//! translated so the active item's midpoint lands on the viewport's midpoint.
//!
//! The core concepts are:
//!
//! - [`Axis`]: the main axis of the strip, chosen from the viewport width.
//! - [`StripMetrics`]: the gap between items and the collapsed (inactive) extent.
//! - [`StripLayout`]: a borrowed view over measured extents and viewport size with
//!   pure queries (`main_axis_extent`, `cumulative_offset`, `centering_offset`,
//!   `closest_index`).
//! - [`LayoutFrame`]: a materialized snapshot of one layout pass.
//! - [`PreviewEmphasis`]: cross-axis emphasis used while a drag preview is live.
//!
//! Everything here is a pure function of its inputs. Calling the same query
//! twice with the same arguments always yields the same result, so frames can be
//! recomputed every animation tick or compared in snapshot tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_strip_layout::{StripLayout, StripMetrics};
//!
//! // Five items; the third one measured at 400px along the main axis.
//! let extents = [300.0, 300.0, 400.0, 300.0, 300.0];
//! let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);
//!
//! let frame = layout.frame(2);
//! assert_eq!(frame.slots[2].extent, 400.0);
//! assert_eq!(frame.slots[0].extent, 128.0);
//!
//! // The active item is centered on the viewport.
//! assert!((frame.item_center(2) - 400.0).abs() < 1e-9);
//! assert_eq!(layout.closest_index(frame.centering_offset, 2), 2);
//! ```
//!
//! An empty extent list is a valid degenerate strip: every query returns `0`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod layout;
mod preview;

pub use axis::Axis;
pub use layout::{LayoutFrame, Slot, StripLayout, StripMetrics};
pub use preview::PreviewEmphasis;
