// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focal-point strip layout.
//!
//! All positions are expressed along the strip's main axis, in the same units
//! as the measured extents (typically logical pixels). Item offsets are
//! relative to the start of the strip; the strip itself is translated by the
//! *strip offset* to land in the viewport.

use alloc::vec::Vec;

/// Spacing parameters shared by every layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripMetrics {
    /// Gap between consecutive items.
    pub gap: f64,
    /// Main-axis extent of every item that is not active.
    pub inactive_extent: f64,
}

impl StripMetrics {
    /// Default gap between items.
    pub const DEFAULT_GAP: f64 = 20.0;
    /// Default collapsed extent of inactive items.
    pub const DEFAULT_INACTIVE_EXTENT: f64 = 128.0;

    /// Creates metrics with an explicit gap and inactive extent.
    #[must_use]
    pub const fn new(gap: f64, inactive_extent: f64) -> Self {
        Self {
            gap,
            inactive_extent,
        }
    }
}

impl Default for StripMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GAP, Self::DEFAULT_INACTIVE_EXTENT)
    }
}

/// Pure layout queries over a set of measured main-axis extents.
///
/// `extents[i]` is the extent item `i` takes while it is active. Every query
/// takes the active index explicitly, so the same `StripLayout` can answer
/// "where would things be if item `k` were active" without mutation.
///
/// An empty extent list means sizes are not known yet; every query then
/// returns `0` so hosts can keep rendering nothing until sampling completes.
#[derive(Clone, Copy, Debug)]
pub struct StripLayout<'a> {
    extents: &'a [f64],
    metrics: StripMetrics,
    viewport_main: f64,
}

impl<'a> StripLayout<'a> {
    /// Creates a layout over measured extents and a viewport main-axis size.
    #[must_use]
    pub fn new(extents: &'a [f64], metrics: StripMetrics, viewport_main: f64) -> Self {
        Self {
            extents,
            metrics,
            viewport_main,
        }
    }

    /// Number of items in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns `true` when no extents are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// The metrics this layout was built with.
    #[must_use]
    pub fn metrics(&self) -> StripMetrics {
        self.metrics
    }

    /// Midpoint of the viewport along the main axis.
    #[must_use]
    pub fn viewport_center(&self) -> f64 {
        self.viewport_main * 0.5
    }

    /// Main-axis extent of `index` when `active` is the active item.
    ///
    /// The active item takes its measured extent, falling back to the
    /// inactive extent if no measurement exists for it.
    #[must_use]
    pub fn main_axis_extent(&self, index: usize, active: usize) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        if index == active {
            self.extents
                .get(index)
                .copied()
                .unwrap_or(self.metrics.inactive_extent)
        } else {
            self.metrics.inactive_extent
        }
    }

    /// Start of `index` relative to the start of the strip.
    ///
    /// This is the running sum of `extent(i) + gap` for every `i < index`.
    #[must_use]
    pub fn cumulative_offset(&self, index: usize, active: usize) -> f64 {
        (0..index.min(self.len()))
            .map(|i| self.main_axis_extent(i, active) + self.metrics.gap)
            .sum()
    }

    /// Strip translation that centers `active` in the viewport.
    ///
    /// Returns `0` for an empty strip or an out-of-range index.
    #[must_use]
    pub fn centering_offset(&self, active: usize) -> f64 {
        if active >= self.len() {
            return 0.0;
        }
        let start = self.cumulative_offset(active, active);
        let extent = self.main_axis_extent(active, active);
        self.viewport_center() - (start + extent * 0.5)
    }

    /// Viewport-space center of `index` for a given strip translation.
    #[must_use]
    pub fn item_center(&self, index: usize, active: usize, strip_offset: f64) -> f64 {
        strip_offset
            + self.cumulative_offset(index, active)
            + self.main_axis_extent(index, active) * 0.5
    }

    /// Index whose center is nearest the viewport center under `strip_offset`.
    ///
    /// Sizes are assigned as if `active` were the active item, which is what a
    /// live drag sees: the strip moves rigidly, extents do not change until a
    /// new index commits. Ties resolve to the lower index.
    #[must_use]
    pub fn closest_index(&self, strip_offset: f64, active: usize) -> usize {
        let center = self.viewport_center();
        let mut pos = 0.0;
        let mut closest = 0;
        let mut closest_dist = f64::INFINITY;
        for i in 0..self.len() {
            let extent = self.main_axis_extent(i, active);
            let dist = (strip_offset + pos + extent * 0.5 - center).abs();
            if dist < closest_dist {
                closest_dist = dist;
                closest = i;
            }
            pos += extent + self.metrics.gap;
        }
        closest
    }

    /// Materializes the full layout for `active`.
    #[must_use]
    pub fn frame(&self, active: usize) -> LayoutFrame {
        let mut slots = Vec::with_capacity(self.len());
        let mut offset = 0.0;
        for i in 0..self.len() {
            let extent = self.main_axis_extent(i, active);
            slots.push(Slot { extent, offset });
            offset += extent + self.metrics.gap;
        }
        LayoutFrame {
            slots,
            centering_offset: self.centering_offset(active),
            active,
            gap: self.metrics.gap,
        }
    }
}

/// Placement of one item inside the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Main-axis extent.
    pub extent: f64,
    /// Start of the item relative to the start of the strip.
    pub offset: f64,
}

/// One computed layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutFrame {
    /// Per-item placement, in item order.
    pub slots: Vec<Slot>,
    /// Strip translation that centers the active item.
    pub centering_offset: f64,
    /// Active index this frame was computed for.
    pub active: usize,
    gap: f64,
}

impl LayoutFrame {
    /// Iterates the main-axis extents in item order.
    pub fn extents(&self) -> impl Iterator<Item = f64> + '_ {
        self.slots.iter().map(|slot| slot.extent)
    }

    /// Total length of the strip including inner gaps.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        match self.slots.last() {
            Some(last) => last.offset + last.extent,
            None => 0.0,
        }
    }

    /// Gap used between slots.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Viewport-space center of `index` once the strip is centered.
    ///
    /// Returns `0` for an out-of-range index.
    #[must_use]
    pub fn item_center(&self, index: usize) -> f64 {
        self.slots.get(index).map_or(0.0, |slot| {
            self.centering_offset + slot.offset + slot.extent * 0.5
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{StripLayout, StripMetrics};

    const EPS: f64 = 1e-9;

    fn five_items() -> [f64; 5] {
        [300.0, 250.0, 400.0, 520.0, 180.0]
    }

    #[test]
    fn active_item_takes_measured_extent() {
        let extents = five_items();
        let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);

        let frame = layout.frame(2);
        let got: alloc::vec::Vec<f64> = frame.extents().collect();
        assert_eq!(got, [128.0, 128.0, 400.0, 128.0, 128.0]);
    }

    #[test]
    fn centering_places_active_block_on_viewport_center() {
        let extents = five_items();
        let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);

        // Items 0 and 1 take 2 * (128 + 20) = 296 before item 2.
        assert!((layout.cumulative_offset(2, 2) - 296.0).abs() < EPS);
        let offset = layout.centering_offset(2);
        assert!((offset - -96.0).abs() < EPS);

        // The 400px block spans 200..600 in the viewport.
        let start = offset + layout.cumulative_offset(2, 2);
        assert!((start - 200.0).abs() < EPS);
        assert!((start + 400.0 - 600.0).abs() < EPS);
    }

    #[test]
    fn every_index_centers_exactly() {
        let extents = five_items();
        let layout = StripLayout::new(&extents, StripMetrics::new(12.0, 96.0), 1337.0);
        for i in 0..extents.len() {
            let offset = layout.centering_offset(i);
            let center = layout.item_center(i, i, offset);
            assert!(
                (center - layout.viewport_center()).abs() < EPS,
                "item {i} centered at {center}"
            );
        }
    }

    #[test]
    fn closest_index_of_centering_offset_is_identity() {
        let extents = five_items();
        let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);
        for i in 0..extents.len() {
            assert_eq!(layout.closest_index(layout.centering_offset(i), i), i);
        }
    }

    #[test]
    fn closest_index_follows_a_rigid_drag() {
        let extents = five_items();
        let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);
        let centered = layout.centering_offset(2);

        // Dragging left by one collapsed slot brings item 3 to the center.
        let dragged = centered - (200.0 + 20.0 + 64.0);
        assert_eq!(layout.closest_index(dragged, 2), 3);
        // A small nudge keeps item 2.
        assert_eq!(layout.closest_index(centered + 30.0, 2), 2);
    }

    #[test]
    fn closest_index_ties_resolve_to_lower_index() {
        let extents = [100.0, 100.0];
        let layout = StripLayout::new(&extents, StripMetrics::new(0.0, 100.0), 200.0);
        // Centers at 50 and 150 around a viewport center of 100.
        assert_eq!(layout.closest_index(0.0, 0), 0);
    }

    #[test]
    fn empty_strip_is_all_zero() {
        let layout = StripLayout::new(&[], StripMetrics::default(), 800.0);
        assert_eq!(layout.main_axis_extent(0, 0), 0.0);
        assert_eq!(layout.cumulative_offset(3, 0), 0.0);
        assert_eq!(layout.centering_offset(0), 0.0);
        assert_eq!(layout.closest_index(-500.0, 0), 0);
        let frame = layout.frame(0);
        assert!(frame.slots.is_empty());
        assert_eq!(frame.content_extent(), 0.0);
    }

    #[test]
    fn out_of_range_active_centers_nothing() {
        let extents = five_items();
        let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);
        assert_eq!(layout.centering_offset(5), 0.0);
    }

    #[test]
    fn frame_is_deterministic() {
        let extents = five_items();
        let layout = StripLayout::new(&extents, StripMetrics::default(), 800.0);
        assert_eq!(layout.frame(3), layout.frame(3));
    }

    #[test]
    fn content_extent_includes_inner_gaps_only() {
        let extents = [200.0, 200.0, 200.0];
        let layout = StripLayout::new(&extents, StripMetrics::new(10.0, 50.0), 500.0);
        let frame = layout.frame(1);
        // 50 + 10 + 200 + 10 + 50
        assert!((frame.content_extent() - 320.0).abs() < EPS);
        assert_eq!(frame.gap(), 10.0);
    }
}
