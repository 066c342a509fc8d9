// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-axis emphasis for live drag previews.

use alloc::vec::Vec;

/// Cross-axis growth applied around the pending index while dragging.
///
/// The pending item grows by `pending_boost` and its direct neighbours by
/// `neighbor_boost`; everything else keeps the base cross extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewEmphasis {
    /// Growth of the pending item.
    pub pending_boost: f64,
    /// Growth of the items directly before and after the pending item.
    pub neighbor_boost: f64,
}

impl Default for PreviewEmphasis {
    fn default() -> Self {
        Self {
            pending_boost: 64.0,
            neighbor_boost: 24.0,
        }
    }
}

impl PreviewEmphasis {
    /// Cross extent of `index` given the pending preview.
    #[must_use]
    pub fn cross_extent(&self, index: usize, pending: Option<usize>, base: f64) -> f64 {
        let Some(pending) = pending else {
            return base;
        };
        if index == pending {
            base + self.pending_boost
        } else if index.abs_diff(pending) == 1 {
            base + self.neighbor_boost
        } else {
            base
        }
    }

    /// Cross extents for `len` items.
    #[must_use]
    pub fn cross_extents(&self, len: usize, pending: Option<usize>, base: f64) -> Vec<f64> {
        (0..len)
            .map(|i| self.cross_extent(i, pending, base))
            .collect()
    }
}
