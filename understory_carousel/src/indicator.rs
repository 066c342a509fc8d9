// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide indicator model.
//!
//! A column of stems, one per slide, rendered beside the carousel. The stem of
//! the focused slide is long and opaque; hovering a stem widens it and,
//! slightly less, its neighbours. While a drag preview is live, the pending
//! slide takes the focused role so the indicator tracks the finger.
//!
//! ```
//! use understory_carousel::indicator::{Indicator, StemStyle};
//!
//! let mut indicator = Indicator::new(4);
//! indicator.set_active(1);
//! assert_eq!(indicator.stem(1), StemStyle::new(20.0, 1.0));
//!
//! indicator.set_pending(Some(3));
//! assert_eq!(indicator.focus(), 3);
//!
//! indicator.set_hovered(Some(0));
//! assert_eq!(indicator.stem(1), StemStyle::new(12.0, 0.5));
//! ```

/// Visual state of one stem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StemStyle {
    /// Stem length.
    pub width: f64,
    /// Stem opacity in `0..=1`.
    pub opacity: f64,
}

impl StemStyle {
    /// Creates a style.
    #[must_use]
    pub const fn new(width: f64, opacity: f64) -> Self {
        Self { width, opacity }
    }
}

/// Stem styles per role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    /// Focused slide.
    pub active: StemStyle,
    /// Every other slide.
    pub inactive: StemStyle,
    /// Hovered stem.
    pub hovered: StemStyle,
    /// Direct neighbours of the hovered stem.
    pub adjacent: StemStyle,
    /// Stem animation length.
    pub animation_ms: f64,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            active: StemStyle::new(20.0, 1.0),
            inactive: StemStyle::new(8.0, 0.25),
            hovered: StemStyle::new(16.0, 1.0),
            adjacent: StemStyle::new(12.0, 0.5),
            animation_ms: 300.0,
        }
    }
}

/// Indicator state for a carousel of `len` slides.
#[derive(Clone, Debug, Default)]
pub struct Indicator {
    len: usize,
    active: usize,
    hovered: Option<usize>,
    pending: Option<usize>,
    style: IndicatorStyle,
}

impl Indicator {
    /// Creates an indicator with the default style.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_style(len, IndicatorStyle::default())
    }

    /// Creates an indicator with a custom style.
    #[must_use]
    pub fn with_style(len: usize, style: IndicatorStyle) -> Self {
        Self {
            len,
            active: 0,
            hovered: None,
            pending: None,
            style,
        }
    }

    /// Number of stems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when there are no stems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Style in use.
    #[must_use]
    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    /// Changes the number of stems, clamping tracked indices.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.active = self.clamp(self.active);
        self.hovered = self.hovered.filter(|&i| i < len);
        self.pending = self.pending.filter(|&i| i < len);
    }

    /// Sets the committed active slide (clamped).
    pub fn set_active(&mut self, index: usize) {
        self.active = self.clamp(index);
    }

    /// Sets or clears the hovered stem. Out-of-range stems clear it.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.len);
    }

    /// Sets or clears the live drag preview. Out-of-range previews clear it.
    pub fn set_pending(&mut self, index: Option<usize>) {
        self.pending = index.filter(|&i| i < self.len);
    }

    /// The hovered stem, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The slide the indicator highlights: the pending preview if any,
    /// otherwise the active slide. The position marker sits beside it.
    #[must_use]
    pub fn focus(&self) -> usize {
        self.pending.unwrap_or(self.active)
    }

    /// Style of stem `index`.
    #[must_use]
    pub fn stem(&self, index: usize) -> StemStyle {
        if let Some(hovered) = self.hovered {
            if index == hovered {
                return self.style.hovered;
            }
            if index.abs_diff(hovered) == 1 {
                return self.style.adjacent;
            }
        }
        if index == self.focus() {
            self.style.active
        } else {
            self.style.inactive
        }
    }

    /// Styles of every stem in order.
    #[must_use]
    pub fn stems(&self) -> Vec<StemStyle> {
        (0..self.len).map(|i| self.stem(i)).collect()
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }
}
