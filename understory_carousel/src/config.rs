// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use kurbo::Size;
use thiserror::Error;
use understory_gesture::release::GestureThresholds;
use understory_gesture::wheel::WheelConfig;
use understory_strip_layout::{Axis, PreviewEmphasis, StripMetrics};

/// Every tunable of a [`Carousel`](crate::Carousel).
///
/// Lengths are logical pixels, durations milliseconds, velocities px/ms. The
/// defaults describe a 384px tall desktop strip that stacks vertically on
/// viewports narrower than 768px.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Gap between items along the main axis.
    pub gap: f64,
    /// Main-axis extent of collapsed (inactive) items.
    pub inactive_extent: f64,
    /// Cross-axis size (height) of a horizontal strip.
    pub fixed_cross_size: f64,
    /// Total side padding subtracted from the viewport width in vertical mode.
    pub vertical_padding: f64,
    /// Viewports narrower than this stack vertically.
    pub breakpoint: f64,
    /// Main-axis extent used when an image cannot be measured.
    pub fallback_extent: f64,
    /// Net drag distance below which a release is a click.
    pub click_distance: f64,
    /// Release speed above which a drag is a flick.
    pub flick_velocity: f64,
    /// Parallax offset per unit of drag velocity.
    pub parallax_gain: f64,
    /// Maximum parallax offset magnitude.
    pub parallax_limit: f64,
    /// Accumulated wheel delta that triggers one step.
    pub wheel_step_threshold: f64,
    /// Quiet time after which a wheel burst ends.
    pub wheel_debounce_ms: f64,
    /// Duration of an animated relayout.
    pub relayout_ms: f64,
    /// Duration of the rubber-band return after a drag that did not navigate.
    pub return_ms: f64,
    /// Cross-axis growth of the pending item during a horizontal drag.
    pub preview_pending_boost: f64,
    /// Cross-axis growth of the pending item's neighbours during a horizontal drag.
    pub preview_neighbor_boost: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let metrics = StripMetrics::default();
        let thresholds = GestureThresholds::default();
        let wheel = WheelConfig::default();
        let emphasis = PreviewEmphasis::default();
        Self {
            gap: metrics.gap,
            inactive_extent: metrics.inactive_extent,
            fixed_cross_size: 384.0,
            vertical_padding: 96.0,
            breakpoint: 768.0,
            fallback_extent: 300.0,
            click_distance: thresholds.click_distance,
            flick_velocity: thresholds.flick_velocity,
            parallax_gain: thresholds.parallax_gain,
            parallax_limit: thresholds.parallax_limit,
            wheel_step_threshold: wheel.step_threshold,
            wheel_debounce_ms: wheel.debounce_ms,
            relayout_ms: 500.0,
            return_ms: 350.0,
            preview_pending_boost: emphasis.pending_boost,
            preview_neighbor_boost: emphasis.neighbor_boost,
        }
    }
}

/// A configuration value that cannot be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The value is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The value is below zero.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl CarouselConfig {
    /// Checks that every value is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gap", self.gap),
            ("inactive_extent", self.inactive_extent),
            ("fixed_cross_size", self.fixed_cross_size),
            ("vertical_padding", self.vertical_padding),
            ("breakpoint", self.breakpoint),
            ("fallback_extent", self.fallback_extent),
            ("click_distance", self.click_distance),
            ("flick_velocity", self.flick_velocity),
            ("parallax_gain", self.parallax_gain),
            ("parallax_limit", self.parallax_limit),
            ("wheel_step_threshold", self.wheel_step_threshold),
            ("wheel_debounce_ms", self.wheel_debounce_ms),
            ("relayout_ms", self.relayout_ms),
            ("return_ms", self.return_ms),
            ("preview_pending_boost", self.preview_pending_boost),
            ("preview_neighbor_boost", self.preview_neighbor_boost),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Layout spacing.
    #[must_use]
    pub fn metrics(&self) -> StripMetrics {
        StripMetrics::new(self.gap, self.inactive_extent)
    }

    /// Drag thresholds.
    #[must_use]
    pub fn thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            click_distance: self.click_distance,
            flick_velocity: self.flick_velocity,
            parallax_gain: self.parallax_gain,
            parallax_limit: self.parallax_limit,
        }
    }

    /// Wheel coalescing.
    #[must_use]
    pub fn wheel(&self) -> WheelConfig {
        WheelConfig {
            step_threshold: self.wheel_step_threshold,
            debounce_ms: self.wheel_debounce_ms,
        }
    }

    /// Drag preview emphasis.
    #[must_use]
    pub fn emphasis(&self) -> PreviewEmphasis {
        PreviewEmphasis {
            pending_boost: self.preview_pending_boost,
            neighbor_boost: self.preview_neighbor_boost,
        }
    }

    /// Strip axis for a viewport.
    #[must_use]
    pub fn axis_for(&self, viewport: Size) -> Axis {
        Axis::for_viewport_width(viewport.width, self.breakpoint)
    }

    /// Fixed cross-axis size of the strip for a viewport and axis.
    ///
    /// Horizontal strips have a fixed height; vertical strips span the
    /// viewport width minus side padding.
    #[must_use]
    pub fn cross_axis_size(&self, viewport: Size, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.fixed_cross_size,
            Axis::Vertical => (viewport.width - self.vertical_padding).max(0.0),
        }
    }
}
