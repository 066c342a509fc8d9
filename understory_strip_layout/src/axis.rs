// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Main axis of a strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Items run left to right.
    #[default]
    Horizontal,
    /// Items run top to bottom.
    Vertical,
}

impl Axis {
    /// Picks the axis for a viewport width.
    ///
    /// Narrow viewports (`0 < width < breakpoint`) stack vertically. A width of
    /// zero means the viewport has not been measured yet and stays horizontal.
    #[must_use]
    pub fn for_viewport_width(width: f64, breakpoint: f64) -> Self {
        if width > 0.0 && width < breakpoint {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Returns `true` for [`Axis::Vertical`].
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// Returns the perpendicular axis.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Selects the main-axis component of a `(width, height)` pair.
    #[must_use]
    pub fn main(self, width: f64, height: f64) -> f64 {
        match self {
            Self::Horizontal => width,
            Self::Vertical => height,
        }
    }

    /// Selects the cross-axis component of a `(width, height)` pair.
    #[must_use]
    pub fn cross(self, width: f64, height: f64) -> f64 {
        self.other().main(width, height)
    }
}
