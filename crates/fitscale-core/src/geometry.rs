#![forbid(unsafe_code)]

//! Size primitives.
//!
//! Dimensions are CSS pixels stored as `f64` so fractional layout sizes
//! (zoomed pages, high-DPI hosts) survive without rounding.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// The nominal resolution a UI was authored against.
///
/// Both dimensions are expected to be positive. This is not validated: a
/// zero or negative design size is a caller error and produces IEEE
/// artifacts in the engine rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct DesignSize {
    /// Authored width.
    pub width: f64,
    /// Authored height.
    pub height: f64,
}

impl DesignSize {
    /// Full HD, the resolution most dashboards are drawn at.
    pub const FULL_HD: Self = Self::new(1920.0, 1080.0);

    /// Create a new design size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive (and not NaN).
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for DesignSize {
    fn default() -> Self {
        Self::FULL_HD
    }
}

/// The current size of the container or viewport being fitted into.
///
/// Sampled fresh for every computation. Zero dimensions are legal and mean
/// the target has not been laid out yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct ObservedSize {
    /// Observed width.
    pub width: f64,
    /// Observed height.
    pub height: f64,
}

impl ObservedSize {
    /// A zero-by-zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new observed size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Replace each zero axis with the corresponding axis of `fallback`.
    ///
    /// An element that has not been laid out on one axis reports `0` there;
    /// the viewport is the closest meaningful stand-in for that axis.
    #[inline]
    pub fn or_axes(self, fallback: ObservedSize) -> Self {
        Self {
            width: if self.width == 0.0 {
                fallback.width
            } else {
                self.width
            },
            height: if self.height == 0.0 {
                fallback.height
            } else {
                self.height
            },
        }
    }
}

impl From<(f64, f64)> for ObservedSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<(u32, u32)> for ObservedSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(f64::from(width), f64::from(height))
    }
}
