#![forbid(unsafe_code)]

//! Shortest-edge scale computation.
//!
//! # Algorithm
//!
//! ```text
//! scale_x   = observed.width  / design.width
//! scale_y   = observed.height / design.height
//! candidate = min(scale_x, scale_y)
//! scale     = bounds.clamp(candidate)     // min first, then max
//! ```
//!
//! Taking the smaller ratio guarantees the scaled content fits inside both
//! axes of the observed area. The function is pure: no state, no clock,
//! no validation of the design size.

use crate::bounds::ScaleBounds;
use crate::error::Degeneracy;
use crate::geometry::{DesignSize, ObservedSize};

/// Width and height ratios of `observed` against `design`, before clamping.
#[inline]
#[must_use]
pub fn axis_ratios(design: DesignSize, observed: ObservedSize) -> (f64, f64) {
    (
        observed.width / design.width,
        observed.height / design.height,
    )
}

/// Compute the clamped shortest-edge scale.
///
/// Returns `0` when `observed` has a zero dimension. A non-positive design
/// size yields infinity or NaN; that is treated as caller error.
#[inline]
#[must_use]
pub fn compute_scale(design: DesignSize, observed: ObservedSize, bounds: ScaleBounds) -> f64 {
    let (scale_x, scale_y) = axis_ratios(design, observed);
    bounds.clamp(scale_x.min(scale_y))
}

/// A design size and bounds pair, fixed for the engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleEngine {
    design: DesignSize,
    bounds: ScaleBounds,
}

impl ScaleEngine {
    /// Create an engine with no bounds.
    #[must_use]
    pub const fn new(design: DesignSize) -> Self {
        Self {
            design,
            bounds: ScaleBounds::none(),
        }
    }

    /// Create an engine with bounds.
    #[must_use]
    pub const fn with_bounds(design: DesignSize, bounds: ScaleBounds) -> Self {
        Self { design, bounds }
    }

    /// The design size.
    #[inline]
    pub const fn design(&self) -> DesignSize {
        self.design
    }

    /// The bounds.
    #[inline]
    pub const fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Compute the scale for one observed size.
    #[inline]
    #[must_use]
    pub fn compute(&self, observed: ObservedSize) -> f64 {
        compute_scale(self.design, observed, self.bounds)
    }

    /// Report every degenerate aspect of this engine's configuration.
    ///
    /// An empty result means the engine is well formed.
    #[must_use]
    pub fn degeneracies(&self) -> Vec<Degeneracy> {
        let mut found = Vec::new();
        if !self.design.is_well_formed() {
            found.push(Degeneracy::NonPositiveDesign {
                width: self.design.width,
                height: self.design.height,
            });
        }
        if let Some(inverted) = self.bounds.degeneracy() {
            found.push(inverted);
        }
        found
    }
}
