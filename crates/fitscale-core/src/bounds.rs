#![forbid(unsafe_code)]

//! Optional lower/upper limits on the computed scale.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::Degeneracy;

/// Independently optional scale limits.
///
/// # Invariants
///
/// 1. The lower bound is applied before the upper bound, so an inverted
///    pair (`min > max`) always yields `max`.
/// 2. [`clamp`](Self::clamp) is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ScaleBounds {
    /// Smallest scale that may be produced.
    pub min_scale: Option<f64>,
    /// Largest scale that may be produced.
    pub max_scale: Option<f64>,
}

impl ScaleBounds {
    /// No limits.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min_scale: None,
            max_scale: None,
        }
    }

    /// Both limits at once.
    #[must_use]
    pub const fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale: Some(min_scale),
            max_scale: Some(max_scale),
        }
    }

    /// Set the lower limit.
    #[must_use]
    pub const fn with_min(mut self, min_scale: f64) -> Self {
        self.min_scale = Some(min_scale);
        self
    }

    /// Set the upper limit.
    #[must_use]
    pub const fn with_max(mut self, max_scale: f64) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    /// Apply the limits to a candidate scale, lower bound first.
    #[inline]
    #[must_use]
    pub fn clamp(&self, candidate: f64) -> f64 {
        let mut scale = candidate;
        if let Some(min) = self.min_scale {
            scale = scale.max(min);
        }
        if let Some(max) = self.max_scale {
            scale = scale.min(max);
        }
        scale
    }

    /// Whether the limits contradict each other.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.min_scale, self.max_scale), (Some(min), Some(max)) if min > max)
    }

    /// Describe an inverted pair, if any.
    #[must_use]
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match (self.min_scale, self.max_scale) {
            (Some(min), Some(max)) if min > max => Some(Degeneracy::InvertedBounds { min, max }),
            _ => None,
        }
    }
}
