#![forbid(unsafe_code)]

//! Error taxonomy.
//!
//! Nothing in fitscale is fatal. [`ScaleError::MissingTarget`] makes a single
//! computation skip; [`ScaleError::DegenerateConfiguration`] is diagnostic
//! only, because the arithmetic for a degenerate configuration is still
//! well defined.

use thiserror::Error;

/// A configuration that computes a deterministic but unintuitive scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// `min_scale > max_scale`; every computation yields `max`.
    InvertedBounds { min: f64, max: f64 },
    /// A design dimension is zero, negative, or NaN.
    NonPositiveDesign { width: f64, height: f64 },
}

impl std::fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedBounds { min, max } => {
                write!(f, "min_scale {min} exceeds max_scale {max}")
            }
            Self::NonPositiveDesign { width, height } => {
                write!(f, "design size {width}x{height} is not positive")
            }
        }
    }
}

/// Conditions reported while computing or configuring a scale.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// The size provider has nothing to measure yet (target not attached).
    #[error("{provider}: no target to measure")]
    MissingTarget { provider: &'static str },
    /// The configuration is contradictory; computation still proceeds.
    #[error("degenerate configuration: {0}")]
    DegenerateConfiguration(Degeneracy),
}

impl ScaleError {
    /// Shorthand for [`ScaleError::MissingTarget`].
    #[must_use]
    pub const fn missing_target(provider: &'static str) -> Self {
        Self::MissingTarget { provider }
    }
}

impl From<Degeneracy> for ScaleError {
    fn from(degeneracy: Degeneracy) -> Self {
        Self::DegenerateConfiguration(degeneracy)
    }
}
