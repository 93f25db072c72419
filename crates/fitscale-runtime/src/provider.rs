#![forbid(unsafe_code)]

//! Collaborator seams: where sizes come from and where commits go.

use fitscale_core::{ObservedSize, ScaleError};

/// Reads the current observed size.
///
/// Called once per recompute; implementations must read fresh values rather
/// than cache them. Return [`ScaleError::MissingTarget`] when there is
/// nothing to measure yet.
pub trait SizeProvider {
    /// Sample the current size.
    fn observe(&mut self) -> Result<ObservedSize, ScaleError>;
}

/// Closures returning `None` report a missing target.
impl<F> SizeProvider for F
where
    F: FnMut() -> Option<ObservedSize>,
{
    fn observe(&mut self) -> Result<ObservedSize, ScaleError> {
        self().ok_or(ScaleError::missing_target("size provider"))
    }
}

/// Receives each newly committed scale.
///
/// Only invoked when the committed value actually changes.
pub trait ScaleSink {
    /// A new scale was committed.
    fn on_scale_committed(&mut self, scale: f64);
}

impl<F> ScaleSink for F
where
    F: FnMut(f64),
{
    fn on_scale_committed(&mut self, scale: f64) {
        self(scale);
    }
}
