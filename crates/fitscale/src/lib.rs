#![forbid(unsafe_code)]

//! fitscale public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude. Most callers need only:
//!
//! ```
//! use fitscale::prelude::*;
//!
//! let clock = ManualClock::new();
//! let config = ScaleConfig::default().with_rate_limit(RateLimitPolicy::immediate());
//! let mut controller = UpdateController::from_config(
//!     &config,
//!     || Some(ObservedSize::new(1280.0, 720.0)),
//!     |_scale: f64| {},
//!     clock,
//! );
//! controller.initialize();
//! assert_eq!(controller.scale(), 1280.0 / 1920.0);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use fitscale_core::{
    ConfigError, DesignSize, ObservedSize, RateLimitPolicy, ScaleBounds, ScaleConfig, ScaleEngine,
    ScaleError, SizingMode, compute_scale,
};

// --- Runtime re-exports ----------------------------------------------------

pub use fitscale_runtime::{
    Clock, ControllerStats, ManualClock, MonotonicClock, RecomputeOutcome, ResizeOutcome,
    ScaleSink, SizeProvider, Surface, SurfaceSizer, TimerToken, UpdateController,
};

// --- Style re-exports ------------------------------------------------------

#[cfg(feature = "style")]
pub use fitscale_style::{ScaleStyle, StyleApplier, StylePreset, StyleTarget};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use fitscale_web::{DeterministicClock, HostSurface, WebScaleSession};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for fitscale callers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Measuring or configuring a scale failed.
    #[error(transparent)]
    Scale(#[from] ScaleError),
    /// Loading or validating configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Standard result type for fitscale APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Clock, DesignSize, Error, ManualClock, MonotonicClock, ObservedSize, RateLimitPolicy,
        Result, ScaleBounds, ScaleConfig, ScaleSink, SizeProvider, SizingMode, Surface,
        UpdateController,
    };

    #[cfg(feature = "style")]
    pub use crate::{StyleApplier, StylePreset, StyleTarget};

    #[cfg(feature = "web")]
    pub use crate::{HostSurface, WebScaleSession};

    pub use crate::{core, runtime};

    #[cfg(feature = "style")]
    pub use crate::style;

    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use fitscale_core as core;
pub use fitscale_runtime as runtime;
#[cfg(feature = "style")]
pub use fitscale_style as style;
#[cfg(feature = "web")]
pub use fitscale_web as web;
