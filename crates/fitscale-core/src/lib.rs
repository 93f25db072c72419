#![forbid(unsafe_code)]

//! Core: design/observed sizes, the shortest-edge scale engine, and policy.
//!
//! # Role in fitscale
//! `fitscale-core` is the pure computation layer. It owns the data model
//! (design size, observed size, bounds, rate-limit policy), the
//! [`ScaleEngine`], the error taxonomy, and the aggregate [`ScaleConfig`].
//! Nothing here reads a clock, schedules work, or talks to a host.
//!
//! # How it fits in the system
//! `fitscale-runtime` wraps the engine in a stateful `UpdateController` that
//! decides when to recompute and when to commit. `fitscale-style` turns a
//! committed scale into transform declarations. Keeping the arithmetic here
//! means every layer above agrees on one definition of "fit".
//!
//! # Example
//!
//! ```
//! use fitscale_core::{DesignSize, ObservedSize, ScaleBounds, compute_scale};
//!
//! let design = DesignSize::new(1920.0, 1080.0);
//! let observed = ObservedSize::new(960.0, 1080.0);
//!
//! assert_eq!(compute_scale(design, observed, ScaleBounds::none()), 0.5);
//! assert_eq!(compute_scale(design, observed, ScaleBounds::none().with_min(0.6)), 0.6);
//! ```

pub mod bounds;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod policy;

pub use bounds::ScaleBounds;
pub use config::{ConfigError, ScaleConfig, SizingMode};
pub use engine::{ScaleEngine, axis_ratios, compute_scale};
pub use error::{Degeneracy, ScaleError};
pub use geometry::{DesignSize, ObservedSize};
pub use policy::RateLimitPolicy;
