#![forbid(unsafe_code)]

//! Runtime: committed-scale state, trailing debounce, and sizing policy.
//!
//! # Role in fitscale
//! `fitscale-runtime` turns the pure engine from `fitscale-core` into a
//! long-lived component. [`UpdateController`] holds the committed scale,
//! reacts to resize notifications, and publishes changes to a
//! [`ScaleSink`].
//!
//! # Primary responsibilities
//! - **Timing**: [`Debouncer`] state machine and [`Clock`] abstraction.
//! - **Sizing**: [`SurfaceSizer`] picks container- or viewport-relative
//!   sizes from a host [`Surface`].
//! - **Lifecycle**: explicit `initialize` / `dispose`.
//! - **Observability**: structured `tracing` events (see [`logging`]).
//!
//! # Example
//!
//! ```
//! use fitscale_core::{ObservedSize, RateLimitPolicy, ScaleConfig};
//! use fitscale_runtime::{ManualClock, UpdateController};
//!
//! let clock = ManualClock::new();
//! let config = ScaleConfig::default().with_rate_limit(RateLimitPolicy::debounce(100));
//! let mut controller = UpdateController::from_config(
//!     &config,
//!     || Some(ObservedSize::new(960.0, 1080.0)),
//!     |scale: f64| println!("scale -> {scale}"),
//!     clock.clone(),
//! );
//!
//! controller.notify_resize();
//! controller.notify_resize();
//! assert_eq!(controller.scale(), 1.0);
//!
//! clock.advance_ms(100);
//! controller.poll();
//! assert_eq!(controller.scale(), 0.5);
//! ```

pub mod clock;
pub mod controller;
pub mod debounce;
pub mod logging;
pub mod provider;
pub mod sizing;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::{
    ControllerStats, INITIAL_SCALE, Lifecycle, RecomputeOutcome, ResizeOutcome, UpdateController,
};
pub use debounce::{DebounceState, Debouncer, TimerToken};
pub use provider::{ScaleSink, SizeProvider};
pub use sizing::{Surface, SurfaceSizer};
