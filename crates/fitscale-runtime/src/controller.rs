#![forbid(unsafe_code)]

//! Stateful scale controller with trailing-debounce recompute.
//!
//! # Design
//!
//! [`UpdateController`] owns the committed scale (initially `1.0`) and
//! decides when to recompute it:
//!
//! - [`notify_resize`](UpdateController::notify_resize) either recomputes
//!   synchronously (immediate policy) or (re)arms the debouncer.
//! - [`poll`](UpdateController::poll) runs the deferred recompute once the
//!   clock passes the deadline; [`fire`](UpdateController::fire) does the
//!   same for hosts arming their own timers with a [`TimerToken`].
//! - A recompute samples the size provider, runs the [`ScaleEngine`], and
//!   commits only when the result differs from the committed value. Each
//!   commit bumps [`version`](UpdateController::version) and notifies the
//!   [`ScaleSink`].
//!
//! # Invariants
//!
//! 1. At most one deferred recompute is pending.
//! 2. The sink is called exactly once per commit, never for unchanged values.
//! 3. After [`dispose`](UpdateController::dispose) nothing recomputes and the
//!    sink is never called again, including for tokens handed out earlier.
//! 4. A missing target leaves the committed scale untouched.
//!
//! # Threading
//!
//! Single-threaded. The host drives every call from its own event loop;
//! there is no background timer.

use core::fmt;
use core::time::Duration;

use fitscale_core::{RateLimitPolicy, ScaleConfig, ScaleEngine, ScaleError};
use tracing::{debug, debug_span, trace, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::debounce::{Debouncer, TimerToken};
use crate::logging::CONTROLLER_TARGET;
use crate::provider::{ScaleSink, SizeProvider};
use crate::sizing::{Surface, SurfaceSizer};

/// Committed scale before the first commit.
pub const INITIAL_SCALE: f64 = 1.0;

/// Result of one recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum RecomputeOutcome {
    /// A new scale was committed and published.
    Committed { previous: f64, scale: f64 },
    /// The computed scale equals the committed one; nothing published.
    Unchanged { scale: f64 },
    /// The size provider could not report a size.
    Skipped(ScaleError),
}

impl RecomputeOutcome {
    /// The newly committed scale, if this outcome committed one.
    #[must_use]
    pub fn committed(&self) -> Option<f64> {
        match self {
            Self::Committed { scale, .. } => Some(*scale),
            _ => None,
        }
    }
}

/// Result of one resize notification.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeOutcome {
    /// Immediate policy: the recompute already ran.
    Recomputed(RecomputeOutcome),
    /// Debounced: a recompute is armed for `deadline`.
    Scheduled { token: TimerToken, deadline: Duration },
    /// The controller was disposed; the notification was ignored.
    Disposed,
}

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not yet initialized.
    Created,
    /// [`initialize`](UpdateController::initialize) has run.
    Active,
    /// [`dispose`](UpdateController::dispose) has run; terminal.
    Disposed,
}

/// Per-instance counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerStats {
    /// Resize notifications accepted.
    pub notifications: u64,
    /// Recomputes run (immediate, deferred, or initial).
    pub recomputes: u64,
    /// Recomputes that committed a new value.
    pub commits: u64,
    /// Recomputes skipped for a missing target.
    pub skipped: u64,
    /// Pending recomputes replaced by a later notification.
    pub superseded: u64,
}

/// Owns the committed scale and decides when to recompute it.
pub struct UpdateController<P, S, C = MonotonicClock> {
    engine: ScaleEngine,
    policy: RateLimitPolicy,
    debouncer: Option<Debouncer>,
    provider: P,
    sink: S,
    clock: C,
    scale: f64,
    version: u64,
    lifecycle: Lifecycle,
    stats: ControllerStats,
}

impl<P, S, C> fmt::Debug for UpdateController<P, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateController")
            .field("engine", &self.engine)
            .field("policy", &self.policy)
            .field("debouncer", &self.debouncer)
            .field("scale", &self.scale)
            .field("version", &self.version)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

impl<P, S, C> UpdateController<P, S, C>
where
    P: SizeProvider,
    S: ScaleSink,
    C: Clock,
{
    /// Create a controller. Nothing is computed until
    /// [`initialize`](Self::initialize) or the first notification.
    pub fn new(engine: ScaleEngine, policy: RateLimitPolicy, provider: P, sink: S, clock: C) -> Self {
        for degeneracy in engine.degeneracies() {
            warn!(
                target: CONTROLLER_TARGET,
                degeneracy = %ScaleError::from(degeneracy),
                "degenerate scale configuration"
            );
        }
        Self {
            engine,
            policy,
            debouncer: policy.delay().map(Debouncer::new),
            provider,
            sink,
            clock,
            scale: INITIAL_SCALE,
            version: 0,
            lifecycle: Lifecycle::Created,
            stats: ControllerStats::default(),
        }
    }

    /// Create a controller from a [`ScaleConfig`].
    ///
    /// `config.sizing` is not consulted; the provider decides what it
    /// measures. See [`UpdateController::for_surface`].
    pub fn from_config(config: &ScaleConfig, provider: P, sink: S, clock: C) -> Self {
        Self::new(config.engine(), config.rate_limit, provider, sink, clock)
    }

    /// Handle one resize notification.
    pub fn notify_resize(&mut self) -> ResizeOutcome {
        if self.lifecycle == Lifecycle::Disposed {
            return ResizeOutcome::Disposed;
        }
        self.stats.notifications += 1;

        let now = self.clock.now_mono();
        let Some(debouncer) = self.debouncer.as_mut() else {
            return ResizeOutcome::Recomputed(self.recompute());
        };
        if debouncer.is_pending() {
            self.stats.superseded += 1;
        }
        let token = debouncer.trigger(now);
        let deadline = now.saturating_add(debouncer.delay());
        trace!(
            target: CONTROLLER_TARGET,
            generation = token.generation(),
            deadline_ms = deadline.as_millis() as u64,
            "recompute scheduled"
        );
        ResizeOutcome::Scheduled { token, deadline }
    }

    /// Run the deferred recompute if its deadline has been reached.
    pub fn poll(&mut self) -> Option<RecomputeOutcome> {
        if self.lifecycle == Lifecycle::Disposed {
            return None;
        }
        let now = self.clock.now_mono();
        let due = self
            .debouncer
            .as_mut()
            .is_some_and(|debouncer| debouncer.poll(now));
        due.then(|| self.recompute())
    }

    /// Run the deferred recompute armed under `token`.
    ///
    /// Returns `None` for stale tokens (superseded or cancelled) and after
    /// disposal.
    pub fn fire(&mut self, token: TimerToken) -> Option<RecomputeOutcome> {
        if self.lifecycle == Lifecycle::Disposed {
            return None;
        }
        let current = self
            .debouncer
            .as_mut()
            .is_some_and(|debouncer| debouncer.fire(token));
        if !current {
            trace!(
                target: CONTROLLER_TARGET,
                generation = token.generation(),
                "stale timer ignored"
            );
        }
        current.then(|| self.recompute())
    }

    /// Establish the scale once, without debouncing.
    ///
    /// Returns `None` if the controller was already disposed.
    pub fn initialize(&mut self) -> Option<RecomputeOutcome> {
        if self.lifecycle == Lifecycle::Disposed {
            return None;
        }
        self.lifecycle = Lifecycle::Active;
        Some(self.recompute())
    }

    /// Cancel any pending recompute and make the controller inert.
    ///
    /// Returns whether a pending recompute was cancelled. Idempotent.
    pub fn dispose(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Disposed {
            return false;
        }
        self.lifecycle = Lifecycle::Disposed;
        let cancelled = self
            .debouncer
            .as_mut()
            .is_some_and(Debouncer::cancel);
        debug!(
            target: CONTROLLER_TARGET,
            cancelled,
            scale = self.scale,
            "controller disposed"
        );
        cancelled
    }

    fn recompute(&mut self) -> RecomputeOutcome {
        let _span = debug_span!("fitscale.recompute", version = self.version).entered();
        self.stats.recomputes += 1;

        let observed = match self.provider.observe() {
            Ok(observed) => observed,
            Err(err) => {
                self.stats.skipped += 1;
                warn!(
                    target: CONTROLLER_TARGET,
                    error = %err,
                    scale = self.scale,
                    "recompute skipped"
                );
                return RecomputeOutcome::Skipped(err);
            }
        };

        let candidate = self.engine.compute(observed);
        if same_scale(candidate, self.scale) {
            trace!(
                target: CONTROLLER_TARGET,
                scale = candidate,
                "scale unchanged"
            );
            return RecomputeOutcome::Unchanged { scale: candidate };
        }

        let previous = self.scale;
        self.scale = candidate;
        self.version += 1;
        self.stats.commits += 1;
        debug!(
            target: CONTROLLER_TARGET,
            previous,
            scale = candidate,
            version = self.version,
            width = observed.width,
            height = observed.height,
            "scale committed"
        );
        self.sink.on_scale_committed(candidate);
        RecomputeOutcome::Committed {
            previous,
            scale: candidate,
        }
    }
}

impl<P, S, C> UpdateController<P, S, C> {
    /// The committed scale.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of commits so far.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Lifecycle stage.
    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }

    /// Whether a deferred recompute is armed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.debouncer.as_ref().is_some_and(Debouncer::is_pending)
    }

    /// When the armed recompute becomes due, for hosts arming native timers.
    #[inline]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debouncer.as_ref().and_then(Debouncer::deadline)
    }

    /// Counters.
    #[inline]
    pub fn stats(&self) -> ControllerStats {
        self.stats
    }

    /// The engine.
    #[inline]
    pub fn engine(&self) -> &ScaleEngine {
        &self.engine
    }

    /// The rate-limit policy.
    #[inline]
    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// The size provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The size provider, mutably.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// The commit sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The commit sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<T, S, C> UpdateController<SurfaceSizer<T>, S, C>
where
    T: Surface,
    S: ScaleSink,
    C: Clock,
{
    /// Create a controller measuring `surface` with `config.sizing`.
    pub fn for_surface(config: &ScaleConfig, surface: T, sink: S, clock: C) -> Self {
        Self::from_config(config, SurfaceSizer::new(surface, config.sizing), sink, clock)
    }
}

/// Exact equality; NaN is treated as equal to NaN so a degenerate design does
/// not commit on every notification.
fn same_scale(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
