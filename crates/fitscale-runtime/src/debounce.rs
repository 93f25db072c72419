#![forbid(unsafe_code)]

//! Trailing-debounce timer state machine.
//!
//! # States
//!
//! ```text
//!            trigger                 trigger (restart, new token)
//!   Idle ──────────────▶ Pending ◀──────────────┐
//!    ▲                      │  └────────────────┘
//!    │   deadline reached   │
//!    ├──────────────────────┤  (poll / fire: caller recomputes)
//!    │        cancel        │
//!    └──────────────────────┘  (no recompute)
//! ```
//!
//! The debouncer holds at most one pending deadline. Every trigger bumps a
//! generation counter and returns a fresh [`TimerToken`]; hosts that arm
//! their own one-shot timers hand the token back through
//! [`Debouncer::fire`], and any token other than the current one is inert.
//! That makes a cancel that races an expiring host timer harmless.
//!
//! The debouncer never reads a clock itself. Callers pass `now` in.

use core::time::Duration;

/// Handle for one scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    generation: u64,
}

impl TimerToken {
    /// Generation number; strictly increases with every trigger.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Observable state of a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Nothing scheduled.
    Idle,
    /// A deadline is armed.
    Pending {
        /// When the latest trigger happened.
        scheduled_at: Duration,
        /// When the deferred action becomes due.
        deadline: Duration,
        /// Token of the armed deadline.
        token: TimerToken,
    },
}

/// Trailing debounce over a fixed delay.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    state: DebounceState,
    generation: u64,
}

impl Debouncer {
    /// Create an idle debouncer.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
            generation: 0,
        }
    }

    /// The quiet period.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Current state.
    #[inline]
    pub const fn state(&self) -> DebounceState {
        self.state
    }

    /// Whether a deadline is armed.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// The armed deadline, if any.
    #[inline]
    pub const fn deadline(&self) -> Option<Duration> {
        match self.state {
            DebounceState::Pending { deadline, .. } => Some(deadline),
            DebounceState::Idle => None,
        }
    }

    /// Time left until the armed deadline (zero if overdue).
    pub fn time_until_due(&self, now: Duration) -> Option<Duration> {
        self.deadline().map(|deadline| deadline.saturating_sub(now))
    }

    /// Arm (or re-arm) the deadline `delay` after `now`.
    ///
    /// Any previously armed deadline is discarded and its token goes stale.
    pub fn trigger(&mut self, now: Duration) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken {
            generation: self.generation,
        };
        self.state = DebounceState::Pending {
            scheduled_at: now,
            deadline: now.saturating_add(self.delay),
            token,
        };
        token
    }

    /// Consume the armed deadline if it has been reached.
    ///
    /// Returns `true` exactly once per expired deadline; the debouncer is
    /// idle afterwards and the caller should run the deferred action.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.state {
            DebounceState::Pending { deadline, .. } if now >= deadline => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Consume the armed deadline if `token` is still current.
    ///
    /// Used by hosts driving their own timers. Stale tokens return `false`.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.state {
            DebounceState::Pending { token: armed, .. } if armed == token => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Discard any armed deadline. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = DebounceState::Idle;
        was_pending
    }
}
