#![forbid(unsafe_code)]

//! Monotonic clocks.
//!
//! The controller never calls `Instant::now()` directly; all time flows
//! through [`Clock`]. Native and browser hosts use [`MonotonicClock`]
//! (`web_time` maps to `performance.now()` on wasm). Tests and
//! deterministic hosts use [`ManualClock`] and advance it explicitly.

use core::cell::Cell;
use core::time::Duration;
use std::rc::Rc;

use web_time::Instant;

/// Monotonic clock abstraction.
pub trait Clock {
    /// Elapsed time since an unspecified epoch, monotonically increasing.
    fn now_mono(&self) -> Duration;
}

/// Wall-clock-free monotonic time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_mono(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Host-controlled clock.
///
/// Cloning yields a handle to the **same** time source, so a host can keep
/// one handle and hand another to the controller.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set current monotonic time.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get().saturating_add(dt));
    }

    /// Advance by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now_mono(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_handles_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        assert_eq!(other.now_mono(), Duration::ZERO);

        clock.advance_ms(40);
        assert_eq!(other.now_mono(), Duration::from_millis(40));

        other.set(Duration::from_secs(2));
        assert_eq!(clock.now_mono(), Duration::from_secs(2));
    }

    #[test]
    fn manual_clock_saturates() {
        let clock = ManualClock::new();
        clock.set(Duration::MAX);
        clock.advance_ms(1);
        assert_eq!(clock.now_mono(), Duration::MAX);
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now_mono();
        let b = clock.now_mono();
        assert!(b >= a);
    }
}
