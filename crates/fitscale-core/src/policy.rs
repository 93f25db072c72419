#![forbid(unsafe_code)]

//! Rate-limit policy for resize notifications.

use core::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Default trailing-debounce window.
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Whether resize notifications are coalesced, and over what window.
///
/// A disabled policy or a zero delay means every notification recomputes
/// synchronously. Otherwise notifications are coalesced with a trailing
/// debounce: only the last notification within `delay_ms` of quiescence
/// triggers a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct RateLimitPolicy {
    /// Master switch for debouncing.
    pub enabled: bool,
    /// Quiet period, in milliseconds, before a deferred recompute runs.
    pub delay_ms: u64,
}

impl RateLimitPolicy {
    /// Recompute on every notification.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            enabled: false,
            delay_ms: 0,
        }
    }

    /// Trailing debounce over `delay_ms`.
    #[must_use]
    pub const fn debounce(delay_ms: u64) -> Self {
        Self {
            enabled: true,
            delay_ms,
        }
    }

    /// The effective debounce window, or `None` for immediate recompute.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        if self.enabled && self.delay_ms > 0 {
            Some(Duration::from_millis(self.delay_ms))
        } else {
            None
        }
    }

    /// Whether notifications recompute synchronously.
    #[inline]
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.delay().is_none()
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::debounce(DEFAULT_DELAY_MS)
    }
}
