#![forbid(unsafe_code)]

//! A mounted scale controller driven by a browser host.
//!
//! The host calls [`WebScaleSession::mount`] once the element exists,
//! forwards window `resize` events to [`WebScaleSession::resize`], advances
//! time from its frame or timer callback with [`WebScaleSession::advance`],
//! and calls [`WebScaleSession::unmount`] on teardown.

use core::time::Duration;

use fitscale_core::{ObservedSize, ScaleConfig};
use fitscale_runtime::{
    ControllerStats, RecomputeOutcome, ResizeOutcome, SurfaceSizer, UpdateController,
};
use fitscale_style::{ScaleStyle, StyleApplier, StylePreset, StyleTarget};

use crate::{DeterministicClock, HostSurface};

/// Controller type a session drives.
pub type SessionController<T> =
    UpdateController<SurfaceSizer<HostSurface>, StyleApplier<T>, DeterministicClock>;

/// Host-driven scale session.
#[derive(Debug)]
pub struct WebScaleSession<T> {
    controller: SessionController<T>,
    surface: HostSurface,
    clock: DeterministicClock,
}

impl<T: StyleTarget> WebScaleSession<T> {
    /// Create an unmounted session.
    #[must_use]
    pub fn new(config: &ScaleConfig, viewport: ObservedSize, target: T, preset: StylePreset) -> Self {
        let surface = HostSurface::new(viewport);
        let clock = DeterministicClock::new();
        let controller = UpdateController::for_surface(
            config,
            surface.clone(),
            StyleApplier::new(target, preset),
            clock.clone(),
        );
        Self {
            controller,
            surface,
            clock,
        }
    }

    /// Attach the element and establish the scale.
    ///
    /// The container preset writes its layout styles immediately, at the
    /// committed scale; the element preset writes only on commit. Mounting
    /// again re-attaches and recomputes. Returns `None` after
    /// [`unmount`](Self::unmount).
    pub fn mount(&mut self, element: ObservedSize) -> Option<RecomputeOutcome> {
        if self.controller.is_disposed() {
            return None;
        }
        self.surface.attach(element);
        if self.preset() == StylePreset::Container {
            let scale = self.controller.scale();
            self.controller.sink_mut().apply(scale);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "fitscale.web",
            width = element.width,
            height = element.height,
            "session mounted"
        );
        self.controller.initialize()
    }

    /// Window resized to `width` x `height`.
    pub fn resize(&mut self, width: f64, height: f64) -> ResizeOutcome {
        self.surface.set_viewport(ObservedSize::new(width, height));
        self.controller.notify_resize()
    }

    /// The element's layout size changed.
    pub fn resize_element(&mut self, size: ObservedSize) -> ResizeOutcome {
        self.surface.set_target_size(size);
        self.controller.notify_resize()
    }

    /// Advance host time by `dt` and run a recompute that has come due.
    pub fn advance(&mut self, dt: Duration) -> Option<RecomputeOutcome> {
        self.clock.advance(dt);
        self.controller.poll()
    }

    /// Set host time to `now` and run a recompute that has come due.
    pub fn advance_to(&mut self, now: Duration) -> Option<RecomputeOutcome> {
        self.clock.set(now);
        self.controller.poll()
    }

    /// Cancel pending work, detach the element, and make the session inert.
    ///
    /// Returns whether a pending recompute was cancelled.
    pub fn unmount(&mut self) -> bool {
        let cancelled = self.controller.dispose();
        self.surface.detach();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "fitscale.web", cancelled, "session unmounted");
        cancelled
    }
}

impl<T> WebScaleSession<T> {
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.controller.scale()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.controller.version()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_attached() && !self.controller.is_disposed()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }

    /// When the pending recompute comes due, on the session clock.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.controller.next_deadline()
    }

    #[must_use]
    pub fn stats(&self) -> ControllerStats {
        self.controller.stats()
    }

    #[must_use]
    pub fn preset(&self) -> StylePreset {
        self.controller.sink().preset()
    }

    /// Last style written to the target.
    #[must_use]
    pub fn current_style(&self) -> Option<&ScaleStyle> {
        self.controller.sink().current()
    }

    #[must_use]
    pub fn style_target(&self) -> &T {
        self.controller.sink().target()
    }

    #[must_use]
    pub fn surface(&self) -> &HostSurface {
        &self.surface
    }

    #[must_use]
    pub fn clock(&self) -> &DeterministicClock {
        &self.clock
    }

    #[must_use]
    pub fn controller(&self) -> &SessionController<T> {
        &self.controller
    }
}
