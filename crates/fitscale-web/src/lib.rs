#![forbid(unsafe_code)]

//! `fitscale-web` embeds the scale controller in a browser-style host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes viewport sizes and
//!   element measurements; nothing here touches a DOM.
//! - **Deterministic time**: the host advances a monotonic clock explicitly,
//!   typically from `requestAnimationFrame` or a timer callback.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The host mirrors its element into a [`HostSurface`], writes styles through
//! a [`StyleTarget`](fitscale_style::StyleTarget), and drives a
//! [`WebScaleSession`].

#[cfg(feature = "host-messages")]
pub mod host_message;
pub mod session;

use std::cell::RefCell;
use std::rc::Rc;

use fitscale_core::ObservedSize;
use fitscale_runtime::Surface;

/// Deterministic monotonic clock controlled by the host.
///
/// Clones share one time source, so the session and the host loop observe
/// the same instant.
pub use fitscale_runtime::ManualClock as DeterministicClock;

pub use session::WebScaleSession;

#[derive(Debug, Default)]
struct SurfaceState {
    target: Option<ObservedSize>,
    viewport: ObservedSize,
}

/// Host-owned mirror of the scaled element and the window.
///
/// Clones are handles onto the same state; the host keeps one and the
/// controller's sizer keeps another.
#[derive(Debug, Clone, Default)]
pub struct HostSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl HostSurface {
    /// Create a detached surface with the given viewport.
    #[must_use]
    pub fn new(viewport: ObservedSize) -> Self {
        let surface = Self::default();
        surface.set_viewport(viewport);
        surface
    }

    /// Update the window inner size.
    pub fn set_viewport(&self, viewport: ObservedSize) {
        self.state.borrow_mut().viewport = viewport;
    }

    /// Bind the scaled element with its current layout size.
    pub fn attach(&self, size: ObservedSize) {
        self.state.borrow_mut().target = Some(size);
    }

    /// Update the element's layout size. No effect while detached.
    pub fn set_target_size(&self, size: ObservedSize) {
        if let Some(target) = self.state.borrow_mut().target.as_mut() {
            *target = size;
        }
    }

    /// Unbind the element.
    pub fn detach(&self) {
        self.state.borrow_mut().target = None;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state.borrow().target.is_some()
    }
}

impl Surface for HostSurface {
    fn target_size(&self) -> Option<ObservedSize> {
        self.state.borrow().target
    }

    fn viewport_size(&self) -> ObservedSize {
        self.state.borrow().viewport
    }
}
