#![forbid(unsafe_code)]

//! Container-relative vs viewport-relative sizing.
//!
//! Both modes require the host element to be attached: scaling content that
//! is not on screen is meaningless, so a detached element reports
//! [`ScaleError::MissingTarget`] and the controller skips the computation.
//!
//! | Mode | Observed size |
//! |------|---------------|
//! | [`SizingMode::Container`] | element size, each zero axis replaced by the viewport's |
//! | [`SizingMode::Viewport`]  | viewport size |

use fitscale_core::{ObservedSize, ScaleError, SizingMode};

use crate::provider::SizeProvider;

/// The host a scaled element lives in.
pub trait Surface {
    /// Size of the element being scaled, or `None` if it is not attached.
    fn target_size(&self) -> Option<ObservedSize>;

    /// Size of the viewport the element is displayed in.
    fn viewport_size(&self) -> ObservedSize;
}

impl<T: Surface + ?Sized> Surface for &T {
    fn target_size(&self) -> Option<ObservedSize> {
        (**self).target_size()
    }

    fn viewport_size(&self) -> ObservedSize {
        (**self).viewport_size()
    }
}

/// A [`SizeProvider`] reading a [`Surface`] according to a [`SizingMode`].
#[derive(Debug, Clone)]
pub struct SurfaceSizer<T> {
    surface: T,
    mode: SizingMode,
}

impl<T: Surface> SurfaceSizer<T> {
    /// Create a sizer.
    #[must_use]
    pub const fn new(surface: T, mode: SizingMode) -> Self {
        Self { surface, mode }
    }

    /// Container-relative sizing.
    #[must_use]
    pub const fn container(surface: T) -> Self {
        Self::new(surface, SizingMode::Container)
    }

    /// Viewport-relative sizing.
    #[must_use]
    pub const fn viewport(surface: T) -> Self {
        Self::new(surface, SizingMode::Viewport)
    }

    /// The sizing mode.
    pub const fn mode(&self) -> SizingMode {
        self.mode
    }

    /// The wrapped surface.
    pub const fn surface(&self) -> &T {
        &self.surface
    }
}

impl<T: Surface> SizeProvider for SurfaceSizer<T> {
    fn observe(&mut self) -> Result<ObservedSize, ScaleError> {
        let Some(target) = self.surface.target_size() else {
            return Err(ScaleError::missing_target(mode_label(self.mode)));
        };
        Ok(match self.mode {
            SizingMode::Container if target.is_empty() => {
                target.or_axes(self.surface.viewport_size())
            }
            SizingMode::Container => target,
            SizingMode::Viewport => self.surface.viewport_size(),
        })
    }
}

fn mode_label(mode: SizingMode) -> &'static str {
    match mode {
        SizingMode::Container => "container sizing",
        SizingMode::Viewport => "viewport sizing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSurface {
        target: Option<ObservedSize>,
        viewport: ObservedSize,
    }

    const VIEWPORT: ObservedSize = ObservedSize::new(1366.0, 768.0);

    #[test]
    fn container_uses_element_size() {
        let surface = FixedSurface {
            target: Some(ObservedSize::new(800.0, 600.0)),
            viewport: VIEWPORT,
        };
        let mut sizer = SurfaceSizer::container(&surface);
        assert_eq!(sizer.observe(), Ok(ObservedSize::new(800.0, 600.0)));
    }

    #[test]
    fn container_falls_back_per_axis() {
        let surface = FixedSurface {
            target: Some(ObservedSize::new(800.0, 0.0)),
            viewport: VIEWPORT,
        };
        let mut sizer = SurfaceSizer::container(&surface);
        assert_eq!(sizer.observe(), Ok(ObservedSize::new(800.0, 768.0)));
    }

    #[test]
    fn container_unlaid_out_element_reads_viewport() {
        let surface = FixedSurface {
            target: Some(ObservedSize::ZERO),
            viewport: VIEWPORT,
        };
        let mut sizer = SurfaceSizer::container(&surface);
        assert_eq!(sizer.observe(), Ok(VIEWPORT));
    }

    #[test]
    fn viewport_ignores_element_size() {
        let surface = FixedSurface {
            target: Some(ObservedSize::new(10.0, 10.0)),
            viewport: VIEWPORT,
        };
        let mut sizer = SurfaceSizer::viewport(&surface);
        assert_eq!(sizer.mode(), SizingMode::Viewport);
        assert_eq!(sizer.observe(), Ok(VIEWPORT));
    }

    #[test]
    fn detached_element_is_missing_target_in_both_modes() {
        let surface = FixedSurface {
            target: None,
            viewport: VIEWPORT,
        };
        for mode in [SizingMode::Container, SizingMode::Viewport] {
            let mut sizer = SurfaceSizer::new(&surface, mode);
            assert!(matches!(
                sizer.observe(),
                Err(ScaleError::MissingTarget { .. })
            ));
        }
    }

    impl Surface for FixedSurface {
        fn target_size(&self) -> Option<ObservedSize> {
            self.target
        }

        fn viewport_size(&self) -> ObservedSize {
            self.viewport
        }
    }
}
