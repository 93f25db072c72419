#![forbid(unsafe_code)]

//! Writing committed styles onto a host element.

use std::collections::BTreeMap;

use fitscale_runtime::{INITIAL_SCALE, ScaleSink};

use crate::{ScaleStyle, StylePreset};

/// Something that accepts inline style properties.
///
/// A DOM adapter forwards to `style.setProperty`; tests record into a map.
pub trait StyleTarget {
    fn set_property(&mut self, property: &str, value: &str);
}

impl<F> StyleTarget for F
where
    F: FnMut(&str, &str),
{
    fn set_property(&mut self, property: &str, value: &str) {
        self(property, value);
    }
}

/// Latest value per property; later writes replace earlier ones.
impl StyleTarget for BTreeMap<String, String> {
    fn set_property(&mut self, property: &str, value: &str) {
        self.insert(property.to_owned(), value.to_owned());
    }
}

/// [`ScaleSink`] that renders each committed scale with a preset and writes
/// it to a [`StyleTarget`].
#[derive(Debug)]
pub struct StyleApplier<T> {
    target: T,
    preset: StylePreset,
    current: Option<ScaleStyle>,
    applied: u64,
}

impl<T> StyleApplier<T> {
    #[must_use]
    pub const fn new(target: T, preset: StylePreset) -> Self {
        Self {
            target,
            preset,
            current: None,
            applied: 0,
        }
    }

    #[must_use]
    pub const fn preset(&self) -> StylePreset {
        self.preset
    }

    /// Last style written, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&ScaleStyle> {
        self.current.as_ref()
    }

    /// Number of times a style has been written.
    #[must_use]
    pub const fn applied(&self) -> u64 {
        self.applied
    }

    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

impl<T: StyleTarget> StyleApplier<T> {
    /// Write the style for the controller's initial scale.
    ///
    /// The controller never commits a value equal to the initial one, so a
    /// host that wants the layout styles present before the first change
    /// calls this once at mount.
    pub fn apply_initial(&mut self) {
        self.apply(INITIAL_SCALE);
    }

    /// Render `scale` and write every declaration to the target.
    pub fn apply(&mut self, scale: f64) {
        let style = self.preset.style(scale);
        for decl in style.declarations() {
            self.target.set_property(decl.property, &decl.value);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "fitscale.style",
            scale,
            preset = ?self.preset,
            "style applied"
        );
        self.current = Some(style);
        self.applied += 1;
    }
}

impl<T: StyleTarget> ScaleSink for StyleApplier<T> {
    fn on_scale_committed(&mut self, scale: f64) {
        self.apply(scale);
    }
}
