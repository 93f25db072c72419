#![forbid(unsafe_code)]

//! Style descriptors for a committed scale.
//!
//! # Role in fitscale
//! The controller publishes a bare number. `fitscale-style` turns it into
//! the declarations a host writes onto the scaled element: a proportional
//! `transform`, a fixed `transform-origin`, and flex alignment that keeps
//! the shrunken content anchored where the layout expects it.
//!
//! # Presets
//!
//! | Preset | Origin | `align-items` | Viewport fill |
//! |--------|--------|---------------|---------------|
//! | [`StylePreset::Container`] | `top center` | `start` | `100vw` x `100vh` |
//! | [`StylePreset::Element`] | `center top` | `center` | no |
//!
//! Both center horizontally (`justify-content: center`).
//!
//! # Example
//!
//! ```
//! use fitscale_style::StylePreset;
//!
//! let style = StylePreset::Element.style(0.5);
//! assert_eq!(
//!     style.to_css(),
//!     "transform: scale(0.5); transform-origin: center top; display: flex; \
//!      align-items: center; justify-content: center;"
//! );
//! ```

pub mod apply;

use core::fmt;

pub use apply::{StyleApplier, StyleTarget};

/// Anchor point of the scale transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOrigin {
    /// `top center`
    TopCenter,
    /// `center top`
    CenterTop,
}

impl TransformOrigin {
    /// CSS value.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::TopCenter => "top center",
            Self::CenterTop => "center top",
        }
    }
}

/// Flex alignment keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexAlign {
    /// `start`
    Start,
    /// `center`
    Center,
}

impl FlexAlign {
    /// CSS value.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

/// Which flavor of declarations to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePreset {
    /// Full-viewport wrapper; content hangs from the top edge.
    #[default]
    Container,
    /// Style written directly onto the scaled element.
    Element,
}

impl StylePreset {
    /// Build the style for `scale`.
    #[must_use]
    pub const fn style(self, scale: f64) -> ScaleStyle {
        match self {
            Self::Container => ScaleStyle {
                scale,
                origin: TransformOrigin::TopCenter,
                align_items: FlexAlign::Start,
                justify_content: FlexAlign::Center,
                fill_viewport: true,
            },
            Self::Element => ScaleStyle {
                scale,
                origin: TransformOrigin::CenterTop,
                align_items: FlexAlign::Center,
                justify_content: FlexAlign::Center,
                fill_viewport: false,
            },
        }
    }
}

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Declarations for one committed scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStyle {
    pub scale: f64,
    pub origin: TransformOrigin,
    pub align_items: FlexAlign,
    pub justify_content: FlexAlign,
    /// Emit `width: 100vw; height: 100vh`.
    pub fill_viewport: bool,
}

impl ScaleStyle {
    /// The `transform` value, e.g. `scale(0.5)`.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// Declarations in application order.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Vec::with_capacity(7);
        out.push(Declaration::new("transform", self.transform()));
        out.push(Declaration::new("transform-origin", self.origin.as_css()));
        if self.fill_viewport {
            out.push(Declaration::new("width", "100vw"));
            out.push(Declaration::new("height", "100vh"));
        }
        out.push(Declaration::new("display", "flex"));
        out.push(Declaration::new("align-items", self.align_items.as_css()));
        out.push(Declaration::new(
            "justify-content",
            self.justify_content.as_css(),
        ));
        out
    }

    /// Inline CSS text, declarations separated by single spaces.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScaleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{decl}")?;
        }
        Ok(())
    }
}
