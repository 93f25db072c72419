#![forbid(unsafe_code)]

//! Aggregate configuration for a scale-to-fit instance.
//!
//! [`ScaleConfig`] groups everything fixed at construction time: the design
//! size, the bounds, the rate-limit policy, and which size the instance
//! observes. With the `config` feature it can be loaded from TOML or JSON.
//!
//! ```toml
//! # fitscale.toml
//! sizing = "viewport"
//!
//! [design]
//! width = 1920
//! height = 1080
//!
//! [bounds]
//! min_scale = 0.5
//!
//! [rate_limit]
//! enabled = true
//! delay_ms = 150
//! ```
//!
//! Every field has a default, so partial documents are fine. The defaults
//! are a 1920x1080 design, no bounds, a 100ms trailing debounce, and
//! container sizing.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::bounds::ScaleBounds;
use crate::engine::ScaleEngine;
use crate::geometry::DesignSize;
use crate::policy::RateLimitPolicy;

/// Where the observed size comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum SizingMode {
    /// The host element's own size; zero axes fall back to the viewport.
    #[default]
    Container,
    /// The viewport size, while the host element is attached.
    Viewport,
}

/// Construction-time configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ScaleConfig {
    /// Resolution the UI was authored for.
    pub design: DesignSize,
    /// Optional scale limits.
    pub bounds: ScaleBounds,
    /// Debounce policy for resize notifications.
    pub rate_limit: RateLimitPolicy,
    /// Container- or viewport-relative sizing.
    pub sizing: SizingMode,
}

impl ScaleConfig {
    /// Set the design size.
    #[must_use]
    pub fn with_design(mut self, width: f64, height: f64) -> Self {
        self.design = DesignSize::new(width, height);
        self
    }

    /// Replace the bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: ScaleBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the lower scale limit.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.bounds = self.bounds.with_min(min_scale);
        self
    }

    /// Set the upper scale limit.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.bounds = self.bounds.with_max(max_scale);
        self
    }

    /// Replace the rate-limit policy.
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitPolicy) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Select the sizing mode.
    #[must_use]
    pub fn with_sizing(mut self, sizing: SizingMode) -> Self {
        self.sizing = sizing;
        self
    }

    /// The engine described by this configuration.
    #[must_use]
    pub fn engine(&self) -> ScaleEngine {
        ScaleEngine::with_bounds(self.design, self.bounds)
    }

    /// Check the configuration for degenerate values.
    ///
    /// Returns a list of problems; empty means the configuration is sane.
    /// Degenerate configurations still compute deterministically, so this is
    /// advisory. Use [`validated`](Self::validated) to reject them.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors: Vec<String> = self
            .engine()
            .degeneracies()
            .into_iter()
            .map(|d| d.to_string())
            .collect();

        for (name, value) in [
            ("bounds.min_scale", self.bounds.min_scale),
            ("bounds.max_scale", self.bounds.max_scale),
        ] {
            match value {
                Some(v) if !(v.is_finite() && v >= 0.0) => {
                    errors.push(format!("{name} must be finite and >= 0, got {v}"));
                }
                _ => {}
            }
        }

        errors
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::TomlSer)
    }
}

/// Errors from loading or validating a [`ScaleConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[source] toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config")]
    #[error("TOML serialize error: {0}")]
    TomlSer(#[source] toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),
    /// Validation errors.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_hook_defaults() {
        let config = ScaleConfig::default();
        assert_eq!(config.design, DesignSize::new(1920.0, 1080.0));
        assert_eq!(config.bounds, ScaleBounds::none());
        assert_eq!(config.rate_limit, RateLimitPolicy::debounce(100));
        assert_eq!(config.sizing, SizingMode::Container);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let config = ScaleConfig::default()
            .with_design(1280.0, 720.0)
            .with_min_scale(0.5)
            .with_max_scale(2.0)
            .with_rate_limit(RateLimitPolicy::immediate())
            .with_sizing(SizingMode::Viewport);
        assert_eq!(config.design, DesignSize::new(1280.0, 720.0));
        assert_eq!(config.bounds, ScaleBounds::new(0.5, 2.0));
        assert!(config.rate_limit.is_immediate());
        assert_eq!(config.sizing, SizingMode::Viewport);
        assert_eq!(config.engine().design(), config.design);
    }

    #[test]
    fn validate_reports_inverted_bounds_and_bad_design() {
        let config = ScaleConfig::default()
            .with_design(0.0, 1080.0)
            .with_bounds(ScaleBounds::new(0.8, 0.5));
        let errors = config.validate();
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("design size")));
        assert!(errors.iter().any(|e| e.contains("exceeds max_scale")));
    }

    #[test]
    fn validate_reports_negative_and_nan_bounds() {
        let config = ScaleConfig::default().with_bounds(ScaleBounds {
            min_scale: Some(-1.0),
            max_scale: Some(f64::NAN),
        });
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.starts_with("bounds.min_scale")));
        assert!(errors.iter().any(|e| e.starts_with("bounds.max_scale")));
    }

    #[test]
    fn validated_rejects_degenerate() {
        assert!(ScaleConfig::default().validated().is_ok());
        let err = ScaleConfig::default()
            .with_bounds(ScaleBounds::new(2.0, 1.0))
            .validated()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref v) if v.len() == 1));
        assert!(err.to_string().starts_with("validation errors:"));
    }

    #[cfg(feature = "config")]
    mod loading {
        use super::*;
        use std::io::Write;

        #[test]
        fn partial_toml_uses_defaults() {
            let config = ScaleConfig::from_toml_str(
                r#"
                sizing = "viewport"

                [bounds]
                min_scale = 0.5
                "#,
            )
            .unwrap();
            assert_eq!(config.sizing, SizingMode::Viewport);
            assert_eq!(config.bounds.min_scale, Some(0.5));
            assert_eq!(config.bounds.max_scale, None);
            assert_eq!(config.design, DesignSize::FULL_HD);
            assert_eq!(config.rate_limit, RateLimitPolicy::default());
        }

        #[test]
        fn json_round_trips_through_file() {
            let json = r#"{
                "design": { "width": 1280.0, "height": 720.0 },
                "rate_limit": { "enabled": false, "delay_ms": 0 }
            }"#;
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(json.as_bytes()).unwrap();

            let config = ScaleConfig::from_json_file(file.path()).unwrap();
            assert_eq!(config.design, DesignSize::new(1280.0, 720.0));
            assert!(config.rate_limit.is_immediate());
            assert_eq!(config.sizing, SizingMode::Container);
        }

        #[test]
        fn toml_file_round_trip() {
            let original = ScaleConfig::default()
                .with_design(2560.0, 1440.0)
                .with_max_scale(1.5);
            let text = original.to_toml_string().unwrap();
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(text.as_bytes()).unwrap();

            assert_eq!(ScaleConfig::from_toml_file(file.path()).unwrap(), original);
        }

        #[test]
        fn malformed_inputs_are_typed_errors() {
            assert!(matches!(
                ScaleConfig::from_toml_str("sizing = 3"),
                Err(ConfigError::Toml(_))
            ));
            assert!(matches!(
                ScaleConfig::from_json_str("{"),
                Err(ConfigError::Json(_))
            ));
            assert!(matches!(
                ScaleConfig::from_json_file("/nonexistent/fitscale.json"),
                Err(ConfigError::Io(_))
            ));
        }
    }
}
