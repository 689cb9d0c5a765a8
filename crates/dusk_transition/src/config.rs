//! Transition configuration

use dusk_animation::{Easing, Timing};
use dusk_paint::ObjectFit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Length of the reveal animation
pub const DEFAULT_DURATION_MS: u64 = 650;

/// Wait between switching the theme and capturing the new frame.
///
/// Capture reads the last completed render, not pending layout or paint, so
/// the view needs this long to redraw under the new theme. Shorter values
/// risk capturing the old theme twice.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 16;

/// Upper bound for a single capture
pub const DEFAULT_CAPTURE_TIMEOUT_MS: u64 = 2_000;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid transition config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid transition config: {0}")]
    Invalid(String),
}

/// Tunables for theme transitions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Reveal animation length in milliseconds
    pub duration_ms: u64,
    /// See [`DEFAULT_SETTLE_DELAY_MS`]
    pub settle_delay_ms: u64,
    /// Per-capture timeout in milliseconds
    pub capture_timeout_ms: u64,
    /// Curve of the reveal radius
    pub easing: Easing,
    /// How the new frame fills the reveal circle
    pub fit: ObjectFit,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            capture_timeout_ms: DEFAULT_CAPTURE_TIMEOUT_MS,
            easing: Easing::default(),
            fit: ObjectFit::Cover,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: TransitionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::Invalid("duration_ms must be greater than 0".into()));
        }
        if self.settle_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "settle_delay_ms must be greater than 0".into(),
            ));
        }
        if self.capture_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "capture_timeout_ms must be greater than 0".into(),
            ));
        }
        if !self.easing.is_monotonic() {
            return Err(ConfigError::Invalid(format!(
                "easing {:?} overshoots; control points must stay within [0, 1]",
                self.easing
            )));
        }
        Ok(())
    }

    pub fn timing(&self) -> Timing {
        Timing::from_ms(self.duration_ms, self.easing)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn capture_timeout(&self) -> Duration {
        Duration::from_millis(self.capture_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.duration(), Duration::from_millis(650));
        assert_eq!(config.settle_delay(), Duration::from_millis(16));
        assert_eq!(config.easing, Easing::EaseInOutQuad);
        assert_eq!(config.fit, ObjectFit::Cover);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TransitionConfig::from_toml_str("duration_ms = 400\neasing = \"linear\"").unwrap();
        assert_eq!(config.duration_ms, 400);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.settle_delay_ms, DEFAULT_SETTLE_DELAY_MS);
    }

    #[test]
    fn test_cubic_bezier_from_toml() {
        let config =
            TransitionConfig::from_toml_str("easing = { cubic-bezier = [0.4, 0.0, 0.2, 1.0] }").unwrap();
        assert_eq!(config.easing, Easing::CubicBezier(0.4, 0.0, 0.2, 1.0));
    }

    #[test]
    fn test_zero_settle_delay_rejected() {
        let err = TransitionConfig::from_toml_str("settle_delay_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn test_overshooting_easing_rejected() {
        let err = TransitionConfig::from_toml_str("easing = { cubic-bezier = [0.3, -0.6, 0.7, 1.6] }")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn test_unknown_fit_is_parse_error() {
        let err = TransitionConfig::from_toml_str("fit = \"tile\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TransitionConfig::load("/nonexistent/dusk-transition.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
