//! dusk.toml handling

use anyhow::{Context, Result};
use dusk_paint::Size;
use dusk_transition::TransitionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file looked up in the working directory
pub const CONFIG_FILE: &str = "dusk.toml";

/// Top-level configuration (dusk.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DuskConfig {
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

/// Size of the simulated window
#[derive(Debug, Deserialize, Serialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    390.0
}

fn default_height() -> f32 {
    844.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl ViewportConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DuskConfig {
    /// Load `path`, or ./dusk.toml when it exists, or the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Path::new(CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: DuskConfig = toml::from_str(content)?;
        config.transition.validate()?;
        if !config.viewport.size().is_usable() {
            anyhow::bail!(
                "viewport must have a positive size, got {}x{}",
                config.viewport.width,
                config.viewport.height
            );
        }
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = DuskConfig::parse("").unwrap();
        assert_eq!(config.transition, TransitionConfig::default());
        assert_eq!(config.viewport.size(), Size::new(390.0, 844.0));
    }

    #[test]
    fn test_partial_tables() {
        let config = DuskConfig::parse(
            r#"
            [transition]
            duration_ms = 300

            [viewport]
            width = 300
            height = 800
            "#,
        )
        .unwrap();
        assert_eq!(config.transition.duration_ms, 300);
        assert_eq!(config.transition.settle_delay_ms, 16);
        assert_eq!(config.viewport.size(), Size::new(300.0, 800.0));
    }

    #[test]
    fn test_rejects_empty_viewport() {
        assert!(DuskConfig::parse("[viewport]\nwidth = 0\n").is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let text = DuskConfig::default().to_toml().unwrap();
        assert_eq!(
            DuskConfig::parse(&text).unwrap().transition,
            TransitionConfig::default()
        );
    }
}
