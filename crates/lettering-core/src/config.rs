//! Widget and text style configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// When a bound widget regenerates its renderable after a text change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Create the renderable once; later text changes reuse it.
    #[default]
    Sticky,
    /// Recreate the renderable whenever the text differs from the one it was made from.
    OnChange,
}

/// Visual style used by graphics contexts to shape text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font family name.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Text color as RGBA.
    pub color: [u8; 4],
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Noto Sans".to_string(),
            font_size: 20.0,
            line_height: 1.2,
            color: [60, 60, 60, 255],
        }
    }
}

impl TextStyle {
    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    /// Height of one line in pixels.
    pub fn line_px(&self) -> f64 {
        f64::from(self.font_size) * f64::from(self.line_height)
    }
}

/// Widget configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Renderable refresh policy.
    pub refresh: RefreshPolicy,
    /// Text style handed to graphics contexts.
    pub style: TextStyle,
}

impl WidgetConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded widget config from {:?}", path.as_ref());
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.refresh, RefreshPolicy::Sticky);
    }

    #[test]
    fn test_partial_json() {
        let config =
            WidgetConfig::from_json(r#"{"refresh": "on_change", "style": {"font_size": 32.0}}"#)
                .unwrap();
        assert_eq!(config.refresh, RefreshPolicy::OnChange);
        assert_eq!(config.style.font_size, 32.0);
        assert_eq!(config.style.font_family, "Noto Sans");
    }

    #[test]
    fn test_invalid_json() {
        let result = WidgetConfig::from_json(r#"{"refresh": "sometimes"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"style": {{"font_family": "Roboto"}}}}"#).unwrap();

        let config = WidgetConfig::load(file.path()).unwrap();
        assert_eq!(config.style.font_family, "Roboto");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WidgetConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = WidgetConfig {
            refresh: RefreshPolicy::OnChange,
            style: TextStyle::default().with_font_size(12.0),
        };
        let json = config.to_json().unwrap();
        assert_eq!(WidgetConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_line_px() {
        let style = TextStyle::default().with_font_size(10.0);
        assert!((style.line_px() - 12.0).abs() < 1e-6);
    }
}
