//! Rendering and notation settings for diagram figures.
//!
//! [`DiagramSettings`] is the configuration object handed to every figure
//! at construction. It is opaque to the layout algorithm: figures only
//! read it when resolving label text into rendered extents or SVG
//! attributes. All types implement [`serde::Deserialize`] so hosts can
//! load them from their project files.

use serde::Deserialize;

use crate::{color::Color, error::CartoucheError};

fn default_font_family() -> String {
    String::from("sans-serif")
}

fn default_font_size() -> u16 {
    12
}

/// Top-level settings combining notation and style sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagramSettings {
    /// Notation (label text) settings section.
    #[serde(default)]
    notation: NotationSettings,

    /// Style settings section.
    #[serde(default)]
    style: StyleSettings,
}

impl DiagramSettings {
    /// Creates new settings from the given sections.
    pub fn new(notation: NotationSettings, style: StyleSettings) -> Self {
        Self { notation, style }
    }

    /// Returns the notation settings.
    pub fn notation(&self) -> &NotationSettings {
        &self.notation
    }

    /// Returns the style settings.
    pub fn style(&self) -> &StyleSettings {
        &self.style
    }
}

/// Controls how model-element text is rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct NotationSettings {
    /// Font family used for labels (e.g. "Arial", "monospace").
    #[serde(default = "default_font_family")]
    font_family: String,

    /// Font size in points.
    #[serde(default = "default_font_size")]
    font_size: u16,
}

impl NotationSettings {
    /// Returns the label font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the label font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }
}

impl Default for NotationSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

/// Visual styling defaults for figures.
///
/// Fields that are not set fall back to the colors the diagram passes at
/// figure construction time.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleSettings {
    /// Default line [`Color`] for borders, as a color string.
    #[serde(default)]
    line_color: Option<String>,

    /// Default fill [`Color`] for borders, as a color string.
    #[serde(default)]
    fill_color: Option<String>,
}

impl StyleSettings {
    /// Returns the parsed default line [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn line_color(&self) -> Result<Option<Color>, CartoucheError> {
        self.line_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| CartoucheError::InvalidSettings(err.to_string()))
    }

    /// Returns the parsed default fill [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn fill_color(&self) -> Result<Option<Color>, CartoucheError> {
        self.fill_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| CartoucheError::InvalidSettings(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = DiagramSettings::default();
        assert_eq!(settings.notation().font_family(), "sans-serif");
        assert_eq!(settings.notation().font_size(), 12);
        assert!(settings.style().line_color().unwrap().is_none());
        assert!(settings.style().fill_color().unwrap().is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: DiagramSettings =
            serde_json::from_str(r#"{"notation": {"font_size": 18}}"#).unwrap();
        assert_eq!(settings.notation().font_size(), 18);
        // Unset fields fall back to defaults
        assert_eq!(settings.notation().font_family(), "sans-serif");
    }

    #[test]
    fn test_deserialize_style_colors() {
        let settings: DiagramSettings =
            serde_json::from_str(
                r##"{"style": {"line_color": "navy", "fill_color": "#ffffee"}}"##,
            )
            .unwrap();
        assert!(settings.style().line_color().unwrap().is_some());
        assert!(settings.style().fill_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_style_color_is_reported() {
        let settings: DiagramSettings =
            serde_json::from_str(r#"{"style": {"line_color": "no-such-color"}}"#).unwrap();
        let err = settings.style().line_color().unwrap_err();
        assert!(matches!(err, CartoucheError::InvalidSettings(_)));
    }
}
