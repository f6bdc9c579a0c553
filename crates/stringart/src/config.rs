//! Configuration types for string art rendering.
//!
//! This module provides configuration structures controlling how diagrams
//! are styled. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources (the CLI loads them from TOML).
//!
//! # Example
//!
//! ```
//! # use stringart::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().to_style().is_ok());
//! ```

use serde::Deserialize;

use stringart_core::{
    color::{Color, ColorParseError},
    draw::{DEFAULT_CHORD_COLOR, Style},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Every field is optional; unset fields fall back to the presentation
/// defaults in [`stringart_core::draw`]. Colors are kept as strings and
/// parsed on access, so a configuration file with an invalid color
/// reports the error when the diagram is built, not when the file is
/// read.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Stroke width for chords.
    #[serde(default)]
    stroke_width: Option<f32>,

    /// Default stroke color for chords, as a CSS color string.
    #[serde(default)]
    chord_color: Option<String>,

    /// Fill for anchor-point markers, as a CSS color string.
    #[serde(default)]
    point_fill: Option<String>,

    /// Fill for label text, as a CSS color string.
    #[serde(default)]
    label_fill: Option<String>,

    /// Document background color, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Builds a [`Style`] from this configuration, applying defaults for
    /// unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if any configured color string cannot
    /// be parsed.
    pub fn to_style(&self) -> Result<Style, ColorParseError> {
        let mut style = Style::default();

        if let Some(width) = self.stroke_width {
            style = style.with_stroke_width(width);
        }
        if let Some(fill) = &self.point_fill {
            style = style.with_point_fill(Color::new(fill)?);
        }
        if let Some(fill) = &self.label_fill {
            style = style.with_label_fill(Color::new(fill)?);
        }
        if let Some(background) = &self.background_color {
            style = style.with_background(Some(Color::new(background)?));
        }

        Ok(style)
    }

    /// Returns the parsed default chord [`Color`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the configured color string cannot
    /// be parsed.
    pub fn chord_color(&self) -> Result<Color, ColorParseError> {
        match &self.chord_color {
            Some(color) => Color::new(color),
            None => Ok(Color::new(DEFAULT_CHORD_COLOR).unwrap()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_default_style() {
        let config = AppConfig::default();
        let style = config.style().to_style().unwrap();
        assert_eq!(style.stroke_width(), stringart_core::draw::DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_invalid_color_is_reported_on_access() {
        let config = StyleConfig {
            point_fill: Some("definitely-not-a-color".to_string()),
            ..StyleConfig::default()
        };
        assert!(config.to_style().is_err());
    }

    #[test]
    fn test_configured_chord_color() {
        let config = StyleConfig {
            chord_color: Some("red".to_string()),
            ..StyleConfig::default()
        };
        assert_eq!(config.chord_color().unwrap(), Color::new("red").unwrap());
    }
}
