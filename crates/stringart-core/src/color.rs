//! Color handling with CSS color string support.

use std::str::FromStr;

use color::DynamicColor;
use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid color '{input}': {message}")]
pub struct ColorParseError {
    /// The rejected input string.
    pub input: String,
    /// Parser message describing why the input was rejected.
    pub message: String,
}

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Accepts any CSS color syntax: named colors (`"red"`), hex
/// (`"#444"`), and functional notation (`"rgba(72, 26, 132, 0.8)"`).
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parse a CSS color string into a `Color`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the string is not a valid CSS color.
    pub fn new(color_str: &str) -> Result<Self, ColorParseError> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(ColorParseError {
                input: color_str.to_string(),
                message: err.to_string(),
            }),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}
