//! Presentation defaults for rendered diagrams.

use crate::color::Color;

/// Radius of the filled circle marking each anchor point.
pub const MARKER_RADIUS: f32 = 1.0;

/// Default fill for anchor-point markers.
pub const DEFAULT_POINT_FILL: &str = "#444";

/// Default stroke color for chords.
pub const DEFAULT_CHORD_COLOR: &str = "rgba(72, 26, 132, 0.8)";

/// Default stroke width for chords.
pub const DEFAULT_STROKE_WIDTH: f32 = 0.5;

/// CSS font shorthand applied to every label.
pub const LABEL_FONT: &str = "font: normal 10px sans-serif;";

/// Default fill for label text.
pub const DEFAULT_LABEL_FILL: &str = "#888";

/// Fixed presentation settings for a diagram.
///
/// A `Style` is chosen at diagram construction and stays constant for the
/// diagram's lifetime. The only per-element override is the chord color,
/// which each chord snapshots at connect time.
#[derive(Debug, Clone)]
pub struct Style {
    point_fill: Color,
    label_fill: Color,
    stroke_width: f32,
    background: Option<Color>,
}

impl Style {
    /// Returns the fill color for anchor-point markers.
    pub fn point_fill(&self) -> &Color {
        &self.point_fill
    }

    /// Returns the fill color for label text.
    pub fn label_fill(&self) -> &Color {
        &self.label_fill
    }

    /// Returns the stroke width applied to every chord.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the document background color, if one is configured.
    pub fn background(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    /// Returns a copy with the given marker fill color.
    pub fn with_point_fill(mut self, color: Color) -> Self {
        self.point_fill = color;
        self
    }

    /// Returns a copy with the given label fill color.
    pub fn with_label_fill(mut self, color: Color) -> Self {
        self.label_fill = color;
        self
    }

    /// Returns a copy with the given chord stroke width.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Returns a copy with the given document background color.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            point_fill: Color::new(DEFAULT_POINT_FILL).unwrap(),
            label_fill: Color::new(DEFAULT_LABEL_FILL).unwrap(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            background: None,
        }
    }
}
