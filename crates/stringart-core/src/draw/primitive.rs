//! The primitive sum type and its SVG rendering.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{
        LABEL_FONT, MARKER_RADIUS, Style, SvgNode,
        transform::Transform,
    },
    geometry::Point,
};

/// A small filled circle marking an anchor point on the layout circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    center: Point,
}

impl Marker {
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    /// Returns the marker's center position.
    pub fn center(&self) -> Point {
        self.center
    }
}

/// A straight line segment between two anchor points.
///
/// The color is snapshotted when the chord is recorded; changing the
/// diagram's active color later has no effect on existing chords.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    from: Point,
    to: Point,
    color: Color,
}

impl Chord {
    pub fn new(from: Point, to: Point, color: Color) -> Self {
        Self { from, to, color }
    }

    /// Returns the chord's first endpoint.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Returns the chord's second endpoint.
    pub fn to(&self) -> Point {
        self.to
    }

    /// Returns the stroke color snapshotted at connect time.
    pub fn color(&self) -> &Color {
        &self.color
    }
}

/// A numeric text label placed just outside the layout circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    position: Point,
    text: String,
    rotation: f32,
}

impl Label {
    pub fn new(position: Point, text: impl Into<String>, rotation: f32) -> Self {
        Self {
            position,
            text: text.into(),
            rotation,
        }
    }

    /// Returns the label's anchor position on the label circle.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the label rotation in degrees (counter-clockwise sweep).
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Builds the label's placement transform.
    ///
    /// Ordered composition: the glyph is drawn at the origin, flipped
    /// vertically to counter the exporter's root flip, rotated so its
    /// baseline is tangent to the circle, then translated to the label
    /// position.
    pub fn placement(&self) -> Transform {
        Transform::identity()
            .then_scale(1.0, -1.0)
            .then_rotate_degrees(self.rotation)
            .then_translate(self.position.x(), self.position.y())
    }
}

/// A single drawable element of a diagram.
///
/// Variants are rendered in list order by the exporter, so the composer's
/// ordering (markers, then chords, then labels) determines z-order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// An anchor-point marker.
    Marker(Marker),
    /// A chord between two anchor points.
    Chord(Chord),
    /// A numeric anchor label.
    Label(Label),
}

impl Primitive {
    /// Renders this primitive to an SVG node.
    pub fn to_svg(&self, style: &Style) -> SvgNode {
        match self {
            Primitive::Marker(marker) => {
                let center = marker.center();
                Box::new(
                    svg_element::Circle::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("r", MARKER_RADIUS)
                        .set("fill", style.point_fill()),
                )
            }
            Primitive::Chord(chord) => Box::new(
                svg_element::Line::new()
                    .set("x1", chord.from().x())
                    .set("y1", chord.from().y())
                    .set("x2", chord.to().x())
                    .set("y2", chord.to().y())
                    .set("stroke", chord.color())
                    .set("stroke-width", style.stroke_width()),
            ),
            Primitive::Label(label) => Box::new(
                svg_element::Text::new(label.text())
                    .set("x", 0)
                    .set("y", 0)
                    .set("style", LABEL_FONT)
                    .set("text-anchor", "middle")
                    .set("fill", style.label_fill())
                    .set("stroke", "none")
                    .set("transform", label.placement().to_svg_value()),
            ),
        }
    }
}
