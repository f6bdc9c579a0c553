//! Drawable primitives for string art diagrams.
//!
//! A diagram flattens into an ordered list of [`Primitive`] values: anchor
//! markers, chords, and labels. Each variant carries only the fields it
//! needs and is consumed by a single exhaustive rendering function,
//! [`Primitive::to_svg`]. Primitives are transient value objects: they are
//! rebuilt from diagram state on every draw request and never retained
//! across two requests.

mod primitive;
mod style;
mod transform;

pub use primitive::{Chord, Label, Marker, Primitive};
pub use style::{
    DEFAULT_CHORD_COLOR, DEFAULT_LABEL_FILL, DEFAULT_POINT_FILL, DEFAULT_STROKE_WIDTH, LABEL_FONT,
    MARKER_RADIUS, Style,
};
pub use transform::Transform;

use log::debug;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Renders a slice of primitives to SVG nodes, preserving order.
///
/// Order is significant: later nodes visually overlay earlier ones.
pub fn render_all(primitives: &[Primitive], style: &Style) -> Vec<SvgNode> {
    debug!(primitives_len = primitives.len(); "Rendering primitives");

    primitives.iter().map(|p| p.to_svg(style)).collect()
}
