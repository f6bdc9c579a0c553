//! Stringart - a circular string art diagram engine.
//!
//! String art diagrams are built from a circle of numbered anchor points
//! connected by straight chords. A [`Diagram`] is constructed
//! interactively: lay out the circle, connect anchors (changing the chord
//! color along the way), then serialize the result to SVG.
//!
//! # Examples
//!
//! ```
//! use stringart::{Color, Diagram};
//!
//! let mut diagram = Diagram::new();
//! diagram.layout(36)?;
//!
//! // A cardioid: connect every anchor to its double.
//! for i in 0..36 {
//!     diagram.connect(i, 2 * i)?;
//! }
//!
//! diagram.set_color(Color::new("crimson")?);
//! diagram.connect(0, 18)?;
//!
//! let svg = diagram.to_svg();
//! assert!(svg.contains("</svg>"));
//! # Ok::<(), stringart::StringArtError>(())
//! ```

pub mod config;
pub mod export;

mod diagram;
mod error;

pub use diagram::{Diagram, LABEL_OFFSET, LAYOUT_RADIUS, select_label_step};
pub use error::StringArtError;

pub use stringart_core::{color, draw, geometry};

pub use stringart_core::color::Color;
