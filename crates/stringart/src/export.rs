//! Diagram export backends.
//!
//! Currently SVG only, matching the shape library's serialization format.

pub mod svg;
