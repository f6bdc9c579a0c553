//! Error types for stringart operations.

use std::io;

use thiserror::Error;

use stringart_core::color::ColorParseError;

/// The main error type for stringart operations.
///
/// The first two variants are programmer-error preconditions: they are
/// checked at the start of the offending call and leave the diagram
/// untouched. No retries apply.
#[derive(Debug, Error)]
pub enum StringArtError {
    /// `layout` was called with a point count of zero. A zero-point circle
    /// has no valid anchors for later connect calls.
    #[error("invalid point count {0}: a layout needs at least one anchor point")]
    InvalidPointCount(usize),

    /// `connect` was called before any layout established anchor points.
    #[error("no layout: call layout() before connecting anchor points")]
    EmptyLayout,

    /// A configured color string failed to parse.
    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
