//! Stringart Core Types and Definitions
//!
//! This crate provides the foundational types for the stringart diagram
//! engine. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable primitives and their SVG rendering ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
