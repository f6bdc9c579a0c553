//! 2D affine transform composition.
//!
//! A [`Transform`] is a 2x3 affine matrix in the SVG `matrix(a b c d e f)`
//! convention: `x' = a·x + c·y + e`, `y' = b·x + d·y + f`. Transforms are
//! built as an explicit ordered composition: each `then_*` call applies its
//! operation *after* everything composed so far, so
//!
//! ```
//! # use stringart_core::draw::Transform;
//! let t = Transform::identity()
//!     .then_scale(1.0, -1.0)
//!     .then_rotate_degrees(90.0)
//!     .then_translate(10.0, 20.0);
//! # let _ = t.to_svg_value();
//! ```
//!
//! first flips a shape vertically, then rotates it, then moves it.

/// A 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Composes `op` after `self`: the returned transform applies `self`
    /// first, then `op`.
    fn then(self, op: Transform) -> Self {
        Self {
            a: op.a * self.a + op.c * self.b,
            b: op.b * self.a + op.d * self.b,
            c: op.a * self.c + op.c * self.d,
            d: op.b * self.c + op.d * self.d,
            e: op.a * self.e + op.c * self.f + op.e,
            f: op.b * self.e + op.d * self.f + op.f,
        }
    }

    /// Applies a translation after the current transform.
    pub fn then_translate(self, tx: f32, ty: f32) -> Self {
        self.then(Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: tx,
            f: ty,
        })
    }

    /// Applies a counter-clockwise rotation (degrees, math convention)
    /// after the current transform.
    pub fn then_rotate_degrees(self, degrees: f32) -> Self {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        self.then(Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        })
    }

    /// Applies a scale after the current transform. Negative factors flip.
    pub fn then_scale(self, sx: f32, sy: f32) -> Self {
        self.then(Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        })
    }

    /// Transforms a coordinate pair.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Renders the matrix as an SVG `transform` attribute value.
    pub fn to_svg_value(&self) -> String {
        format!(
            "matrix({} {} {} {} {} {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
