/// A position in the diagram's coordinate system.
///
/// The diagram uses the standard math convention: the origin at the circle
/// center, x increasing to the right, y increasing upward, positive angles
/// counter-clockwise. The SVG exporter applies the flip to screen
/// coordinates; nothing in this crate does.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point at the given radius and angle (radians) from the origin
    pub fn from_polar(radius: f32, angle: f32) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// A point built from polar coordinates lies at the given radius
        /// from the origin.
        #[test]
        fn from_polar_preserves_radius(
            radius in 0.0f32..1000.0,
            angle in -10.0f32..10.0,
        ) {
            let p = Point::from_polar(radius, angle);
            prop_assert!(
                approx_eq!(f32, p.hypot(), radius, epsilon = 0.01),
                "distance {} != radius {radius}",
                p.hypot()
            );
        }
    }
}
