//! The diagram state holder.
//!
//! [`Diagram`] composes four responsibilities in sequence: the layout
//! engine (anchor coordinates), the label selector (which anchors get
//! numeric labels), the chord registry (user-requested connections with
//! their snapshotted colors), and the render composer (flattening the
//! state into drawable primitives).

use std::f32::consts::{FRAC_PI_2, TAU};

use log::{debug, trace};

use stringart_core::{
    color::Color,
    draw::{Chord, DEFAULT_CHORD_COLOR, Label, Marker, Primitive, Style},
    geometry::Point,
};

use crate::{config::AppConfig, error::StringArtError};

/// Radius of the anchor circle.
pub const LAYOUT_RADIUS: f32 = 120.0;

/// Distance from the anchor circle to the label circle.
pub const LABEL_OFFSET: f32 = 10.0;

/// Decides the spacing, in anchor indices, between visible numeric labels.
///
/// Returns 0 when the layout gets no labels at all. Labels let a human
/// reference anchors by number when connecting them, but labeling every
/// anchor becomes illegible at high point counts. The policy keeps the
/// visible label count at or below 30 while only choosing steps that
/// divide the layout evenly, so the visible subset stays evenly spaced
/// and easy to extrapolate. First match wins:
///
/// | condition              | step |
/// |------------------------|------|
/// | n ≤ 30                 | 1    |
/// | n ≤ 40, n even         | 2    |
/// | n ≤ 60, n % 3 == 0     | 3    |
/// | n ≤ 80, n % 4 == 0     | 4    |
/// | n ≤ 100, n % 5 == 0    | 5    |
/// | otherwise              | 0    |
pub fn select_label_step(n: usize) -> usize {
    if n <= 30 {
        1
    } else if n <= 40 && n % 2 == 0 {
        2
    } else if n <= 60 && n % 3 == 0 {
        3
    } else if n <= 80 && n % 4 == 0 {
        4
    } else if n <= 100 && n % 5 == 0 {
        5
    } else {
        0
    }
}

/// Angle of anchor `i` in an `n`-point layout, in radians.
///
/// Index 0 sits at the top of the circle (90°) and increasing index
/// proceeds clockwise, hence the subtraction. Math convention throughout;
/// the SVG exporter owns the screen-coordinate flip.
fn anchor_angle(i: usize, n: usize) -> f32 {
    FRAC_PI_2 - (i as f32) * TAU / (n as f32)
}

/// A string art diagram under construction.
///
/// A `Diagram` is an explicit caller-owned value: there is no shared
/// global instance. It is built interactively: [`layout`](Self::layout)
/// places anchor points on a circle (resetting chords and labels),
/// [`connect`](Self::connect) records chords between anchors, and
/// [`set_color`](Self::set_color) changes the color applied to subsequent
/// chords. [`primitives`](Self::primitives) and
/// [`to_svg`](Self::to_svg) are pure reads.
///
/// All operations are synchronous and single-threaded; a multi-threaded
/// host must add its own synchronization around the mutable calls.
///
/// # Examples
///
/// ```
/// use stringart::Diagram;
///
/// let mut diagram = Diagram::new();
/// diagram.layout(5)?;
/// diagram.connect(0, 2)?;
/// diagram.connect(2, 4)?;
///
/// let svg = diagram.to_svg();
/// assert!(svg.contains("<svg"));
/// # Ok::<(), stringart::StringArtError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    points: Vec<Point>,
    chords: Vec<Chord>,
    labels: Vec<Label>,
    active_color: Color,
    style: Style,
}

impl Diagram {
    /// Creates an empty diagram with default presentation settings.
    pub fn new() -> Self {
        Self::with_style(Style::default())
    }

    /// Creates an empty diagram with the given presentation settings.
    ///
    /// The style, including the chord stroke width, stays constant for
    /// the diagram's lifetime.
    pub fn with_style(style: Style) -> Self {
        Self {
            points: Vec::new(),
            chords: Vec::new(),
            labels: Vec::new(),
            active_color: Color::new(DEFAULT_CHORD_COLOR).unwrap(),
            style,
        }
    }

    /// Creates an empty diagram styled from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StringArtError::Color`] if the configuration contains an
    /// unparseable color string.
    pub fn from_config(config: &AppConfig) -> Result<Self, StringArtError> {
        let mut diagram = Self::with_style(config.style().to_style()?);
        diagram.active_color = config.style().chord_color()?;
        Ok(diagram)
    }

    /// Places `n` anchor points evenly around a circle of radius 120
    /// centered at the origin, with anchor 0 at the top and increasing
    /// index proceeding clockwise.
    ///
    /// Replaces any previous points and labels wholesale and discards all
    /// recorded chords. The active color is a rendering preference, not
    /// diagram geometry, and survives the reset.
    ///
    /// # Errors
    ///
    /// Returns [`StringArtError::InvalidPointCount`] if `n` is zero; the
    /// diagram is left unchanged.
    pub fn layout(&mut self, n: usize) -> Result<(), StringArtError> {
        if n == 0 {
            return Err(StringArtError::InvalidPointCount(n));
        }

        self.points = (0..n)
            .map(|i| Point::from_polar(LAYOUT_RADIUS, anchor_angle(i, n)))
            .collect();

        let step = select_label_step(n);
        self.labels = if step == 0 {
            Vec::new()
        } else {
            (0..n)
                .step_by(step)
                .map(|i| {
                    Label::new(
                        Point::from_polar(LAYOUT_RADIUS + LABEL_OFFSET, anchor_angle(i, n)),
                        i.to_string(),
                        360.0 - 360.0 * (i as f32) / (n as f32),
                    )
                })
                .collect()
        };

        self.chords.clear();

        debug!(n = n, label_step = step, labels_len = self.labels.len(); "Layout computed");

        Ok(())
    }

    /// Records a chord between anchors `a` and `b`, tagged with the
    /// current active color.
    ///
    /// Indices are taken modulo the point count with a non-negative
    /// result, so negative or out-of-range indices count relative to the
    /// end of the circle. Self-loops are permitted and yield a degenerate
    /// chord. Chords are never deduplicated; insertion order is preserved
    /// and later chords draw on top.
    ///
    /// # Errors
    ///
    /// Returns [`StringArtError::EmptyLayout`] if no layout has
    /// established anchor points yet.
    pub fn connect(&mut self, a: i64, b: i64) -> Result<(), StringArtError> {
        let n = self.points.len();
        if n == 0 {
            return Err(StringArtError::EmptyLayout);
        }

        let a = a.rem_euclid(n as i64) as usize;
        let b = b.rem_euclid(n as i64) as usize;

        trace!(a = a, b = b; "Connecting anchors");

        self.chords.push(Chord::new(
            self.points[a],
            self.points[b],
            self.active_color.clone(),
        ));

        Ok(())
    }

    /// Replaces the active chord color.
    ///
    /// Has no retroactive effect: chords snapshot their color at connect
    /// time.
    pub fn set_color(&mut self, color: Color) {
        self.active_color = color;
    }

    /// Returns the color applied to subsequently connected chords.
    pub fn active_color(&self) -> &Color {
        &self.active_color
    }

    /// Returns the anchor point coordinates, ordered by anchor index.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the recorded chords in insertion order.
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Returns the visible labels, ordered by anchor index.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the diagram's presentation settings.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Flattens the diagram into drawable primitives: all anchor markers,
    /// then all chords in append order, then all labels. Later entries
    /// visually overlay earlier ones.
    ///
    /// Pure read: calling this repeatedly without intervening mutation
    /// yields structurally identical output. An empty diagram yields an
    /// empty list.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(self.points.len() + self.chords.len() + self.labels.len());
        out.extend(self.points.iter().map(|&p| Primitive::Marker(Marker::new(p))));
        out.extend(self.chords.iter().cloned().map(Primitive::Chord));
        out.extend(self.labels.iter().cloned().map(Primitive::Label));
        out
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_layout_zero_points_is_rejected() {
        let mut diagram = Diagram::new();
        diagram.layout(5).unwrap();
        diagram.connect(0, 1).unwrap();

        let err = diagram.layout(0).unwrap_err();
        assert!(matches!(err, StringArtError::InvalidPointCount(0)));

        // State before the failing call is preserved.
        assert_eq!(diagram.points().len(), 5);
        assert_eq!(diagram.chords().len(), 1);
    }

    #[test]
    fn test_layout_places_points_on_circle() {
        let mut diagram = Diagram::new();
        diagram.layout(7).unwrap();

        assert_eq!(diagram.points().len(), 7);
        for p in diagram.points() {
            assert_approx_eq!(f32, p.hypot(), LAYOUT_RADIUS, epsilon = 1e-3);
        }

        // Anchor 0 sits at the top of the circle.
        let top = diagram.points()[0];
        assert_approx_eq!(f32, top.x(), 0.0, epsilon = 1e-3);
        assert_approx_eq!(f32, top.y(), LAYOUT_RADIUS, epsilon = 1e-3);
    }

    #[test]
    fn test_layout_proceeds_clockwise_from_top() {
        let mut diagram = Diagram::new();
        diagram.layout(4).unwrap();

        // Clockwise in math coordinates: top, right, bottom, left.
        let expected = [(0.0, 120.0), (120.0, 0.0), (0.0, -120.0), (-120.0, 0.0)];
        for (p, (x, y)) in diagram.points().iter().zip(expected) {
            assert_approx_eq!(f32, p.x(), x, epsilon = 1e-3);
            assert_approx_eq!(f32, p.y(), y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_select_label_step_policy() {
        assert_eq!(select_label_step(24), 1);
        assert_eq!(select_label_step(30), 1);
        assert_eq!(select_label_step(36), 2);
        assert_eq!(select_label_step(40), 2);
        assert_eq!(select_label_step(57), 3);
        assert_eq!(select_label_step(76), 4);
        assert_eq!(select_label_step(90), 5);
        assert_eq!(select_label_step(101), 0);
        // Odd count just above 30 divides by nothing in range.
        assert_eq!(select_label_step(37), 0);
    }

    #[test]
    fn test_label_counts() {
        let mut diagram = Diagram::new();

        diagram.layout(24).unwrap();
        assert_eq!(diagram.labels().len(), 24);

        diagram.layout(36).unwrap();
        assert_eq!(diagram.labels().len(), 18);

        diagram.layout(90).unwrap();
        assert_eq!(diagram.labels().len(), 18);

        diagram.layout(101).unwrap();
        assert!(diagram.labels().is_empty());
    }

    #[test]
    fn test_labels_keep_original_indices() {
        let mut diagram = Diagram::new();
        diagram.layout(36).unwrap();

        let texts: Vec<&str> = diagram.labels().iter().map(|l| l.text()).collect();
        assert_eq!(texts[0], "0");
        assert_eq!(texts[1], "2");
        assert_eq!(*texts.last().unwrap(), "34");
    }

    #[test]
    fn test_labels_sit_outside_anchor_circle() {
        let mut diagram = Diagram::new();
        diagram.layout(12).unwrap();

        for label in diagram.labels() {
            assert_approx_eq!(
                f32,
                label.position().hypot(),
                LAYOUT_RADIUS + LABEL_OFFSET,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn test_label_rotation_decreases_from_360() {
        let mut diagram = Diagram::new();
        diagram.layout(24).unwrap();

        let rotations: Vec<f32> = diagram.labels().iter().map(|l| l.rotation()).collect();
        assert_approx_eq!(f32, rotations[0], 360.0);
        assert_approx_eq!(f32, rotations[1], 345.0);
        assert_approx_eq!(f32, *rotations.last().unwrap(), 15.0);
    }

    #[test]
    fn test_connect_before_layout_is_rejected() {
        let mut diagram = Diagram::new();
        let err = diagram.connect(0, 1).unwrap_err();
        assert!(matches!(err, StringArtError::EmptyLayout));
        assert!(diagram.chords().is_empty());
    }

    #[test]
    fn test_connect_wraps_out_of_range_indices() {
        let mut diagram = Diagram::new();
        diagram.layout(5).unwrap();
        diagram.connect(-1, 7).unwrap();
        diagram.connect(4, 2).unwrap();

        let chords = diagram.chords();
        assert_eq!(chords[0], chords[1]);
    }

    #[test]
    fn test_connect_self_loop_is_degenerate_chord() {
        let mut diagram = Diagram::new();
        diagram.layout(5).unwrap();
        diagram.connect(3, 3).unwrap();

        let chord = &diagram.chords()[0];
        assert_eq!(chord.from(), chord.to());
    }

    #[test]
    fn test_connect_does_not_deduplicate() {
        let mut diagram = Diagram::new();
        diagram.layout(5).unwrap();
        diagram.connect(0, 2).unwrap();
        diagram.connect(0, 2).unwrap();

        assert_eq!(diagram.chords().len(), 2);
    }

    #[test]
    fn test_set_color_only_affects_later_chords() {
        let mut diagram = Diagram::new();
        diagram.layout(5).unwrap();
        diagram.connect(0, 1).unwrap();
        diagram.set_color(Color::new("red").unwrap());
        diagram.connect(1, 2).unwrap();

        let default_color = Color::new(DEFAULT_CHORD_COLOR).unwrap();
        let red = Color::new("red").unwrap();
        assert_eq!(*diagram.chords()[0].color(), default_color);
        assert_eq!(*diagram.chords()[1].color(), red);
    }

    #[test]
    fn test_layout_reset_discards_chords_but_keeps_color() {
        let mut diagram = Diagram::new();
        diagram.layout(10).unwrap();
        diagram.connect(0, 5).unwrap();
        diagram.set_color(Color::new("teal").unwrap());

        diagram.layout(8).unwrap();

        assert!(diagram.chords().is_empty());
        assert_eq!(diagram.points().len(), 8);
        assert_eq!(*diagram.active_color(), Color::new("teal").unwrap());
    }

    #[test]
    fn test_primitives_order_markers_chords_labels() {
        let mut diagram = Diagram::new();
        diagram.layout(5).unwrap();
        diagram.connect(0, 1).unwrap();
        diagram.connect(1, 2).unwrap();

        let primitives = diagram.primitives();
        assert_eq!(primitives.len(), 5 + 2 + 5);
        assert!(primitives[..5].iter().all(|p| matches!(p, Primitive::Marker(_))));
        assert!(primitives[5..7].iter().all(|p| matches!(p, Primitive::Chord(_))));
        assert!(primitives[7..].iter().all(|p| matches!(p, Primitive::Label(_))));

        // Chords appear in append order.
        let Primitive::Chord(first) = &primitives[5] else {
            panic!("expected chord");
        };
        assert_eq!(first.from(), diagram.points()[0]);
        assert_eq!(first.to(), diagram.points()[1]);
    }

    #[test]
    fn test_primitives_is_idempotent() {
        let mut diagram = Diagram::new();
        diagram.layout(12).unwrap();
        diagram.connect(0, 5).unwrap();

        assert_eq!(diagram.primitives(), diagram.primitives());
    }

    #[test]
    fn test_empty_diagram_has_no_primitives() {
        let diagram = Diagram::new();
        assert!(diagram.primitives().is_empty());
    }
}
