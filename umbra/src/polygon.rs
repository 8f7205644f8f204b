//! Convex polygons with a declared winding.
//!
//! The shadow caster only understands counter-clockwise outlines. [`Polygon`]
//! carries that invariant in its type, so clockwise data has to pass through
//! [`Polygon::from_clockwise`] or [`Polygon::with_winding`] before it can be
//! cast.
//!
//! Winding is named as it appears on screen. Canvas space has y growing
//! downward, so the rectangle outline top-left, bottom-left, bottom-right,
//! top-right is counter-clockwise.
//!
//! Convexity is never checked. Handing a concave or mis-wound outline to the
//! caster silently produces the wrong shadow.

use crate::geometry::Point;

/// Rotational direction of a polygon outline as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Classifies an outline by the sign of its shoelace area.
    ///
    /// Returns `None` for outlines without area (fewer than three points,
    /// collinear points, or non-finite coordinates).
    pub fn of(points: &[Point]) -> Option<Winding> {
        let twice_area: f32 = edges(points).map(|(a, b)| a.perp_dot(b)).sum();
        if twice_area < 0.0 {
            Some(Winding::CounterClockwise)
        } else if twice_area > 0.0 {
            Some(Winding::Clockwise)
        } else {
            None
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Winding {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

/// A convex outline whose points run counter-clockwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Wraps points the caller asserts are counter-clockwise.
    pub fn counter_clockwise(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Builds a polygon from a clockwise outline.
    ///
    /// The points are copied in reverse order; `points` itself is left as is.
    pub fn from_clockwise(points: &[Point]) -> Self {
        Self {
            points: points.iter().rev().copied().collect(),
        }
    }

    /// Builds a polygon from an outline of known winding.
    pub fn with_winding(points: impl Into<Vec<Point>>, winding: Winding) -> Self {
        let mut points = points.into();
        if winding == Winding::Clockwise {
            points.reverse();
        }
        Self { points }
    }

    /// Outline of an axis-aligned rectangle.
    ///
    /// Corners are listed top-left, bottom-left, bottom-right, top-right.
    /// A negative `width` or `height` mirrors the outline and therefore
    /// flips its winding.
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            points: vec![
                Point::new(x, y),
                Point::new(x, y + height),
                Point::new(x + width, y + height),
                Point::new(x + width, y),
            ],
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the closed outline's edges.
    ///
    /// The closing edge (last point, first point) comes first, followed by
    /// every consecutive pair in order.
    pub fn edges(&self) -> Edges<'_> {
        edges(&self.points)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

fn edges(points: &[Point]) -> Edges<'_> {
    Edges { points, index: 0 }
}

/// Iterator over the edges of a closed outline. See [`Polygon::edges`].
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    points: &'a [Point],
    index: usize,
}

impl Iterator for Edges<'_> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let b = *self.points.get(self.index)?;
        let a = if self.index == 0 {
            self.points[self.points.len() - 1]
        } else {
            self.points[self.index - 1]
        };
        self.index += 1;
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        Polygon::from_rect(10.0, 10.0, 10.0, 10.0).into_points()
    }

    #[test]
    fn rect_corner_order() {
        assert_eq!(
            square(),
            vec![
                Point::new(10.0, 10.0),
                Point::new(10.0, 20.0),
                Point::new(20.0, 20.0),
                Point::new(20.0, 10.0),
            ]
        );
    }

    #[test]
    fn edges_start_with_closing_edge() {
        let polygon = Polygon::counter_clockwise(square());
        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], (Point::new(20.0, 10.0), Point::new(10.0, 10.0)));
        assert_eq!(edges[1], (Point::new(10.0, 10.0), Point::new(10.0, 20.0)));
        assert_eq!(edges[3], (Point::new(20.0, 20.0), Point::new(20.0, 10.0)));
    }

    #[test]
    fn empty_polygon_has_no_edges() {
        assert_eq!(Polygon::default().edges().count(), 0);
    }

    #[test]
    fn single_point_yields_zero_length_edge() {
        let point = Point::new(3.0, 4.0);
        let polygon = Polygon::counter_clockwise(vec![point]);
        assert_eq!(polygon.edges().collect::<Vec<_>>(), vec![(point, point)]);
    }

    #[test]
    fn rect_is_counter_clockwise_on_screen() {
        assert_eq!(Winding::of(&square()), Some(Winding::CounterClockwise));
        let mut reversed = square();
        reversed.reverse();
        assert_eq!(Winding::of(&reversed), Some(Winding::Clockwise));
    }

    #[test]
    fn negative_size_flips_winding() {
        let mirrored = Polygon::from_rect(20.0, 10.0, -10.0, 10.0);
        assert_eq!(Winding::of(mirrored.points()), Some(Winding::Clockwise));
    }

    #[test]
    fn degenerate_outline_has_no_winding() {
        let line = [Point::ZERO, Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        assert_eq!(Winding::of(&line), None);
        assert_eq!(Winding::of(&[]), None);
    }

    #[test]
    fn from_clockwise_leaves_input_untouched() {
        let mut clockwise = square();
        clockwise.reverse();
        let before = clockwise.clone();

        let polygon = Polygon::from_clockwise(&clockwise);

        assert_eq!(clockwise, before);
        assert_eq!(polygon.points(), square().as_slice());
    }

    #[test]
    fn with_winding_normalizes() {
        let mut clockwise = square();
        clockwise.reverse();
        assert_eq!(
            Polygon::with_winding(clockwise, Winding::Clockwise),
            Polygon::counter_clockwise(square())
        );
        assert_eq!(
            Winding::CounterClockwise.reversed(),
            Winding::Clockwise
        );
    }
}
