//! Vector helpers shared by the polygon wrapper and the shadow caster.
//!
//! All points live in canvas space: the origin is the top-left corner, x grows
//! to the right and y grows downward.

use glam::Vec2;

/// A position in canvas space.
pub type Point = Vec2;

/// Vector pointing from `from` to `to`.
#[inline]
pub fn vector_between(from: Point, to: Point) -> Vec2 {
    to - from
}

/// Normal of the edge `a -> b`, `(b.y - a.y, -(b.x - a.x))`.
///
/// For a counter-clockwise polygon in canvas space this is the normal the
/// silhouette test is built around: a negative dot product with the vector
/// from the light to `a` means the light sits behind the edge.
#[inline]
pub fn edge_normal(a: Point, b: Point) -> Vec2 {
    let edge = vector_between(a, b);
    Vec2::new(edge.y, -edge.x)
}

/// Returns `true` if the edge `a -> b` of a counter-clockwise polygon casts a
/// shadow away from `light`.
///
/// Edges seen exactly edge-on (dot product of zero) count as lit.
#[inline]
pub fn is_silhouette_edge(light: Point, a: Point, b: Point) -> bool {
    edge_normal(a, b).dot(vector_between(light, a)) < 0.0
}

/// Pushes `point` away from `light` by `scale` times their separation.
#[inline]
pub fn extrude(light: Point, point: Point, scale: f32) -> Point {
    point + scale * vector_between(light, point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_of_horizontal_edge() {
        let normal = edge_normal(Vec2::new(20.0, 10.0), Vec2::new(10.0, 10.0));
        assert_eq!(normal, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn edge_on_light_is_lit() {
        // The light lies on the line through the left edge of the square.
        let light = Vec2::new(10.0, 0.0);
        assert!(!is_silhouette_edge(
            light,
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 20.0)
        ));
    }

    #[test]
    fn extrude_scales_from_light() {
        let extruded = extrude(Vec2::ZERO, Vec2::new(10.0, 20.0), 3.0);
        assert_eq!(extruded, Vec2::new(40.0, 80.0));
    }

    #[test]
    fn extrude_from_the_light_itself_is_degenerate() {
        let light = Vec2::new(5.0, 5.0);
        assert_eq!(extrude(light, light, 100.0), light);
    }
}
