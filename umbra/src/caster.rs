//! Hard shadows from a point light.
//!
//! A convex shape lit by a single point light throws its umbra behind the
//! edges that face away from the light. [`ShadowCaster`] finds those
//! silhouette edges and, for each one, fills a quadrilateral that starts at
//! the edge and runs away from the light. Rather than intersecting the rays
//! with the canvas bounds, the far side of the quadrilateral is pushed out by
//! a large scale factor so that it lands well past anything visible.
//!
//! # Example
//!
//! ```
//! use umbra::{CasterConfig, Point, RecordingSurface, ShadowCaster};
//!
//! let caster = ShadowCaster::new(CasterConfig::from_surface_width(640.0));
//! let mut surface = RecordingSurface::new();
//!
//! caster.cast_from_rectangle(&mut surface, Point::ZERO, 10.0, 10.0, 10.0, 10.0, None);
//!
//! assert_eq!(surface.fill_count(), 2);
//! ```

use tracing::trace;

use crate::{
    color::{Color, SHADOW_FILL},
    geometry::{Point, extrude, is_silhouette_edge},
    polygon::Polygon,
    surface::PathSurface,
};

/// Configuration for a [`ShadowCaster`].
///
/// # Examples
///
/// ```
/// use umbra::CasterConfig;
///
/// // Shadows reach one full canvas width past each corner.
/// let config = CasterConfig::from_surface_width(1280.0);
/// assert_eq!(config.default_scale, 1280.0);
///
/// // Shorter shadows are cheaper to rasterize on small canvases.
/// let config = CasterConfig {
///     default_scale: 8.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CasterConfig {
    /// Extrusion factor used when a call does not pass its own scale.
    ///
    /// Each far corner sits at `corner + scale * (corner - light)`. The value
    /// has to be large enough for the shadow's end to fall outside the canvas;
    /// the surface width is a safe choice for lights on or near the canvas.
    pub default_scale: f32,
}

impl CasterConfig {
    /// Uses the full surface width as the default scale.
    pub fn from_surface_width(width: f32) -> Self {
        Self {
            default_scale: width,
        }
    }
}

/// One silhouette edge extruded away from the light.
///
/// Corners are in drawing order: `a`, `a_far`, `b_far`, `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowPatch {
    pub a: Point,
    pub a_far: Point,
    pub b_far: Point,
    pub b: Point,
}

impl ShadowPatch {
    /// Extrudes the edge `a -> b` away from `light`.
    pub fn extrude(light: Point, a: Point, b: Point, scale: f32) -> Self {
        Self {
            a,
            a_far: extrude(light, a, scale),
            b_far: extrude(light, b, scale),
            b,
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        [self.a, self.a_far, self.b_far, self.b]
    }

    /// Traces the patch as one closed path and fills it with `color`.
    pub fn draw<S: PathSurface + ?Sized>(&self, surface: &mut S, color: Color) {
        surface.begin_path();
        surface.move_to(self.a);
        surface.line_to(self.a_far);
        surface.line_to(self.b_far);
        surface.line_to(self.b);
        surface.close_path();
        surface.set_fill_color(color);
        surface.fill();
    }

    /// The patch outline as a closed lyon path.
    pub fn to_lyon_path(&self) -> lyon_path::Path {
        let mut builder = lyon_path::Path::builder().with_svg();
        builder.move_to(lyon_geom::point(self.a.x, self.a.y));
        for corner in [self.a_far, self.b_far, self.b] {
            builder.line_to(lyon_geom::point(corner.x, corner.y));
        }
        builder.close();
        builder.build()
    }
}

/// Edges of `polygon` that face away from `light`, in outline order.
pub fn silhouette_edges(
    light: Point,
    polygon: &Polygon,
) -> impl Iterator<Item = (Point, Point)> {
    polygon
        .edges()
        .filter(move |&(a, b)| is_silhouette_edge(light, a, b))
}

/// Casts shadows of convex shapes onto a [`PathSurface`].
///
/// The caster holds nothing but its configuration; every call is independent
/// of the ones before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCaster {
    config: CasterConfig,
}

impl ShadowCaster {
    pub fn new(config: CasterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CasterConfig {
        &self.config
    }

    /// Resolves a per-call scale. `None`, zero and NaN fall back to the
    /// configured default.
    pub fn resolve_scale(&self, scale: Option<f32>) -> f32 {
        match scale {
            Some(scale) if scale != 0.0 && !scale.is_nan() => scale,
            _ => self.config.default_scale,
        }
    }

    /// Shadow patches `polygon` throws from a light at `light`, without
    /// drawing them.
    pub fn shadow_patches(
        &self,
        light: Point,
        polygon: &Polygon,
        scale: Option<f32>,
    ) -> impl Iterator<Item = ShadowPatch> {
        let scale = self.resolve_scale(scale);
        silhouette_edges(light, polygon)
            .map(move |(a, b)| ShadowPatch::extrude(light, a, b, scale))
    }

    /// Draws the shadow of the convex, counter-clockwise `polygon` lit from
    /// `light`.
    ///
    /// One filled quadrilateral is drawn per silhouette edge, in outline order
    /// starting with the closing edge. A shape with no edge facing away from
    /// the light draws nothing.
    #[tracing::instrument(
        level = "trace",
        skip(self, surface, polygon),
        fields(vertices = polygon.len())
    )]
    pub fn cast<S: PathSurface + ?Sized>(
        &self,
        surface: &mut S,
        light: Point,
        polygon: &Polygon,
        scale: Option<f32>,
    ) {
        for patch in self.shadow_patches(light, polygon, scale) {
            trace!(a = ?patch.a, b = ?patch.b, "silhouette edge");
            patch.draw(surface, SHADOW_FILL);
        }
    }

    /// Draws the shadow of the axis-aligned rectangle at (`x`, `y`) with the
    /// given size.
    ///
    /// See [`Polygon::from_rect`] for the corner order. Negative sizes are not
    /// rejected; they flip the outline and with it which edges cast.
    #[allow(clippy::too_many_arguments)]
    pub fn cast_from_rectangle<S: PathSurface + ?Sized>(
        &self,
        surface: &mut S,
        light: Point,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        scale: Option<f32>,
    ) {
        self.cast(surface, light, &Polygon::from_rect(x, y, width, height), scale);
    }

    /// Draws the shadow of a convex outline listed clockwise.
    ///
    /// `points` is copied in reverse order; the caller's slice is not touched.
    pub fn cast_inverse<S: PathSurface + ?Sized>(
        &self,
        surface: &mut S,
        light: Point,
        points: &[Point],
        scale: Option<f32>,
    ) {
        self.cast(surface, light, &Polygon::from_clockwise(points), scale);
    }
}
