//! umbra draws the hard shadows that convex shapes cast from a point light.
//!
//! # Overview
//!
//! Describe the occluder as a counter-clockwise [`Polygon`], pick a light
//! position and hand both to a [`ShadowCaster`] together with a drawing
//! surface. For every edge that faces away from the light the caster fills
//! one quadrilateral reaching from the edge far past the visible area.
//!
//! ```
//! use umbra::{CasterConfig, Color, Point, Polygon, RasterSurface, ShadowCaster};
//!
//! let mut canvas = RasterSurface::with_background(64, 64, Color::WHITE);
//! let caster = ShadowCaster::new(CasterConfig::from_surface_width(64.0));
//!
//! let crate_box = Polygon::from_rect(10.0, 10.0, 10.0, 10.0);
//! caster.cast(&mut canvas, Point::new(0.0, 0.0), &crate_box, None);
//!
//! // Beyond the bottom edge, seen from the light, is in shadow.
//! assert_ne!(canvas.pixel(20, 35), Some(Color::WHITE));
//! // The light's own corner is not.
//! assert_eq!(canvas.pixel(2, 2), Some(Color::WHITE));
//! ```
//!
//! # Surfaces
//!
//! Drawing goes through the [`PathSurface`] trait, a canvas-style subset of
//! path operations. The crate ships a software [`RasterSurface`], a
//! [`LyonPathSurface`] for feeding tessellators or vector exporters and a
//! [`RecordingSurface`] that only logs calls.
//!
//! # Preconditions
//!
//! Shapes must be convex and wound counter-clockwise as seen on screen. Neither
//! is checked: a clockwise outline swaps lit and shadowed edges, and malformed
//! geometry simply yields odd or empty shadows. Use
//! [`ShadowCaster::cast_inverse`] or [`Polygon::from_clockwise`] for clockwise
//! data, and [`Winding::of`] when the winding is unknown.

pub mod caster;
pub mod color;
pub mod geometry;
pub mod polygon;
pub mod surface;

pub use caster::{CasterConfig, ShadowCaster, ShadowPatch, silhouette_edges};
pub use color::{Color, SHADOW_FILL};
pub use geometry::Point;
pub use polygon::{Polygon, Winding};
pub use surface::{
    FilledPath, LyonPathSurface, PathSurface, RasterError, RasterSurface, RecordingSurface,
    SurfaceOp,
};
