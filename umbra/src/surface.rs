//! Drawing surfaces shadows can be cast onto.
//!
//! The caster only needs a canvas-style path API: open a path, trace it with
//! straight segments, close it and fill it with a solid colour. Anything that
//! offers that can implement [`PathSurface`]:
//!
//! - [`RecordingSurface`] keeps the raw command stream.
//! - [`LyonPathSurface`] turns every fill into a [`lyon_path::Path`].
//! - [`RasterSurface`] rasterizes fills into an RGBA image in software.

mod lyon;
mod path;
mod raster;
mod recording;

pub use lyon::{FilledPath, LyonPathSurface};
pub use path::{PathCommand, PathRecorder};
pub use raster::{RasterError, RasterSurface};
pub use recording::{RecordingSurface, SurfaceOp};

use crate::{color::Color, geometry::Point};

/// Minimal vector drawing contract.
///
/// Methods mirror a 2D canvas context. None of them can fail: a surface that
/// cannot honour a call drops it.
pub trait PathSurface {
    /// Discards the current path and starts a new, empty one.
    fn begin_path(&mut self);

    /// Starts a new sub-path at `point` without drawing.
    fn move_to(&mut self, point: Point);

    /// Adds a straight segment from the pen position to `point`.
    fn line_to(&mut self, point: Point);

    /// Connects the pen back to the start of the current sub-path.
    fn close_path(&mut self);

    /// Sets the colour used by subsequent [`fill`](PathSurface::fill) calls.
    fn set_fill_color(&mut self, color: Color);

    /// Fills the interior of the current path.
    fn fill(&mut self);
}

impl<S: PathSurface + ?Sized> PathSurface for &mut S {
    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, point: Point) {
        (**self).move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        (**self).line_to(point);
    }

    fn close_path(&mut self) {
        (**self).close_path();
    }

    fn set_fill_color(&mut self, color: Color) {
        (**self).set_fill_color(color);
    }

    fn fill(&mut self) {
        (**self).fill();
    }
}
