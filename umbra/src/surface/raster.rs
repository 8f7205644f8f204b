use std::path::Path as StdPath;

use glam::Vec2;
use image::{ImageFormat, Rgba, RgbaImage};
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};
use thiserror::Error;
use tracing::{debug, warn};

use super::{
    PathSurface,
    path::{PathCommand, PathRecorder},
};
use crate::{color::Color, geometry::Point};

/// Errors raised when exporting a [`RasterSurface`].
#[derive(Debug, Error)]
pub enum RasterError {
    /// Encoding or writing the image failed.
    #[error("failed to write canvas to {path}: {source}")]
    Encode {
        /// Destination path.
        path: String,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },
}

/// Software rasterizer drawing into an RGBA image.
///
/// Fills are tessellated into triangles with lyon and sampled once per pixel
/// centre, without anti-aliasing. Each pixel is blended at most once per fill,
/// so a path's own triangles never double-darken their shared edges. Separate
/// fills do stack, which is how overlapping shadow patches look on a canvas.
///
/// Geometry far outside the canvas is fine: triangle bounds are clamped to the
/// image before sampling.
pub struct RasterSurface {
    image: RgbaImage,
    current: PathRecorder,
    fill_color: Color,
}

impl RasterSurface {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    /// Creates a canvas cleared to `background`.
    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self::from_image(RgbaImage::from_pixel(
            width,
            height,
            Rgba(background.to_rgba_u8()),
        ))
    }

    /// Draws on top of an existing image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            current: PathRecorder::new(),
            fill_color: Color::BLACK,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour of the pixel at (`x`, `y`), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|pixel| Color::from(pixel.0))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Writes the canvas to `path` as a PNG file.
    pub fn save_png(&self, path: impl AsRef<StdPath>) -> Result<(), RasterError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| RasterError::Encode {
                path: path.display().to_string(),
                source,
            })?;
        debug!(
            path = %path.display(),
            width = self.width(),
            height = self.height(),
            "canvas written"
        );
        Ok(())
    }

    fn tessellate_current(&self) -> Option<VertexBuffers<Vec2, u32>> {
        let path = self.current.to_lyon_path();
        let options = FillOptions::default().with_fill_rule(FillRule::NonZero);
        let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();

        let result = FillTessellator::new().tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                Vec2::from(vertex.position().to_array())
            }),
        );

        match result {
            Ok(()) => Some(buffers),
            Err(error) => {
                warn!(%error, "dropping fill that could not be tessellated");
                None
            }
        }
    }

    /// Marks every pixel whose centre lies inside one of the triangles.
    fn coverage(&self, buffers: &VertexBuffers<Vec2, u32>) -> Vec<bool> {
        let (width, height) = self.image.dimensions();
        let mut mask = vec![false; width as usize * height as usize];

        for triangle in buffers.indices.chunks_exact(3) {
            let [a, b, c] = [
                buffers.vertices[triangle[0] as usize],
                buffers.vertices[triangle[1] as usize],
                buffers.vertices[triangle[2] as usize],
            ];
            if (b - a).perp_dot(c - a) == 0.0 {
                continue;
            }

            let Some((x0, x1)) = pixel_span(a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x), width)
            else {
                continue;
            };
            let Some((y0, y1)) =
                pixel_span(a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y), height)
            else {
                continue;
            };

            for y in y0..=y1 {
                for x in x0..=x1 {
                    let sample = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    if contains(a, b, c, sample) {
                        mask[y as usize * width as usize + x as usize] = true;
                    }
                }
            }
        }

        mask
    }
}

/// Range of pixel indices whose centres fall within `[min, max]`, clamped to
/// `0..limit`.
fn pixel_span(min: f32, max: f32, limit: u32) -> Option<(u32, u32)> {
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    let start = (min - 0.5).ceil().max(0.0);
    let end = (max - 0.5).floor().min(limit as f32 - 1.0);
    if start <= end {
        Some((start as u32, end as u32))
    } else {
        None
    }
}

fn contains(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    let ab = (b - a).perp_dot(p - a);
    let bc = (c - b).perp_dot(p - b);
    let ca = (a - c).perp_dot(p - c);
    (ab >= 0.0 && bc >= 0.0 && ca >= 0.0) || (ab <= 0.0 && bc <= 0.0 && ca <= 0.0)
}

impl PathSurface for RasterSurface {
    fn begin_path(&mut self) {
        self.current.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.current.push(PathCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.current.push(PathCommand::LineTo(point));
    }

    fn close_path(&mut self) {
        self.current.push(PathCommand::Close);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let Some(buffers) = self.tessellate_current() else {
            return;
        };

        let mask = self.coverage(&buffers);
        let width = self.image.width() as usize;
        let color = self.fill_color;
        for (index, _) in mask.iter().enumerate().filter(|(_, covered)| **covered) {
            let x = (index % width) as u32;
            let y = (index / width) as u32;
            let pixel = self.image.get_pixel_mut(x, y);
            *pixel = Rgba(color.over(Color::from(pixel.0)).to_rgba_u8());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SHADOW_FILL;

    fn fill_square(surface: &mut RasterSurface, min: f32, max: f32) {
        surface.begin_path();
        surface.move_to(Point::new(min, min));
        surface.line_to(Point::new(min, max));
        surface.line_to(Point::new(max, max));
        surface.line_to(Point::new(max, min));
        surface.close_path();
        surface.set_fill_color(SHADOW_FILL);
        surface.fill();
    }

    #[test]
    fn fills_pixels_whose_centres_are_inside() {
        let mut surface = RasterSurface::with_background(8, 8, Color::WHITE);
        fill_square(&mut surface, 2.0, 6.0);

        let shaded = [204, 204, 204, 255];
        assert_eq!(surface.pixel(2, 2).map(Color::to_rgba_u8), Some(shaded));
        assert_eq!(surface.pixel(5, 5).map(Color::to_rgba_u8), Some(shaded));
        // The tessellation diagonal runs through this centre; it must still be
        // blended only once.
        assert_eq!(surface.pixel(4, 4).map(Color::to_rgba_u8), Some(shaded));

        assert_eq!(surface.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(surface.pixel(6, 6), Some(Color::WHITE));
        assert_eq!(surface.pixel(8, 8), None);
    }

    #[test]
    fn separate_fills_stack() {
        let mut surface = RasterSurface::with_background(8, 8, Color::WHITE);
        fill_square(&mut surface, 0.0, 4.0);
        fill_square(&mut surface, 0.0, 4.0);

        // 255 * 0.8 * 0.8
        assert_eq!(
            surface.pixel(1, 1).map(Color::to_rgba_u8),
            Some([163, 163, 163, 255])
        );
    }

    #[test]
    fn geometry_beyond_canvas_is_clamped() {
        let mut surface = RasterSurface::with_background(4, 4, Color::WHITE);
        fill_square(&mut surface, -1.0e4, 1.0e4);
        for y in 0..4 {
            for x in 0..4 {
                assert_ne!(surface.pixel(x, y), Some(Color::WHITE));
            }
        }
    }

    #[test]
    fn degenerate_path_draws_nothing() {
        let mut surface = RasterSurface::with_background(4, 4, Color::WHITE);
        surface.begin_path();
        surface.move_to(Point::new(1.0, 1.0));
        surface.line_to(Point::new(1.0, 1.0));
        surface.close_path();
        surface.fill();
        assert!(surface.image().pixels().all(|pixel| pixel.0 == [255; 4]));
    }

    #[test]
    fn pixel_span_clamps_and_rejects() {
        assert_eq!(pixel_span(2.0, 6.0, 8), Some((2, 5)));
        assert_eq!(pixel_span(-10.0, 100.0, 8), Some((0, 7)));
        assert_eq!(pixel_span(20.0, 30.0, 8), None);
        assert_eq!(pixel_span(f32::NAN, 3.0, 8), None);
        assert_eq!(pixel_span(0.0, 1.0, 0), None);
    }

    #[test]
    fn save_png_reports_destination_on_failure() {
        let surface = RasterSurface::new(2, 2);
        let error = surface
            .save_png("/nonexistent-directory/canvas.png")
            .unwrap_err();
        assert!(error.to_string().contains("/nonexistent-directory/canvas.png"));
    }
}
