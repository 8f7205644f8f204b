use lyon_path::Path as LyonPath;

use super::{
    PathSurface,
    path::{PathCommand, PathRecorder},
};
use crate::{color::Color, geometry::Point};

/// A filled path produced by [`LyonPathSurface`].
#[derive(Debug, Clone)]
pub struct FilledPath {
    pub path: LyonPath,
    pub color: Color,
}

/// Path-building surface backed by [`lyon_path`].
///
/// Every [`fill`](PathSurface::fill) snapshots the current path together with
/// the active fill colour. The result can be tessellated, exported as SVG or
/// fed to any other lyon consumer.
#[derive(Debug, Clone)]
pub struct LyonPathSurface {
    current: PathRecorder,
    fill_color: Color,
    filled: Vec<FilledPath>,
}

impl Default for LyonPathSurface {
    fn default() -> Self {
        Self {
            current: PathRecorder::new(),
            fill_color: Color::BLACK,
            filled: Vec::new(),
        }
    }
}

impl LyonPathSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filled_paths(&self) -> &[FilledPath] {
        &self.filled
    }

    pub fn into_filled_paths(self) -> Vec<FilledPath> {
        self.filled
    }
}

impl PathSurface for LyonPathSurface {
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
        self.filled.push(FilledPath {
            path: self.current.to_lyon_path(),
            color: self.fill_color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_fill_snapshots_path_and_color() {
        let mut surface = LyonPathSurface::new();
        let red = Color::from_rgb(1.0, 0.0, 0.0);

        surface.begin_path();
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(1.0, 0.0));
        surface.line_to(Point::new(1.0, 1.0));
        surface.close_path();
        surface.set_fill_color(red);
        surface.fill();

        // Filling again without a new path repeats the same geometry.
        surface.set_fill_color(Color::WHITE);
        surface.fill();

        let filled = surface.filled_paths();
        assert_eq!(filled.len(), 2);
        assert_eq!(filled[0].color, red);
        assert_eq!(filled[1].color, Color::WHITE);
        assert_eq!(filled[0].path.iter().count(), filled[1].path.iter().count());
    }

    #[test]
    fn fill_without_path_is_ignored() {
        let mut surface = LyonPathSurface::new();
        surface.begin_path();
        surface.fill();
        assert!(surface.into_filled_paths().is_empty());
    }
}
