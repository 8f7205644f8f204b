use super::PathSurface;
use crate::{color::Color, geometry::Point};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    SetFillColor(Color),
    Fill,
}

/// Surface that draws nothing and remembers every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Fill))
            .count()
    }

    /// Replays the log and returns, for every fill, the vertices of the path
    /// that was filled together with the colour in effect.
    pub fn filled_paths(&self) -> Vec<(Vec<Point>, Color)> {
        let mut filled = Vec::new();
        let mut path = Vec::new();
        let mut color = Color::BLACK;
        for op in &self.ops {
            match *op {
                SurfaceOp::BeginPath => path.clear(),
                SurfaceOp::MoveTo(point) | SurfaceOp::LineTo(point) => path.push(point),
                SurfaceOp::ClosePath => {}
                SurfaceOp::SetFillColor(next) => color = next,
                SurfaceOp::Fill => filled.push((path.clone(), color)),
            }
        }
        filled
    }
}

impl PathSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::LineTo(point));
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetFillColor(color));
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }
}
