use lyon_geom::point;
use lyon_path::Path as LyonPath;

use crate::geometry::Point;

/// One step of a traced path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Collects the commands of the path currently being traced.
///
/// Surfaces that defer work until `fill` keep one of these and convert it
/// with [`PathRecorder::to_lyon_path`].
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    commands: Vec<PathCommand>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Converts the recorded commands into a lyon path.
    ///
    /// A `LineTo` without a preceding `MoveTo` starts a sub-path, the way a
    /// canvas context treats it.
    pub fn to_lyon_path(&self) -> LyonPath {
        let mut builder = LyonPath::builder().with_svg();
        let mut open = false;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p0) => {
                    builder.move_to(point(p0.x, p0.y));
                    open = true;
                }
                PathCommand::LineTo(p0) => {
                    if open {
                        builder.line_to(point(p0.x, p0.y));
                    } else {
                        builder.move_to(point(p0.x, p0.y));
                        open = true;
                    }
                }
                PathCommand::Close => {
                    if open {
                        builder.close();
                        open = false;
                    }
                }
            }
        }

        builder.build()
    }
}
