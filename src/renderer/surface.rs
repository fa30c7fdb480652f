//! The drawing seam between the renderer and whatever paints pixels.

use super::color::Rgba;
use glam::Vec2;

/// A full-viewport area the field is drawn onto.
pub trait Surface {
    /// Wipes the whole surface.
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// A single call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

/// In-memory [`Surface`] remembering what was drawn since the last clear.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Number of clears so far, i.e. frames started.
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
