//! Recording surface for tests
//!
//! Captures every draw call in surface coordinates so tests can assert on
//! what a frame would have painted without a window.

use super::surface::{Rgba, StrokeStyle, Surface};
use super::transform::TransformStack;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Path { points: Vec<(f32, f32)>, closed: bool, style: StrokeStyle },
    CircleOutline { center: (f32, f32), radius: f32, style: StrokeStyle },
    Dot { center: (f32, f32), radius: f32, color: Rgba },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    transform: TransformStack,
    path: Vec<(Vec<(f32, f32)>, bool)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clears(&self) -> Vec<(f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Clear { width, height } => Some((*width, *height)),
                _ => None,
            })
            .collect()
    }

    pub fn dots(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Dot { .. }))
            .count()
    }

    /// Open two-point paths, which is how connection lines are drawn
    pub fn lines(&self) -> Vec<&StrokeStyle> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Path { points, closed: false, style } if points.len() == 2 => {
                    Some(style)
                }
                _ => None,
            })
            .collect()
    }

    pub fn outlines(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::Path { closed: true, .. })
                    || matches!(c, DrawCommand::CircleOutline { .. })
            })
            .collect()
    }

    pub fn transform_depth(&self) -> usize {
        self.transform.depth()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
        self.path.clear();
    }

    fn save(&mut self) {
        self.transform.save();
    }

    fn restore(&mut self) {
        self.transform.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform.rotate(angle);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.transform.apply(x, y);
        self.path.push((vec![p], false));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.transform.apply(x, y);
        match self.path.last_mut() {
            Some((points, false)) => points.push(p),
            _ => self.path.push((vec![p], false)),
        }
    }

    fn close_path(&mut self) {
        if let Some(sub) = self.path.last_mut() {
            sub.1 = true;
        }
    }

    fn stroke(&mut self, style: StrokeStyle) {
        for (points, closed) in &self.path {
            self.commands.push(DrawCommand::Path {
                points: points.clone(),
                closed: *closed,
                style,
            });
        }
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, style: StrokeStyle) {
        let center = self.transform.apply(cx, cy);
        self.commands.push(DrawCommand::CircleOutline { center, radius, style });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let center = self.transform.apply(cx, cy);
        self.commands.push(DrawCommand::Dot { center, radius, color });
    }
}
