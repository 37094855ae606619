//! egui-backed drawing surface
//!
//! Translates `Surface` calls into egui paint shapes. Paths are collected
//! in surface coordinates, mapped through the transform stack, offset by
//! the target rectangle's origin and emitted on `stroke`.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use super::surface::{Rgba, StrokeStyle, Surface};
use super::transform::TransformStack;

/// Convert a surface color to an egui color
pub fn to_color32(color: Rgba) -> Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

/// One open or closed run of points in the current path
struct SubPath {
    points: Vec<Pos2>,
    closed: bool,
}

/// A `Surface` that paints into an egui layer
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    /// Screen position of the surface's (0, 0)
    origin: Pos2,
    /// Fill used by `clear` (None = leave the layer transparent)
    background: Option<Color32>,
    transform: TransformStack,
    path: Vec<SubPath>,
}

impl<'a> EguiSurface<'a> {
    /// Wrap a painter whose target area starts at `origin`
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            background: None,
            transform: TransformStack::new(),
            path: Vec::new(),
        }
    }

    /// Fill cleared regions with a solid color
    pub fn with_background(mut self, color: Color32) -> Self {
        self.background = Some(color);
        self
    }

    fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        let (sx, sy) = self.transform.apply(x, y);
        Pos2::new(self.origin.x + sx, self.origin.y + sy)
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        // egui repaints every frame from scratch, so clearing only matters
        // when an opaque background was requested
        if let Some(color) = self.background {
            let rect = Rect::from_min_size(self.origin, Vec2::new(width, height));
            self.painter.rect_filled(rect, 0.0, color);
        }
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
        let p = self.to_screen(x, y);
        self.path.push(SubPath {
            points: vec![p],
            closed: false,
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.to_screen(x, y);
        match self.path.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            // Like a canvas context, a line_to with no open sub-path starts one
            _ => self.path.push(SubPath {
                points: vec![p],
                closed: false,
            }),
        }
    }

    fn close_path(&mut self) {
        if let Some(sub) = self.path.last_mut() {
            sub.closed = true;
        }
    }

    fn stroke(&mut self, style: StrokeStyle) {
        let stroke = Stroke::new(style.width, to_color32(style.color));

        for sub in &self.path {
            if sub.points.len() < 2 {
                continue;
            }
            let shape = if sub.closed {
                egui::Shape::closed_line(sub.points.clone(), stroke)
            } else {
                egui::Shape::line(sub.points.clone(), stroke)
            };
            self.painter.add(shape);
        }
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, style: StrokeStyle) {
        let center = self.to_screen(cx, cy);
        let stroke = Stroke::new(style.width, to_color32(style.color));
        self.painter.circle_stroke(center, radius, stroke);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let center = self.to_screen(cx, cy);
        self.painter.circle_filled(center, radius, to_color32(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32() {
        let c = to_color32(Rgba::new(96, 130, 182, 1.0));
        assert_eq!(c, Color32::from_rgb(96, 130, 182));

        let faint = to_color32(Rgba::new(96, 130, 182, 0.18));
        assert_eq!(faint.a(), 46);
    }
}
