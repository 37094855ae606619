//! Primitive outlines - Polygon and CircleOutline
//!
//! These are the building blocks for the background shapes.

use std::f32::consts::{FRAC_PI_2, TAU};

use nalgebra::Point2;

use super::traits::Outline;
use crate::render::{StrokeStyle, Surface};

/// Width-to-height ratio of the diamond outline
pub const DIAMOND_ASPECT: f32 = 0.6;

/// A closed polygon defined by a list of vertices
///
/// The polygon is traced by connecting consecutive vertices,
/// with the last vertex connecting back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// Vertices in drawing order
    vertices: Vec<Point2<f32>>,
}

impl Polygon {
    /// Create a new polygon from vertices
    ///
    /// # Panics
    /// Panics if fewer than 3 vertices are provided
    pub fn new(vertices: Vec<Point2<f32>>) -> Self {
        assert!(vertices.len() >= 3, "Polygon requires at least 3 vertices");
        Self { vertices }
    }

    /// Create a regular polygon with n sides
    ///
    /// # Arguments
    /// * `n` - Number of sides
    /// * `radius` - Distance from center to vertices
    /// * `start` - Local angle of vertex 0 in radians
    pub fn regular(n: usize, radius: f32, start: f32) -> Self {
        assert!(n >= 3, "Regular polygon requires at least 3 sides");

        let vertices = (0..n)
            .map(|i| {
                let angle = start + (i as f32 / n as f32) * TAU;
                Point2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        Self::new(vertices)
    }

    /// Equilateral triangle with its apex on local "up"
    pub fn triangle(size: f32) -> Self {
        // Starting at -π/2 puts vertex 0 at (0, -size) on a Y-down surface
        Self::regular(3, size, -FRAC_PI_2)
    }

    /// Regular hexagon with vertex 0 on the local X axis
    pub fn hexagon(size: f32) -> Self {
        Self::regular(6, size, 0.0)
    }

    /// Rhombus, `size` tall and `size * 0.6` wide (half extents)
    pub fn diamond(size: f32) -> Self {
        let half_width = size * DIAMOND_ASPECT;
        Self::new(vec![
            Point2::new(0.0, -size),
            Point2::new(half_width, 0.0),
            Point2::new(0.0, size),
            Point2::new(-half_width, 0.0),
        ])
    }

    #[cfg(test)]
    pub fn vertices(&self) -> &[Point2<f32>] {
        &self.vertices
    }
}

impl Outline for Polygon {
    fn draw(&self, surface: &mut dyn Surface, style: StrokeStyle) {
        surface.begin_path();
        for (i, v) in self.vertices.iter().enumerate() {
            if i == 0 {
                surface.move_to(v.x, v.y);
            } else {
                surface.line_to(v.x, v.y);
            }
        }
        surface.close_path();
        surface.stroke(style);
    }
}

/// An unfilled circle centered on the origin
#[derive(Clone, Debug, PartialEq)]
pub struct CircleOutline {
    pub radius: f32,
}

impl CircleOutline {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Outline for CircleOutline {
    fn draw(&self, surface: &mut dyn Surface, style: StrokeStyle) {
        surface.stroke_circle(0.0, 0.0, self.radius, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCommand, RecordingSurface};
    use crate::render::Rgba;

    fn close(a: Point2<f32>, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 0.001 && (a.y - y).abs() < 0.001
    }

    #[test]
    fn test_triangle() {
        let tri = Polygon::triangle(10.0);
        let v = tri.vertices();
        assert_eq!(v.len(), 3);
        assert!(close(v[0], 0.0, -10.0));
        assert!(close(v[1], 8.660, 5.0));
        assert!(close(v[2], -8.660, 5.0));
    }

    #[test]
    fn test_hexagon() {
        let hex = Polygon::hexagon(20.0);
        let v = hex.vertices();
        assert_eq!(v.len(), 6);
        assert!(close(v[0], 20.0, 0.0));
        assert!(close(v[3], -20.0, 0.0));
        assert!(v.iter().all(|p| (p.coords.norm() - 20.0).abs() < 0.001));
    }

    #[test]
    fn test_diamond() {
        let d = Polygon::diamond(10.0);
        let v = d.vertices();
        assert!(close(v[0], 0.0, -10.0));
        assert!(close(v[1], 6.0, 0.0));
        assert!(close(v[2], 0.0, 10.0));
        assert!(close(v[3], -6.0, 0.0));
    }

    #[test]
    fn test_polygon_strokes_closed_path() {
        let mut surface = RecordingSurface::new();
        Polygon::hexagon(10.0).draw(&mut surface, StrokeStyle::new(Rgba::new(0, 0, 0, 1.0), 1.0));

        let outlines = surface.outlines();
        assert_eq!(outlines.len(), 1);
        let DrawCommand::Path { points, closed, .. } = outlines[0] else {
            panic!("expected a path");
        };
        assert!(*closed);
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn test_circle_strokes_circle() {
        let mut surface = RecordingSurface::new();
        CircleOutline::new(14.0).draw(&mut surface, StrokeStyle::new(Rgba::new(0, 0, 0, 1.0), 1.0));
        assert!(matches!(
            surface.outlines()[0],
            DrawCommand::CircleOutline { radius, .. } if (*radius - 14.0).abs() < 0.001
        ));
    }
}
