//! Shapes module - outlines drawn by the background layer
//!
//! This module provides:
//! - `Outline` trait for abstracting over outline types
//! - Primitive outlines: Polygon (triangle, hexagon, diamond) and CircleOutline
//! - `ShapeKind`, the closed set of kinds the background uses
//! - `KindOutline`, a built outline for one kind, cheap to keep per shape

mod primitives;
mod traits;

#[allow(unused_imports)]
pub use primitives::{CircleOutline, Polygon, DIAMOND_ASPECT};
pub use traits::Outline;

use rand::Rng;

use crate::render::{StrokeStyle, Surface};

/// Available shape kinds
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ShapeKind {
    Triangle,
    Hexagon,
    Diamond,
    Circle,
}

impl ShapeKind {
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Triangle,
            ShapeKind::Hexagon,
            ShapeKind::Diamond,
            ShapeKind::Circle,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Circle => "Circle",
        }
    }

    /// Pick a kind uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let all = Self::all();
        all[rng.gen_range(0..all.len())]
    }

    /// Build the outline for this kind at the given size
    pub fn outline(&self, size: f32) -> KindOutline {
        match self {
            ShapeKind::Triangle => KindOutline::Polygon(Polygon::triangle(size)),
            ShapeKind::Hexagon => KindOutline::Polygon(Polygon::hexagon(size)),
            ShapeKind::Diamond => KindOutline::Polygon(Polygon::diamond(size)),
            ShapeKind::Circle => KindOutline::Circle(CircleOutline::new(size)),
        }
    }
}

/// The outline of one background shape
#[derive(Clone, Debug, PartialEq)]
pub enum KindOutline {
    Polygon(Polygon),
    Circle(CircleOutline),
}

impl Outline for KindOutline {
    fn draw(&self, surface: &mut dyn Surface, style: StrokeStyle) {
        match self {
            KindOutline::Polygon(polygon) => polygon.draw(surface, style),
            KindOutline::Circle(circle) => circle.draw(surface, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_outline_matches_kind() {
        for kind in ShapeKind::all() {
            let sides = match kind.outline(10.0) {
                KindOutline::Polygon(polygon) => polygon.vertices().len(),
                KindOutline::Circle(circle) => {
                    assert_eq!(circle.radius, 10.0);
                    0
                }
            };
            let expected = match kind {
                ShapeKind::Triangle => 3,
                ShapeKind::Hexagon => 6,
                ShapeKind::Diamond => 4,
                ShapeKind::Circle => 0,
            };
            assert_eq!(sides, expected, "{}", kind.name());
        }
    }

    #[test]
    fn test_random_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(ShapeKind::random(&mut rng));
        }
        assert_eq!(seen.len(), ShapeKind::all().len());
    }
}
