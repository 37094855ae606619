//! Background shape entity
//!
//! A `Shape` is one drifting, slowly spinning outline. Everything about it
//! is fixed at creation except its position and angle, which only change
//! through `advance`. The outline geometry is built once, in the shape's
//! local frame, and reused every frame.

use std::f32::consts::TAU;
use std::ops::Range;

use nalgebra::{Point2, Vector2};
use rand::Rng;

use super::animator::Viewport;
use crate::render::Rgba;
use crate::shapes::{KindOutline, ShapeKind};

/// How far past an edge a shape may drift before it wraps to the other side
pub const WRAP_MARGIN: f32 = 50.0;

/// Outline radius range
pub const SIZE_RANGE: Range<f32> = 14.0..42.0;

/// Angular velocity range, radians per frame
pub const SPIN_RANGE: Range<f32> = -0.004..0.004;

/// Per-axis linear velocity range, units per frame
pub const SPEED_RANGE: Range<f32> = -0.18..0.18;

/// A decorative shape in the background layer
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    position: Point2<f32>,
    size: f32,
    angle: f32,
    spin: f32,
    velocity: Vector2<f32>,
    color: Rgba,
    outline: KindOutline,
}

impl Shape {
    /// Create a shape with explicit parameters
    pub fn new(
        kind: ShapeKind,
        position: Point2<f32>,
        size: f32,
        angle: f32,
        spin: f32,
        velocity: Vector2<f32>,
        color: Rgba,
    ) -> Self {
        Self {
            kind,
            outline: kind.outline(size),
            position,
            size,
            angle,
            spin,
            velocity,
            color,
        }
    }

    /// Create a shape with randomized parameters
    ///
    /// # Arguments
    /// * `rng` - Randomness source (seed it for reproducible layouts)
    /// * `viewport` - Area the starting position is drawn from
    /// * `palette` - Base colors; one is picked uniformly
    /// * `alpha` - Range the picked color's alpha is drawn from
    ///
    /// `palette` must not be empty and `alpha` must not be an empty range.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: Viewport,
        palette: &[Rgba],
        alpha: Range<f32>,
    ) -> Self {
        let kind = ShapeKind::random(rng);
        let position = Point2::new(
            rng.gen_range(0.0..viewport.width),
            rng.gen_range(0.0..viewport.height),
        );
        let size = rng.gen_range(SIZE_RANGE);
        let angle = rng.gen_range(0.0..TAU);
        let spin = rng.gen_range(SPIN_RANGE);
        let velocity = Vector2::new(rng.gen_range(SPEED_RANGE), rng.gen_range(SPEED_RANGE));
        let base = palette[rng.gen_range(0..palette.len())];
        let color = base.with_alpha(rng.gen_range(alpha));

        Self::new(kind, position, size, angle, spin, velocity, color)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[cfg(test)]
    pub fn spin(&self) -> f32 {
        self.spin
    }

    #[cfg(test)]
    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Outline geometry in the shape's local frame
    pub fn outline(&self) -> &KindOutline {
        &self.outline
    }

    /// Move and rotate by one frame, then wrap around the viewport edges
    pub(crate) fn advance(&mut self, viewport: Viewport) {
        self.position += self.velocity;
        self.angle = (self.angle + self.spin).rem_euclid(TAU);

        self.position.x = wrap(self.position.x, viewport.width);
        self.position.y = wrap(self.position.y, viewport.height);
    }
}

/// Teleport a coordinate that left `[-margin, extent + margin]` to the far side
fn wrap(value: f32, extent: f32) -> f32 {
    if value < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if value > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        value
    }
}
