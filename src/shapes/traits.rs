//! Outline trait definition
//!
//! The `Outline` trait is the core abstraction for decorative shapes.
//! An outline is described in its own local frame, centered on the origin,
//! and knows how to stroke itself onto a `Surface`. Placement (translation
//! and rotation) is the caller's job, done through the surface's transform
//! stack.

use crate::render::{StrokeStyle, Surface};

/// A shape outline that can be stroked onto a surface
///
/// ## Coordinate System
///
/// - (0, 0) is the shape's center
/// - Y grows downward, so "up" is negative Y
/// - Units are surface pixels
pub trait Outline {
    /// Stroke the outline around the local origin
    fn draw(&self, surface: &mut dyn Surface, style: StrokeStyle);
}
