//! Transform stack - translate and rotate with save/restore
//!
//! Each surface keeps one of these so shape outlines can be described in
//! their local frame and mapped to screen space at draw time.

use nalgebra::{Isometry2, Point2};

/// A stack of rigid 2D transforms
///
/// The top of the stack is the current transform. It is never empty:
/// `restore` on a stack with a single entry does nothing, like a canvas
/// context with unbalanced restores.
#[derive(Clone, Debug)]
pub struct TransformStack {
    stack: Vec<Isometry2<f32>>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Create a stack holding only the identity transform
    pub fn new() -> Self {
        Self {
            stack: vec![Isometry2::identity()],
        }
    }

    fn current_mut(&mut self) -> &mut Isometry2<f32> {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// The transform currently in effect
    pub fn current(&self) -> Isometry2<f32> {
        self.stack[self.stack.len() - 1]
    }

    pub fn save(&mut self) {
        let top = self.current();
        self.stack.push(top);
    }

    pub fn restore(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Move the local origin, expressed in the current frame
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let current = self.current_mut();
        *current = *current * Isometry2::translation(dx, dy);
    }

    /// Rotate the local frame (positive = clockwise on a Y-down screen)
    pub fn rotate(&mut self, angle: f32) {
        let current = self.current_mut();
        *current = *current * Isometry2::rotation(angle);
    }

    /// Map a local point to surface coordinates
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let p = self.current().transform_point(&Point2::new(x, y));
        (p.x, p.y)
    }

    /// Number of saved states above the base transform
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }
}
