//! Render module - drawing surfaces for the background layer
//!
//! This module provides:
//! - `Surface` trait, the canvas-like target the animator draws on
//! - Transform stack shared by surface implementations
//! - egui painter implementation
//! - Recording implementation for tests

mod painter;
mod surface;
mod transform;

#[cfg(test)]
pub mod recording;

#[allow(unused_imports)]
pub use painter::{to_color32, EguiSurface};
#[allow(unused_imports)]
pub use surface::{ColorError, Rgba, StrokeStyle, Surface};
#[allow(unused_imports)]
pub use transform::TransformStack;
