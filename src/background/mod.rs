//! Background module - the animated geometric backdrop
//!
//! This module provides:
//! - `Shape`, one drifting outline with fixed appearance
//! - `BackgroundAnimator`, which owns the shapes and renders frames
//! - `FrameScheduler` and `StopHandle` for driving and halting the loop

mod animator;
mod scheduler;
mod shape;

#[allow(unused_imports)]
pub use animator::{
    connection_alpha, AnimatorConfig, AnimatorError, BackgroundAnimator, Viewport,
    CONNECT_DISTANCE, MAX_SHAPES, SHAPE_COUNT,
};
#[allow(unused_imports)]
pub use scheduler::{FrameScheduler, RepaintScheduler, StopHandle};
#[allow(unused_imports)]
pub use shape::{Shape, WRAP_MARGIN};
