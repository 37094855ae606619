//! Effects module - small UI animations layered on the page
//!
//! This module provides:
//! - Eased stat counters
//! - A cursor ring that trails the pointer
//! - Card tilt toward the pointer
//! - Scroll progress and the active navigation section

mod easing;
mod follow;

#[allow(unused_imports)]
pub use easing::{ease_out_cubic, Counter};
pub use follow::{active_section, scroll_progress, CursorRing, Tilt};
