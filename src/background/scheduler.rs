//! Frame scheduling and stop control
//!
//! The animator never loops on its own. After each frame it asks a
//! `FrameScheduler` for another one, which lets the host (egui's repaint
//! machinery) or a test decide when the next frame actually runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use eframe::egui;

/// Something that can arrange for the next frame callback to run
pub trait FrameScheduler {
    fn request_frame(&self);
}

/// Schedules frames through egui's repaint requests
#[derive(Clone)]
pub struct RepaintScheduler {
    ctx: egui::Context,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&self) {
        self.ctx.request_repaint();
    }
}

/// Shared flag that halts an animator
///
/// Clones share the same flag, so any owner can stop the loop. Once
/// stopped, the animator neither draws nor schedules further frames until
/// it is started again.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Relaxed);
    }

    pub fn stop(&self) {
        self.set_running(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

/// Counts frame requests instead of scheduling anything
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    requests: std::cell::Cell<usize>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

#[cfg(test)]
impl FrameScheduler for ManualScheduler {
    fn request_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_handle_is_shared() {
        let handle = StopHandle::new();
        let other = handle.clone();

        handle.set_running(true);
        assert!(other.is_running());

        other.stop();
        assert!(!handle.is_running());
    }

    #[test]
    fn test_manual_scheduler_counts() {
        let scheduler = ManualScheduler::default();
        scheduler.request_frame();
        scheduler.request_frame();
        assert_eq!(scheduler.requests(), 2);
    }
}
