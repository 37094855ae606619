//! Project modal and its slide carousel
//!
//! Pure state; the UI layer maps clicks, keys and drags onto these calls.

use super::projects::{catalog, Project};

/// Horizontal drag distance needed to change slides
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// Index into a fixed number of slides, wrapping at both ends
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Go back to the first slide of a (possibly different) slide set
    pub fn reset(&mut self, len: usize) {
        self.index = 0;
        self.len = len;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Apply a horizontal drag from `start_x` to `end_x`
    ///
    /// Dragging left (start > end) advances, dragging right goes back.
    /// Returns whether the slide changed.
    pub fn swipe(&mut self, start_x: f32, end_x: f32) -> bool {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD || self.len == 0 {
            return false;
        }
        if diff > 0.0 {
            self.next();
        } else {
            self.prev();
        }
        true
    }

    /// "current / total", e.g. "2 / 3"
    pub fn counter_label(&self) -> String {
        if self.len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}

/// Keys the modal reacts to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModalKey {
    Escape,
    Left,
    Right,
}

/// The project detail dialog
#[derive(Debug, Default)]
pub struct ProjectModal {
    open: Option<usize>,
    pub carousel: Carousel,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for a catalog entry, starting at its first slide
    ///
    /// Returns false (and stays as it was) for an unknown index.
    pub fn open(&mut self, index: usize) -> bool {
        match catalog().get(index) {
            Some(project) => {
                self.open = Some(index);
                self.carousel.reset(project.slides.len());
                true
            }
            None => {
                log::warn!("No project at index {}", index);
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The project currently shown, if any
    pub fn project(&self) -> Option<&'static Project> {
        self.open.and_then(|i| catalog().get(i))
    }

    /// Current slide caption
    pub fn slide(&self) -> Option<&'static str> {
        self.project()
            .and_then(|p| p.slides.get(self.carousel.index()).copied())
    }

    /// Handle a key press; arrows only navigate while open
    pub fn handle_key(&mut self, key: ModalKey) {
        match key {
            ModalKey::Escape => self.close(),
            ModalKey::Left if self.is_open() => self.carousel.prev(),
            ModalKey::Right if self.is_open() => self.carousel.next(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
        assert_eq!(c.counter_label(), "1 / 3");
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert!(!c.swipe(200.0, 0.0));
        assert_eq!(c.index(), 0);
        assert_eq!(c.counter_label(), "0 / 0");
    }

    #[test]
    fn test_swipe_threshold() {
        let mut c = Carousel::new(3);
        assert!(!c.swipe(100.0, 60.0)); // exactly 40 is not enough
        assert_eq!(c.index(), 0);

        assert!(c.swipe(100.0, 59.0));
        assert_eq!(c.index(), 1);

        assert!(c.swipe(0.0, 50.0));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_modal_open_resets_slides() {
        let mut modal = ProjectModal::new();
        assert!(modal.open(0));
        modal.handle_key(ModalKey::Right);
        assert_eq!(modal.carousel.index(), 1);
        assert_eq!(modal.slide(), Some(catalog()[0].slides[1]));

        assert!(modal.open(1));
        assert_eq!(modal.carousel.index(), 0);
        assert_eq!(modal.project().map(|p| p.title), Some("Full Stack Training Platform"));
    }

    #[test]
    fn test_modal_keys() {
        let mut modal = ProjectModal::new();

        // Arrows do nothing while closed
        modal.handle_key(ModalKey::Left);
        assert_eq!(modal.carousel.index(), 0);

        modal.open(2);
        modal.handle_key(ModalKey::Left);
        assert_eq!(modal.carousel.counter_label(), "3 / 3");

        modal.handle_key(ModalKey::Escape);
        assert!(!modal.is_open());
        assert!(modal.project().is_none());
    }

    #[test]
    fn test_modal_unknown_project() {
        let mut modal = ProjectModal::new();
        assert!(!modal.open(99));
        assert!(!modal.is_open());
    }
}
