//! Pointer-following effects - cursor ring, card tilt, scroll progress and
//! the active navigation section

use nalgebra::{Point2, Vector2};

/// Fraction of the remaining distance the ring covers each frame
pub const RING_SMOOTHING: f32 = 0.12;
/// Ring radius at rest
pub const RING_RADIUS: f32 = 14.0;
/// Ring radius over links, buttons and cards
pub const RING_HOVER_RADIUS: f32 = 22.0;

/// Tilt at the card's edges, in degrees
pub const TILT_DEGREES: f32 = 12.0;
/// How far a tilted card lifts off the page
pub const TILT_LIFT: f32 = 10.0;

/// A section is active while its top edge is within this distance of the
/// viewport top
pub const NAV_OFFSET: f32 = 150.0;

/// A ring that trails the pointer
#[derive(Clone, Debug)]
pub struct CursorRing {
    position: Option<Point2<f32>>,
    radius: f32,
}

impl Default for CursorRing {
    fn default() -> Self {
        Self {
            position: None,
            radius: RING_RADIUS,
        }
    }
}

impl CursorRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame toward the pointer
    ///
    /// The ring snaps to the pointer when it (re)enters the window and
    /// hides when the pointer leaves. `hovered` grows the ring while the
    /// pointer is over something interactive.
    pub fn update(&mut self, pointer: Option<Point2<f32>>, hovered: bool) {
        self.position = match (self.position, pointer) {
            (_, None) => None,
            (None, Some(target)) => Some(target),
            (Some(ring), Some(target)) => Some(ring + (target - ring) * RING_SMOOTHING),
        };

        let target = Self::target_radius(hovered);
        self.radius += (target - self.radius) * RING_SMOOTHING;
    }

    fn target_radius(hovered: bool) -> f32 {
        if hovered {
            RING_HOVER_RADIUS
        } else {
            RING_RADIUS
        }
    }

    /// Where to draw the ring, if visible
    pub fn position(&self) -> Option<Point2<f32>> {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether the ring still needs frames to catch up with `pointer`
    pub fn is_settling(&self, pointer: Option<Point2<f32>>, hovered: bool) -> bool {
        match (self.position, pointer) {
            (Some(ring), Some(target)) => {
                nalgebra::distance(&ring, &target) > 0.5
                    || (self.radius - Self::target_radius(hovered)).abs() > 0.05
            }
            _ => false,
        }
    }
}

/// Card rotation toward the pointer, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    /// Rotation about the horizontal axis
    pub rotate_x: f32,
    /// Rotation about the vertical axis
    pub rotate_y: f32,
    pub active: bool,
}

impl Tilt {
    /// Tilt of a card at `origin` with `size` while the pointer is at `pointer`
    ///
    /// The pointer offset from the card center is normalized to
    /// [-0.5, 0.5] on each axis. A pointer outside the card gives no tilt.
    pub fn toward(pointer: Option<Point2<f32>>, origin: Point2<f32>, size: Vector2<f32>) -> Self {
        let Some(p) = pointer else {
            return Self::default();
        };
        if size.x <= 0.0 || size.y <= 0.0 {
            return Self::default();
        }

        let x = (p.x - origin.x) / size.x - 0.5;
        let y = (p.y - origin.y) / size.y - 0.5;
        if x.abs() > 0.5 || y.abs() > 0.5 {
            return Self::default();
        }

        Self {
            rotate_x: -y * TILT_DEGREES,
            rotate_y: x * TILT_DEGREES,
            active: true,
        }
    }

    /// Shadow offset that stands in for the rotation on a flat painter
    ///
    /// The shadow falls away from the side tilted toward the viewer and
    /// drops by `TILT_LIFT` while the card is raised.
    pub fn shadow_offset(&self) -> Vector2<f32> {
        if !self.active {
            return Vector2::zeros();
        }
        Vector2::new(-self.rotate_y, self.rotate_x + TILT_LIFT)
    }
}

/// Scroll position as a percentage of the scrollable range
///
/// Returns 0 when the content fits in the viewport.
pub fn scroll_progress(scroll_top: f32, content_height: f32, viewport_height: f32) -> f32 {
    let range = content_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Whether a section whose top edge sits `top` below the viewport top
/// counts as the one being read
pub fn is_section_active(top: f32, height: f32) -> bool {
    top < NAV_OFFSET && top > -height + NAV_OFFSET
}

/// First active section among `(top, height)` pairs
pub fn active_section(sections: &[(f32, f32)]) -> Option<usize> {
    sections
        .iter()
        .position(|&(top, height)| is_section_active(top, height))
}
