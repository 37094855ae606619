//! Drawing surface abstraction
//!
//! The background animator never talks to egui directly. It draws through
//! the `Surface` trait, which mirrors the small subset of a canvas 2D context
//! it needs:
//!
//! - clearing a region
//! - stroking paths built from move/line/close commands
//! - stroking and filling full circles
//! - a save/restore transform stack with translate and rotate
//!
//! ## Coordinate System
//!
//! Surface units are logical pixels with the origin at the top-left corner.
//! Y grows downward, so a shape's local "up" is the negative Y axis.

use thiserror::Error;

/// Errors that can occur while building colors
#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("Color must look like #rrggbb, got {0:?}")]
    Malformed(String),

    #[error("Alpha must be within 0.0..=1.0, got {0}")]
    AlphaOutOfRange(f32),
}

/// An RGB color with a floating point alpha
///
/// Alpha is kept as `f32` rather than a byte so faint strokes like the
/// connection lines (alpha well below 1/255 steps apart) stay exact until
/// the surface converts them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rrggbb` hex string and attach an alpha
    pub fn from_hex(hex: &str, alpha: f32) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColorError::AlphaOutOfRange(alpha));
        }

        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| ColorError::Malformed(hex.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::Malformed(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Stroke parameters for paths and circle outlines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// A 2D drawing target
///
/// Path commands accumulate into a current path that is consumed by
/// `stroke`. Transform calls affect every subsequent coordinate until the
/// matching `restore`.
pub trait Surface {
    /// Erase everything inside the rectangle (0, 0) - (width, height)
    fn clear(&mut self, width: f32, height: f32);

    /// Push a copy of the current transform
    fn save(&mut self);

    /// Pop back to the last saved transform
    fn restore(&mut self);

    /// Move the origin by (dx, dy) in the current frame
    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate the current frame by `angle` radians
    fn rotate(&mut self, angle: f32);

    /// Discard the current path and start a new one
    fn begin_path(&mut self);

    /// Start a new sub-path at (x, y)
    fn move_to(&mut self, x: f32, y: f32);

    /// Add a straight segment to (x, y)
    fn line_to(&mut self, x: f32, y: f32);

    /// Connect the last point of the sub-path back to its first point
    fn close_path(&mut self);

    /// Stroke the current path
    fn stroke(&mut self, style: StrokeStyle);

    /// Stroke a full circle outline
    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, style: StrokeStyle);

    /// Fill a full circle
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgba::from_hex("#6082b6", 0.2).unwrap();
        assert_eq!((c.r, c.g, c.b), (0x60, 0x82, 0xb6));
        assert!((c.a - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(Rgba::from_hex("6082b6", 0.2), Err(ColorError::Malformed(_))));
        assert!(matches!(Rgba::from_hex("#60z2b6", 0.2), Err(ColorError::Malformed(_))));
        assert!(matches!(Rgba::from_hex("#fff", 0.2), Err(ColorError::Malformed(_))));
        assert_eq!(
            Rgba::from_hex("#ffffff", 1.5),
            Err(ColorError::AlphaOutOfRange(1.5))
        );
    }

    #[test]
    fn test_with_alpha() {
        let c = Rgba::new(1, 2, 3, 1.0).with_alpha(0.5);
        assert_eq!(c, Rgba::new(1, 2, 3, 0.5));
    }
}
