use iced::Size;

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MAX_VIEWPORT_WIDTH};

/// The drawable area the garden is laid out against.
///
/// Width is capped so ultra-wide displays don't stretch the flower row
/// indefinitely. Values are replaced wholesale on every resize event; the
/// layout is regenerated from the new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.clamp(0.0, MAX_VIEWPORT_WIDTH),
            height: height.max(0.0),
        }
    }

    /// Builds a viewport from a window size, applying the width cap.
    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_capped() {
        let vp = Viewport::from_size(Size::new(3440.0, 1440.0));
        assert_eq!(vp.width, MAX_VIEWPORT_WIDTH);
        assert_eq!(vp.height, 1440.0);
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let vp = Viewport::new(-100.0, -50.0);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
    }

    #[test]
    fn uncapped_size_passes_through() {
        let vp = Viewport::from_size(Size::new(1280.0, 720.0));
        assert_eq!(vp.width, 1280.0);
        assert_eq!(vp.height, 720.0);
    }
}
