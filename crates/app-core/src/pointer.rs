//! Pointer state normalized to the renderer viewport.

/// Normalized device coordinates: (0, 0) at the viewport center, +Y up,
/// both axes in [-1, 1].
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Convert viewport-relative pixel coordinates into normalized device
    /// coordinates. Degenerate viewports map to the center.
    #[inline]
    pub fn from_viewport_px(px: f32, py: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (px / width) * 2.0 - 1.0,
            y: -((py / height) * 2.0 - 1.0),
        }
    }
}
