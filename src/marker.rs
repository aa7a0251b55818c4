//! The visual feedback marker.

/// The single on-screen indicator element, repositioned and recolored on each
/// relevant input event.
///
/// Policy: on multi-contact batches the marker reflects the PRIMARY contact only,
/// i.e. the first element of the batch. An empty batch leaves it untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualMarker {
    /// Horizontal offset in device pixels.
    pub x: f64,
    /// Vertical offset in device pixels.
    pub y: f64,
    /// Current color, a CSS-style hex string from the active palette.
    pub color: String,
}

impl VisualMarker {
    /// A marker at the origin wearing `color`.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            color: color.into(),
        }
    }

    /// Moves the marker and swaps its color in one step.
    pub fn move_to(&mut self, x: f64, y: f64, color: &str) {
        self.x = x;
        self.y = y;
        self.color = color.to_string();
    }

    /// Returns the marker to the origin with `color`.
    pub fn reset(&mut self, color: &str) {
        self.move_to(0.0, 0.0, color);
    }
}
