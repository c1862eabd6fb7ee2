//! Pointer position and the radial highlight that follows it.

use serde::{Deserialize, Serialize};

/// Edge length of the square highlight element, in CSS pixels.
pub const HIGHLIGHT_SIZE: f64 = 384.0;

/// Last known pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Horizontal client coordinate
    pub x: f64,
    /// Vertical client coordinate
    pub y: f64,
}

impl PointerPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left corner that centres the highlight on the pointer.
    #[must_use]
    pub fn highlight_origin(&self) -> (f64, f64) {
        let half = HIGHLIGHT_SIZE / 2.0;
        (self.x - half, self.y - half)
    }
}
