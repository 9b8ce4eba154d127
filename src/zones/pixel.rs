//! Pixel coordinate type.

use serde::{Deserialize, Serialize};

/// An integer pixel position within an image.
///
/// Immutable value type with `0 <= x < width` and `0 <= y < height` for
/// the image it was produced from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PixelPos {
    /// Column, 0-based
    pub x: u32,
    /// Row, 0-based
    pub y: u32,
}

impl PixelPos {
    /// Create a new pixel position.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Flattened row-major index: `y * width + x`.
    ///
    /// This is the key type of the inverse index.
    #[inline]
    pub fn flat_index(self, width: usize) -> usize {
        self.y as usize * width + self.x as usize
    }
}
