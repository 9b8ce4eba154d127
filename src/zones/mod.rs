//! Shared data model for zone-based coloring.
//!
//! - [`PixelPos`]: integer pixel coordinate
//! - [`ZoneKey`]: hex-string zone identifier backed by its representative
//!   color
//! - [`Segmentation`]: zone map + inverse index, the output of both
//!   segmentation strategies
//! - [`UsedColors`]: the per-session record of user fill choices that
//!   feeds the harmony scorer

mod pixel;
mod segmentation;
mod used_colors;

pub use pixel::PixelPos;
pub use segmentation::{Segmentation, ZoneKey};
pub use used_colors::UsedColors;
