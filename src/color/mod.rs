//! Color types and conversion utilities
//!
//! This module provides the three color representations the engine works in:
//!
//! - **[`Rgb`]**: 8-bit channels, the storage and interchange format.
//!   Parses from and renders to hex strings.
//! - **[`Hsl`]**: hue/saturation/lightness, used by the harmony scorer
//!   (scheme offsets are angles on the hue circle).
//! - **[`Lab`]**: CIELAB, used as an alternative perceptual distance
//!   metric for palette matching.
//!
//! All conversions are pure functions with no shared state.
//!
//! # Example
//!
//! ```
//! use color_zones::{Hsl, Rgb};
//!
//! let color: Rgb = "#00ffff".parse().unwrap();
//! let hsl = Hsl::from(color);
//! assert_eq!(hsl.h, 180.0); // cyan sits opposite red on the hue circle
//! ```

mod hsl;
mod lab;
mod rgb;

pub use hsl::Hsl;
pub use lab::Lab;
pub use rgb::Rgb;
