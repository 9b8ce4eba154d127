//! Unified error type for the public API.
//!
//! [`EngineError`] wraps all error types from the crate into a single
//! enum for convenient `?` propagation in application code.

use thiserror::Error;

use crate::palette::{PaletteError, ParseColorError};
use crate::segment::SegmentError;

/// Unified error type for the public API.
///
/// # Example
///
/// ```
/// use color_zones::{EngineError, Palette};
///
/// fn build_palette() -> Result<Palette, EngineError> {
///     let palette = Palette::from_hex(&["#000000", "#ffffff"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Palette validation error (empty palette or parse failure)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Color parsing error (invalid hex string)
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Segmentation input error
    #[error("segmentation error: {0}")]
    Segment(#[from] SegmentError),
}
