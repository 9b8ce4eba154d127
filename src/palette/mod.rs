//! Palette types and utilities
//!
//! This module provides the ordered color palette used by the
//! nearest-color segmentation strategy, along with the error types for
//! parsing and validation.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{DistanceMetric, Palette};
