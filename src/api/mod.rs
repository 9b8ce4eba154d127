//! Public API surface.
//!
//! This module provides the unified [`EngineError`] type; the concrete
//! entry points ([`PaletteAssigner`](crate::PaletteAssigner),
//! [`ZoneDetector`](crate::ZoneDetector), [`score`](crate::score)) live
//! with their modules and are re-exported from the crate root.

mod error;

pub use error::EngineError;
