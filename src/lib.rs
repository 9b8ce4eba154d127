//! color-zones: zone segmentation and hue-harmony scoring
//!
//! This crate is the computational core of a "paint by color theory"
//! learning tool: an image is partitioned into colorable zones, the user
//! fills zones with hues picked from a wheel, and a score measures how
//! well the chosen hues realize a target harmony scheme (complementary,
//! triadic, ...). Everything interactive -- canvas drawing, widgets,
//! state management -- lives in the host application; this crate only
//! receives pixel buffers and color choices and returns zone maps and
//! scores.
//!
//! # Quick Start
//!
//! Segment an image against a palette, then score the user's coloring:
//!
//! ```
//! use color_zones::{
//!     Discard, Palette, PaletteAssigner, Rgb, SchemeKey, ScoreTracker,
//! };
//!
//! // 2x1 image: one dark pixel, one light pixel
//! let pixels = vec![Rgb::new(20, 20, 20), Rgb::new(240, 240, 240)];
//! let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
//!
//! let assigner = PaletteAssigner::new(palette);
//! let zones = assigner.segment(&pixels, 2, 1, &mut Discard).unwrap();
//! assert_eq!(zones.zone_count(), 2);
//!
//! // The user paints red and cyan -- a perfect complementary pair
//! let mut tracker = ScoreTracker::new(SchemeKey::Complementary, 5.0);
//! let result = tracker.update(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)]);
//! assert!(result.perfect_match);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! pixel buffer + palette
//!     |
//!     +--> PaletteAssigner      nearest-palette quantization (partition)
//!     |        |
//!     +--> ZoneDetector         flood fill + same-color merge
//!              |
//!              v
//!         Segmentation          zone map {key -> pixels}
//!              |                + inverse index {pixel -> key}
//!              v
//!         (host repaints zones, records choices in UsedColors)
//!              |
//!              v
//!         harmony::score        hues vs. scheme offsets -> [0, 1]
//! ```
//!
//! # Segmentation Strategies
//!
//! Two complementary ways to discover zones:
//!
//! - [`PaletteAssigner`] assigns every pixel to its nearest palette
//!   color. The result is a true partition of the image, and ties are
//!   broken deterministically in palette order.
//! - [`ZoneDetector`] grows 4-connected regions of locally-similar
//!   pixels by flood fill, then merges regions with similar
//!   representative colors. Because the similarity predicate is not
//!   transitive, merged zones may overlap; the inverse index stays
//!   consistent either way.
//!
//! Both run synchronously, once per image load, and report through the
//! [`Progress`] observer so a host UI can stay responsive during large
//! images.
//!
//! # Color Spaces
//!
//! - [`Rgb`]: 8-bit channels, hex string I/O -- storage and interchange
//! - [`Hsl`]: hue in degrees -- the harmony scorer's working space
//! - [`Lab`]: CIELAB -- optional perceptual palette matching via
//!   [`DistanceMetric::Lab`]
//!
//! # Scoring
//!
//! The scheme catalog ([`SchemeKey`]) publishes fixed hue-offset tables;
//! [`score`] sorts the used hues, tries every rotation as the reference
//! hue, and normalizes the best accumulated deviation into a `[0, 1]`
//! score with a tolerance collapse near perfection. [`ScoreTracker`]
//! retains the last score so an empty reading (nothing painted yet)
//! leaves the score unchanged.

pub mod api;
pub mod color;
pub mod harmony;
pub mod palette;
pub mod segment;
pub mod zones;

#[cfg(test)]
mod domain_tests;

pub use api::EngineError;
pub use color::{Hsl, Lab, Rgb};
pub use harmony::{
    score, score_hex, HarmonyScore, Scheme, SchemeKey, ScoreTracker,
    DEFAULT_TOLERANCE_DEG, SPLIT_ANGLE,
};
pub use palette::{DistanceMetric, Palette, PaletteError, ParseColorError};
pub use segment::{
    Discard, PaletteAssigner, Progress, ProgressFn, SegmentError, ZoneDetector,
};
pub use zones::{PixelPos, Segmentation, UsedColors, ZoneKey};
