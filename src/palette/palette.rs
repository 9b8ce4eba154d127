//! Palette struct with ordered color storage and nearest-color matching.
//!
//! Order matters: nearest-color ties are broken in favor of the earliest
//! palette entry, so the same colors in a different order can partition an
//! image differently.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{Lab, Rgb};

/// Distance metric for palette color matching.
///
/// Controls how distance is calculated when finding the nearest palette
/// color to an input pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceMetric {
    /// Squared Euclidean distance over the raw RGB channels.
    ///
    /// Exact integer arithmetic, cheap, and the behavior hosts expect by
    /// default. Not perceptually uniform: equal numeric distances do not
    /// look equally different.
    #[default]
    SquaredRgb,

    /// Squared Euclidean distance in CIELAB space.
    ///
    /// Perceptually closer matching at the cost of a per-pixel color
    /// space conversion. Useful when the palette mixes chromatic and
    /// near-grey entries that raw RGB distance conflates.
    Lab,
}

/// An ordered color palette with nearest-color matching.
///
/// # Ordering and ties
///
/// The palette preserves the sequence it was constructed with. When two
/// entries are exactly equidistant from a pixel, the entry appearing
/// earlier in the sequence wins. Duplicate colors are legal; the duplicate
/// at the higher index is simply never matched.
///
/// # Precomputation
///
/// Lab representations of every entry are computed once at construction,
/// so per-pixel matching under [`DistanceMetric::Lab`] converts only the
/// pixel.
///
/// # Example
///
/// ```
/// use color_zones::Palette;
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let (idx, _dist) = palette.find_nearest("#222222".parse().unwrap());
/// assert_eq!(idx, 0); // much closer to black
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
    labs: Vec<Lab>,
    metric: DistanceMetric,
}

impl Palette {
    /// Create a palette from an ordered slice of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty. The check
    /// happens here, at construction, so segmentation never starts work
    /// it cannot finish.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let labs = colors.iter().map(|&c| Lab::from(c)).collect();

        Ok(Self {
            colors: colors.to_vec(),
            labs,
            metric: DistanceMetric::default(),
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first malformed hex
    /// string, or [`PaletteError::Empty`] for an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use color_zones::Palette;
    ///
    /// let palette = Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    ///
    /// assert!(Palette::from_hex(&["not a color"]).is_err());
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// Override the distance metric used for matching.
    ///
    /// Default is [`DistanceMetric::SquaredRgb`].
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The metric currently used for matching.
    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// The palette colors in their original order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Distance between a pixel and the palette entry at `idx` under the
    /// configured metric.
    ///
    /// For [`DistanceMetric::Lab`], `pixel_lab` must be the Lab conversion
    /// of `pixel`; [`find_nearest`](Self::find_nearest) computes it once
    /// per pixel rather than once per entry.
    #[inline]
    fn distance(&self, pixel: Rgb, pixel_lab: Lab, idx: usize) -> f64 {
        match self.metric {
            DistanceMetric::SquaredRgb => pixel.distance_squared(self.colors[idx]) as f64,
            DistanceMetric::Lab => pixel_lab.distance_squared(self.labs[idx]),
        }
    }

    /// Find the nearest palette color to the given pixel.
    ///
    /// Returns `(index, distance)`. The scan is a brute-force linear pass
    /// in palette order -- intentional, since palettes stay small (≤ ~8
    /// entries) and the operation runs once per image. The strict `<`
    /// comparison is what implements the tie-break contract: on exact
    /// ties the earliest palette index wins.
    ///
    /// # Example
    ///
    /// ```
    /// use color_zones::{Palette, Rgb};
    ///
    /// // (127, 0, 0) is exactly equidistant from both entries
    /// let palette = Palette::from_hex(&["#000000", "#fe0000"]).unwrap();
    /// let (idx, dist) = palette.find_nearest(Rgb::new(127, 0, 0));
    /// assert_eq!(idx, 0); // first entry wins the tie
    /// assert_eq!(dist, 127.0 * 127.0);
    /// ```
    pub fn find_nearest(&self, pixel: Rgb) -> (usize, f64) {
        let pixel_lab = match self.metric {
            DistanceMetric::Lab => Lab::from(pixel),
            DistanceMetric::SquaredRgb => Lab::new(0.0, 0.0, 0.0),
        };

        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        for idx in 0..self.colors.len() {
            let dist = self.distance(pixel, pixel_lab, idx);
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }

        (best_idx, best_dist)
    }
}
