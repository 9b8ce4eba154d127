//! Nearest-palette-color segmentation.
//!
//! Partitions every pixel of an image into the zone of its nearest palette
//! color. Brute force over the palette per pixel -- O(W·H·K) with K = palette
//! size -- which is the right trade-off for the small fixed palettes this
//! engine sees (K ≤ ~8) and a once-per-image-load operation.

use std::collections::{BTreeMap, HashMap};

use super::error::SegmentError;
use super::Progress;
use crate::color::Rgb;
use crate::palette::Palette;
use crate::zones::{PixelPos, Segmentation, ZoneKey};

/// Global nearest-color quantization strategy.
///
/// Every pixel is assigned to the palette color with minimum distance
/// under the palette's configured [`DistanceMetric`]; exact ties go to the
/// earliest palette entry. The result is a true partition: the union of
/// all zone pixel lists is the full pixel grid, exactly once, and the
/// inverse index is total.
///
/// Empty palettes are unrepresentable here -- [`Palette`] construction
/// rejects them -- so a run can never fail mid-computation for lack of
/// input validation.
///
/// [`DistanceMetric`]: crate::DistanceMetric
///
/// # Example
///
/// ```
/// use color_zones::{Discard, Palette, PaletteAssigner, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let assigner = PaletteAssigner::new(palette);
///
/// let pixels = vec![
///     Rgb::new(10, 10, 10),    // near black
///     Rgb::new(250, 250, 250), // near white
/// ];
/// let zones = assigner.segment(&pixels, 2, 1, &mut Discard).unwrap();
///
/// assert_eq!(zones.zone_count(), 2);
/// assert!(zones.is_partition());
/// ```
#[derive(Debug, Clone)]
pub struct PaletteAssigner {
    palette: Palette,
}

impl PaletteAssigner {
    /// Create an assigner for the given palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The palette this assigner quantizes against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Partition `pixels` (row-major, `width * height` entries) into
    /// palette zones.
    ///
    /// Progress is reported after each pixel as `completed / total`, a
    /// monotonically increasing ratio that reaches exactly 1.0 on the
    /// last pixel.
    ///
    /// # Errors
    ///
    /// [`SegmentError::BufferSizeMismatch`] if the buffer does not match
    /// the stated dimensions; checked before any work begins.
    pub fn segment(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
        progress: &mut dyn Progress,
    ) -> Result<Segmentation, SegmentError> {
        SegmentError::check_buffer(pixels.len(), width, height)?;

        let total = width * height;
        tracing::debug!(
            width,
            height,
            colors = self.palette.len(),
            "assigning pixels to nearest palette zones"
        );

        let keys: Vec<ZoneKey> = self
            .palette
            .colors()
            .iter()
            .map(|&c| ZoneKey::of(c))
            .collect();

        let mut zones: BTreeMap<ZoneKey, Vec<PixelPos>> = BTreeMap::new();
        let mut index: HashMap<usize, ZoneKey> = HashMap::with_capacity(total);

        for y in 0..height {
            for x in 0..width {
                let flat = y * width + x;
                let (nearest, _dist) = self.palette.find_nearest(pixels[flat]);
                let key = keys[nearest];

                zones
                    .entry(key)
                    .or_default()
                    .push(PixelPos::new(x as u32, y as u32));
                index.insert(flat, key);

                progress.report((flat + 1) as f64 / total as f64);
            }
        }

        tracing::debug!(zones = zones.len(), "palette assignment complete");
        Ok(Segmentation::new(width, height, zones, index))
    }
}
