//! Flood-fill zone discovery with a same-color merge pass.
//!
//! Discovers zones as maximal 4-connected regions of locally-similar
//! pixels, then flattens regions whose representative colors are similar
//! into shared zones. Unlike the palette assigner this strategy compares
//! raw pixel colors against each other, not against palette entries.

use std::collections::{BTreeMap, HashMap, VecDeque};

use super::error::SegmentError;
use super::Progress;
use crate::color::Rgb;
use crate::zones::{PixelPos, Segmentation, ZoneKey};

/// Flood-fill + merge segmentation strategy.
///
/// # Phase 1: discovery
///
/// Pixels are scanned in raster order. Each pixel not yet claimed by a
/// zone seeds a breadth-first flood fill whose reference color is the
/// seed's own color -- fixed for the whole fill, not updated as the fill
/// grows. A 4-neighbor joins the zone iff it satisfies the similarity
/// predicate against the seed's color; neighbors outside the image are
/// simply absent. A pixel is marked visited only when accepted, so a pixel
/// rejected by one fill still seeds its own zone later: every in-bounds
/// pixel ends up in exactly one candidate zone, and each candidate zone is
/// 4-connected through pixels similar to its seed.
///
/// # Phase 2: merge
///
/// For every candidate zone, all zones whose seed colors are similar to
/// its seed color are flattened into one zone keyed by the seed color's
/// hex form. This is a pairwise scan, **not** a transitive closure:
/// similarity is not transitive, so with chained colors (A~B, B~C, A≁C)
/// a pixel can legitimately appear under more than one key and the result
/// depends on the fixed raster discovery order. The inverse index takes
/// the first claim in discovery order, so it always points at a zone
/// containing the pixel.
///
/// # Similarity predicate
///
/// Two colors are similar when both hold:
///
/// ```text
/// (|Δr| + |Δg| + |Δb|) / 3       < color_tolerance      (default 100)
/// |mean(c1) - mean(c2)|          < lightness_tolerance   (default 20)
/// ```
///
/// # Example
///
/// ```
/// use color_zones::{Discard, Rgb, ZoneDetector};
///
/// // 2x2 image: left column red, right column blue
/// let red = Rgb::new(200, 0, 0);
/// let blue = Rgb::new(0, 0, 200);
/// let pixels = vec![red, blue, red, blue];
///
/// let zones = ZoneDetector::new()
///     .color_tolerance(40.0)
///     .detect(&pixels, 2, 2, &mut Discard)
///     .unwrap();
///
/// assert_eq!(zones.zone_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ZoneDetector {
    color_tolerance: f64,
    lightness_tolerance: f64,
}

impl Default for ZoneDetector {
    fn default() -> Self {
        Self {
            color_tolerance: 100.0,
            lightness_tolerance: 20.0,
        }
    }
}

impl ZoneDetector {
    /// Create a detector with the default tolerances (100 color, 20
    /// lightness).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mean-channel-difference tolerance.
    pub fn color_tolerance(mut self, tolerance: f64) -> Self {
        self.color_tolerance = tolerance;
        self
    }

    /// Set the lightness (channel mean) tolerance.
    pub fn lightness_tolerance(mut self, tolerance: f64) -> Self {
        self.lightness_tolerance = tolerance;
        self
    }

    /// The similarity predicate over raw pixel colors.
    fn is_similar(&self, c1: Rgb, c2: Rgb) -> bool {
        let channel_diff = c1.manhattan_distance(c2) as f64;
        let lightness_diff = (c1.channel_mean() - c2.channel_mean()).abs();

        channel_diff / 3.0 < self.color_tolerance
            && lightness_diff < self.lightness_tolerance
    }

    /// Discover zones in `pixels` (row-major, `width * height` entries).
    ///
    /// Progress is reported after each completed fill as the fraction of
    /// pixels claimed so far; the sequence is monotonically non-decreasing
    /// and ends at 1.0.
    ///
    /// # Errors
    ///
    /// [`SegmentError::BufferSizeMismatch`] if the buffer does not match
    /// the stated dimensions; checked before any work begins.
    pub fn detect(
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
            color_tolerance = self.color_tolerance,
            lightness_tolerance = self.lightness_tolerance,
            "flood-fill zone discovery"
        );

        // Phase 1: discovery. Visited state and the candidate accumulator
        // are locals of this call frame, keeping the detector re-entrant.
        let mut visited = vec![false; total];
        let mut candidates: Vec<(Rgb, Vec<PixelPos>)> = Vec::new();
        let mut claimed = 0usize;

        for y in 0..height {
            for x in 0..width {
                let flat = y * width + x;
                if visited[flat] {
                    continue;
                }

                let seed_color = pixels[flat];
                let zone = flood_fill(
                    pixels,
                    width,
                    height,
                    PixelPos::new(x as u32, y as u32),
                    seed_color,
                    &mut visited,
                    |a, b| self.is_similar(a, b),
                );

                claimed += zone.len();
                candidates.push((seed_color, zone));
                progress.report(claimed as f64 / total as f64);
            }
        }

        tracing::debug!(zones = candidates.len(), "discovery complete");

        // Phase 2: pairwise merge of zones with similar seed colors, in
        // discovery order. Later zones with an identical key overwrite
        // earlier ones; the inverse index keeps the first claim per pixel.
        let mut zones: BTreeMap<ZoneKey, Vec<PixelPos>> = BTreeMap::new();
        let mut index: HashMap<usize, ZoneKey> = HashMap::with_capacity(total);

        for (seed_color, _) in &candidates {
            let key = ZoneKey::of(*seed_color);

            let merged: Vec<PixelPos> = candidates
                .iter()
                .filter(|(other_color, _)| self.is_similar(*seed_color, *other_color))
                .flat_map(|(_, zone)| zone.iter().copied())
                .collect();

            for pos in &merged {
                index.entry(pos.flat_index(width)).or_insert(key);
            }
            zones.insert(key, merged);
        }

        tracing::debug!(zones = zones.len(), "merge complete");
        Ok(Segmentation::new(width, height, zones, index))
    }
}

/// Breadth-first flood fill from `start`, accepting 4-neighbors similar to
/// the fixed `seed_color`. Accepted pixels are marked in `visited`; the
/// seed itself always belongs to its own zone (it is the reference).
fn flood_fill(
    pixels: &[Rgb],
    width: usize,
    height: usize,
    start: PixelPos,
    seed_color: Rgb,
    visited: &mut [bool],
    is_similar: impl Fn(Rgb, Rgb) -> bool,
) -> Vec<PixelPos> {
    let mut zone = Vec::new();
    let mut queue = VecDeque::new();

    visited[start.flat_index(width)] = true;
    zone.push(start);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        for neighbor in neighbors4(pos, width, height) {
            let flat = neighbor.flat_index(width);
            if visited[flat] {
                continue;
            }
            if is_similar(pixels[flat], seed_color) {
                visited[flat] = true;
                zone.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    zone
}

/// In-bounds 4-neighbors of a position: left, right, up, down.
fn neighbors4(pos: PixelPos, width: usize, height: usize) -> impl Iterator<Item = PixelPos> {
    let (x, y) = (pos.x as i64, pos.y as i64);
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
        .into_iter()
        .filter(move |&(nx, ny)| {
            nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height
        })
        .map(|(nx, ny)| PixelPos::new(nx as u32, ny as u32))
}
