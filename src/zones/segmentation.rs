//! Segmentation result: zone map plus inverse index.
//!
//! [`Segmentation`] is the canonical output of both segmentation
//! strategies. It pairs the zone map (zone key to pixel list) with the
//! derived inverse index (flattened pixel index back to owning key) used
//! for interactive hit-testing, and keeps the two consistent.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pixel::PixelPos;
use crate::color::Rgb;
use crate::palette::ParseColorError;

/// Identifier of a colorable zone: the canonical lowercase `#rrggbb` hex
/// form of the zone's representative color.
///
/// A `ZoneKey` can only be built from an [`Rgb`] value, so a malformed key
/// is unrepresentable. Keys are ordered; because the hex rendering has
/// fixed width, the derived order is exactly the lexicographic order of
/// the hex strings, which makes zone-map iteration deterministic.
///
/// Keys are not guaranteed unique across strategies: the flood-fill
/// detector may merge several disjoint regions under one key.
///
/// ```
/// use color_zones::{Rgb, ZoneKey};
///
/// let key = ZoneKey::of(Rgb::new(255, 0, 170));
/// assert_eq!(key.to_string(), "#ff00aa");
/// assert_eq!(key.color(), Rgb::new(255, 0, 170));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct ZoneKey(Rgb);

impl ZoneKey {
    /// The key for a representative color.
    #[inline]
    pub fn of(color: Rgb) -> Self {
        Self(color)
    }

    /// The representative color this key renders as.
    #[inline]
    pub fn color(self) -> Rgb {
        self.0
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ZoneKey> for String {
    fn from(key: ZoneKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for ZoneKey {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(Rgb::from_str(&value)?))
    }
}

/// The result of segmenting one image into colorable zones.
///
/// Produced once per image load and immutable thereafter: the host
/// repaints pixels, not the zone structure.
///
/// # Invariants
///
/// - Every entry of the inverse index points at a zone that contains that
///   pixel.
/// - For [`PaletteAssigner`](crate::PaletteAssigner) results the zones
///   form a partition: every in-bounds pixel appears in exactly one zone.
/// - For [`ZoneDetector`](crate::ZoneDetector) results the merge step may
///   place a pixel under several keys (similarity is not transitive), so
///   only the inverse-index consistency holds; [`is_partition`] reports
///   which case applies.
///
/// [`is_partition`]: Segmentation::is_partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    width: usize,
    height: usize,
    zones: BTreeMap<ZoneKey, Vec<PixelPos>>,
    index: HashMap<usize, ZoneKey>,
}

impl Segmentation {
    /// Assemble a segmentation result.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that every inverse-index entry refers to an existing
    /// zone containing that pixel.
    pub(crate) fn new(
        width: usize,
        height: usize,
        zones: BTreeMap<ZoneKey, Vec<PixelPos>>,
        index: HashMap<usize, ZoneKey>,
    ) -> Self {
        if cfg!(debug_assertions) {
            for (&flat, key) in &index {
                debug_assert!(flat < width * height, "index entry {flat} out of bounds");
                debug_assert!(
                    zones
                        .get(key)
                        .is_some_and(|pixels| pixels.iter().any(|p| p.flat_index(width) == flat)),
                    "index entry {flat} -> {key} not present in its zone"
                );
            }
        }

        Self {
            width,
            height,
            zones,
            index,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The zone map: zone key to the pixels the zone covers, ordered by
    /// key.
    #[inline]
    pub fn zone_map(&self) -> &BTreeMap<ZoneKey, Vec<PixelPos>> {
        &self.zones
    }

    /// The inverse index: flattened pixel index (`y * width + x`) to
    /// owning zone key.
    #[inline]
    pub fn inverse_index(&self) -> &HashMap<usize, ZoneKey> {
        &self.index
    }

    /// Pixels of one zone, if the key exists.
    pub fn zone(&self, key: &ZoneKey) -> Option<&[PixelPos]> {
        self.zones.get(key).map(Vec::as_slice)
    }

    /// Hit-test: the zone owning the given pixel.
    ///
    /// A miss (out-of-bounds position, or a pixel no strategy claimed)
    /// returns `None`; consumers treat it as a no-op, not a fault.
    pub fn zone_at(&self, pos: PixelPos) -> Option<ZoneKey> {
        if (pos.x as usize) < self.width && (pos.y as usize) < self.height {
            self.index.get(&pos.flat_index(self.width)).copied()
        } else {
            None
        }
    }

    /// Number of zones.
    #[inline]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Number of pixels with an inverse-index entry.
    #[inline]
    pub fn assigned_pixels(&self) -> usize {
        self.index.len()
    }

    /// Whether the zones partition the image: every in-bounds pixel
    /// appears in exactly one zone.
    ///
    /// Always true for palette-assigner results. Flood-fill results keep
    /// full coverage but may duplicate pixels across merged zones.
    pub fn is_partition(&self) -> bool {
        let total = self.width * self.height;
        let listed: usize = self.zones.values().map(Vec::len).sum();
        listed == total && self.index.len() == total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_zone_fixture() -> Segmentation {
        let black = ZoneKey::of(Rgb::new(0, 0, 0));
        let white = ZoneKey::of(Rgb::new(255, 255, 255));

        let mut zones = BTreeMap::new();
        zones.insert(black, vec![PixelPos::new(0, 0), PixelPos::new(1, 0)]);
        zones.insert(white, vec![PixelPos::new(0, 1), PixelPos::new(1, 1)]);

        let mut index = HashMap::new();
        index.insert(0, black);
        index.insert(1, black);
        index.insert(2, white);
        index.insert(3, white);

        Segmentation::new(2, 2, zones, index)
    }

    #[test]
    fn test_zone_key_is_canonical_hex() {
        let key = ZoneKey::of(Rgb::new(1, 2, 3));
        assert_eq!(key.to_string(), "#010203");
        assert_eq!(key.color(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_zone_key_order_matches_hex_order() {
        let mut keys = vec![
            ZoneKey::of(Rgb::new(255, 0, 0)),
            ZoneKey::of(Rgb::new(0, 0, 1)),
            ZoneKey::of(Rgb::new(0, 255, 0)),
        ];
        keys.sort();

        let rendered: Vec<String> = keys.iter().map(ZoneKey::to_string).collect();
        let mut by_string = rendered.clone();
        by_string.sort();
        assert_eq!(rendered, by_string);
    }

    #[test]
    fn test_hit_testing() {
        let seg = two_zone_fixture();
        assert_eq!(
            seg.zone_at(PixelPos::new(1, 0)),
            Some(ZoneKey::of(Rgb::new(0, 0, 0)))
        );
        assert_eq!(
            seg.zone_at(PixelPos::new(0, 1)),
            Some(ZoneKey::of(Rgb::new(255, 255, 255)))
        );
        // Out of bounds is a miss, not a fault
        assert_eq!(seg.zone_at(PixelPos::new(5, 5)), None);
    }

    #[test]
    fn test_partition_detection() {
        let seg = two_zone_fixture();
        assert!(seg.is_partition());
        assert_eq!(seg.assigned_pixels(), 4);
        assert_eq!(seg.zone_count(), 2);
    }

    #[test]
    fn test_serde_uses_hex_string_keys() {
        let seg = two_zone_fixture();
        let json = serde_json::to_value(&seg).unwrap();

        let zones = json.get("zones").unwrap().as_object().unwrap();
        assert!(zones.contains_key("#000000"));
        assert!(zones.contains_key("#ffffff"));

        let back: Segmentation = serde_json::from_value(json).unwrap();
        assert_eq!(back, seg);
    }
}
