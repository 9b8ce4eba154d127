//! Session record of which fill color the user gave each zone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::segmentation::ZoneKey;
use crate::color::Rgb;

/// The fill colors a user has assigned to zones during one problem.
///
/// Recolor events arrive from the host UI as `(zone key, chosen color)`
/// pairs. The map grows monotonically as the user paints -- recoloring a
/// zone overwrites its entry, nothing is ever removed -- and is cleared
/// only when a new image/problem is loaded.
///
/// [`colors`](Self::colors) reduces the map to the color list the
/// harmony scorer consumes.
///
/// # Example
///
/// ```
/// use color_zones::{Rgb, UsedColors, ZoneKey};
///
/// let mut used = UsedColors::new();
/// let zone = ZoneKey::of(Rgb::new(10, 10, 10));
///
/// used.record(zone, "#ff0000".parse().unwrap());
/// used.record(zone, "#00ff00".parse().unwrap()); // recolor, same zone
///
/// assert_eq!(used.len(), 1);
/// assert_eq!(used.colors(), vec![Rgb::new(0, 255, 0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsedColors {
    fills: BTreeMap<ZoneKey, Rgb>,
}

impl UsedColors {
    /// Create an empty record, one per problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recolor event: the user filled `zone` with `color`.
    ///
    /// Overwrites any previous fill of the same zone.
    pub fn record(&mut self, zone: ZoneKey, color: Rgb) {
        self.fills.insert(zone, color);
    }

    /// The fill color of a zone, if it has been painted.
    pub fn get(&self, zone: &ZoneKey) -> Option<Rgb> {
        self.fills.get(zone).copied()
    }

    /// Number of zones painted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.fills.len()
    }

    /// True if nothing has been painted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    /// Forget everything; called when a new problem is loaded.
    pub fn clear(&mut self) {
        self.fills.clear();
    }

    /// The fill colors in zone-key order, one reading per painted zone.
    ///
    /// This is the color list the harmony scorer takes; the scorer sorts
    /// by hue itself, so the order here does not affect the score.
    pub fn colors(&self) -> Vec<Rgb> {
        self.fills.values().copied().collect()
    }

    /// Iterate over `(zone, fill color)` pairs in zone-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ZoneKey, &Rgb)> {
        self.fills.iter()
    }
}
