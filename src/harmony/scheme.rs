//! The published catalog of hue-harmony schemes.
//!
//! Each scheme is a fixed ordered sequence of required hue offsets, in
//! degrees, relative to a reference hue. The constants are part of the
//! external contract and must not drift.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Angular step used by the split-based schemes, in degrees (360 / 32).
pub const SPLIT_ANGLE: f64 = 11.25;

/// A hue-harmony scheme from the published catalog.
///
/// The scheme fixes both the required angular relationships and, through
/// them, the required number of distinct colors:
/// `offsets().len() + 1`.
///
/// Serde uses the published display names, so `"Split-Complementary"`
/// round-trips:
///
/// ```
/// use color_zones::SchemeKey;
///
/// let key: SchemeKey = serde_json::from_str("\"Split-Complementary\"").unwrap();
/// assert_eq!(key, SchemeKey::SplitComplementary);
/// assert_eq!(key.offsets(), &[168.75, 191.25]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeKey {
    /// A single hue; harmonious and soothing.
    Monochromatic,
    /// Two hues 180° apart; high-contrast and vibrant.
    Complementary,
    /// Two hues one split-angle apart.
    Diadic,
    /// Three adjacent hues; cohesive and warm.
    Analogous,
    /// A hue plus the two neighbors of its complement.
    #[serde(rename = "Split-Complementary")]
    SplitComplementary,
    /// Three hues 120° apart; lively but stable.
    Triadic,
    /// Four hues in two complementary pairs.
    Tetradic,
    /// Four hues 90° apart.
    Square,
}

impl SchemeKey {
    /// Every scheme in the catalog, for iteration and UI listings.
    pub const ALL: [SchemeKey; 8] = [
        SchemeKey::Monochromatic,
        SchemeKey::Complementary,
        SchemeKey::Diadic,
        SchemeKey::Analogous,
        SchemeKey::SplitComplementary,
        SchemeKey::Triadic,
        SchemeKey::Tetradic,
        SchemeKey::Square,
    ];

    /// The required hue offsets in degrees, relative to a reference hue,
    /// in the fixed order the scorer consumes them.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            SchemeKey::Monochromatic => &[],
            SchemeKey::Complementary => &[180.0],
            SchemeKey::Diadic => &[11.25],
            SchemeKey::Analogous => &[11.25, 22.5],
            SchemeKey::SplitComplementary => &[168.75, 191.25],
            SchemeKey::Triadic => &[120.0, 240.0],
            SchemeKey::Tetradic => &[22.5, 180.0, 202.5],
            SchemeKey::Square => &[90.0, 180.0, 270.0],
        }
    }

    /// The number of distinct colors a complete coloring needs:
    /// one reference hue plus one per offset.
    #[inline]
    pub fn required_colors(self) -> usize {
        self.offsets().len() + 1
    }

    /// Human-readable guidance shown alongside the problem.
    pub fn description(self) -> &'static str {
        match self {
            SchemeKey::Monochromatic => {
                "Color this image in an harmonious and soothing way, creating \
                 a sense of unity and simplicity"
            }
            SchemeKey::Complementary => {
                "Color this image so that it is high-contrast and vibrant, \
                 creating a bold and dynamic look"
            }
            SchemeKey::Diadic => "",
            SchemeKey::Analogous => {
                "Color this image so that it conveys a sense of comfort and \
                 warmth. It should tend to create a cohesive and pleasing \
                 visual experience"
            }
            SchemeKey::SplitComplementary => {
                "Color this image so that it offers both vibrant and balanced \
                 qualities"
            }
            SchemeKey::Triadic => {
                "Color this image in a lively and dynamic while maintaining \
                 visual stability"
            }
            SchemeKey::Tetradic => {
                "Color this image so that it gives a sense of diversity and \
                 excitement"
            }
            SchemeKey::Square => {
                "Color this image so that it provides balance and variety, \
                 offering both color contrast and cohesion"
            }
        }
    }

    /// The full catalog entry for this key.
    pub fn scheme(self) -> Scheme {
        Scheme {
            key: self,
            description: self.description(),
            offsets: self.offsets(),
        }
    }
}

impl fmt::Display for SchemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemeKey::Monochromatic => "Monochromatic",
            SchemeKey::Complementary => "Complementary",
            SchemeKey::Diadic => "Diadic",
            SchemeKey::Analogous => "Analogous",
            SchemeKey::SplitComplementary => "Split-Complementary",
            SchemeKey::Triadic => "Triadic",
            SchemeKey::Tetradic => "Tetradic",
            SchemeKey::Square => "Square",
        };
        f.write_str(name)
    }
}

/// A catalog entry: name, guidance text and the ordered offset table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scheme {
    /// The scheme's key (serializes as its published name).
    pub key: SchemeKey,
    /// Human-readable guidance.
    pub description: &'static str,
    /// Required hue offsets in degrees, in fixed order.
    pub offsets: &'static [f64],
}
