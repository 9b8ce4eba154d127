//! HSL color type
//!
//! HSL separates hue from saturation and lightness, which is what the
//! harmony scorer needs: scheme offsets are angles on the hue circle and
//! the other two components are irrelevant to scoring.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// A color in HSL (hue, saturation, lightness) space.
///
/// # Components
///
/// - `h`: hue in **degrees**, normalized to `[0, 360)`. The hue circle is
///   circular: 0 and 360 denote the same color, and the constructor folds
///   out-of-range values back into the domain. Achromatic colors (greys)
///   have `h = 0` by convention.
/// - `s`: saturation in `[0, 1]`
/// - `l`: lightness in `[0, 1]`
///
/// Conversions to and from [`Rgb`] round-trip within ±1 per 8-bit channel
/// after re-quantization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub h: f64,
    /// Saturation, `[0, 1]`
    pub s: f64,
    /// Lightness, `[0, 1]`
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color.
    ///
    /// The hue is folded into `[0, 360)`, so `Hsl::new(360.0, s, l)` and
    /// `Hsl::new(0.0, s, l)` are the same color.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s,
            l,
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(color: Rgb) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue and saturation are zero
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: (h * 60.0).rem_euclid(360.0),
            s,
            l,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(color: Hsl) -> Self {
        if color.s == 0.0 {
            let v = quantize(color.l);
            return Rgb::new(v, v, v);
        }

        let q = if color.l < 0.5 {
            color.l * (1.0 + color.s)
        } else {
            color.l + color.s - color.l * color.s
        };
        let p = 2.0 * color.l - q;
        let h = color.h / 360.0;

        Rgb::new(
            quantize(hue_to_channel(p, q, h + 1.0 / 3.0)),
            quantize(hue_to_channel(p, q, h)),
            quantize(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

/// Resolve one RGB channel from hue position `t` and the chroma bounds
/// `p` (low) and `q` (high).
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
