//! CIELAB perceptual color space
//!
//! Used only as an alternative distance metric for palette matching:
//! Euclidean distance in Lab correlates with perceived color difference
//! far better than distance in raw RGB.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// D65 reference white point.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// CIE constants for the Lab transfer function.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIELAB space (D65 illuminant).
///
/// # Components
///
/// - `l`: lightness, 0 (black) to 100 (white)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
///
/// Values are not clamped; components of in-gamut sRGB colors stay within
/// the usual ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0..=100 for in-gamut colors
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance in Lab space.
    ///
    /// Use squared distance when only comparisons are needed; take the
    /// square root for an actual Delta-E 1976 value.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<Rgb> for Lab {
    /// Convert 8-bit sRGB to Lab via linear light and XYZ.
    fn from(color: Rgb) -> Self {
        let r = srgb_to_linear(color.r as f64 / 255.0);
        let g = srgb_to_linear(color.g as f64 / 255.0);
        let b = srgb_to_linear(color.b as f64 / 255.0);

        // sRGB D65 matrix
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_transfer(x / WHITE_X);
        let fy = lab_transfer(y / WHITE_Y);
        let fz = lab_transfer(z / WHITE_Z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// Decode the sRGB gamma curve (IEC 61966-2-1).
#[inline]
fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_transfer(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}
