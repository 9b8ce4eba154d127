//! Hue-harmony scoring.
//!
//! Given the hues actually used to fill the zones and a target scheme,
//! computes how closely the chosen hues realize the scheme's required
//! angular relationships.

use std::str::FromStr;

use serde::Serialize;

use super::scheme::SchemeKey;
use crate::color::{Hsl, Rgb};
use crate::palette::ParseColorError;
use crate::zones::UsedColors;

/// Default angular tolerance in degrees.
pub const DEFAULT_TOLERANCE_DEG: f64 = 5.0;

/// The result of scoring a coloring against a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HarmonyScore {
    /// Similarity in `[0, 1]`; 1.0 is a perfect realization of the scheme.
    pub score: f64,
    /// The scheme the coloring was scored against.
    pub scheme: SchemeKey,
    /// True when the displayed score rounds to 100/100.
    pub perfect_match: bool,
}

impl HarmonyScore {
    /// The zero score for a scheme: an incomplete or over-complete
    /// coloring cannot satisfy any scheme.
    fn zero(scheme: SchemeKey) -> Self {
        Self {
            score: 0.0,
            scheme,
            perfect_match: false,
        }
    }

    /// The score on the 0-100 display scale, rounded.
    #[inline]
    pub fn display_points(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }

    /// The "scheme identified" signal: the matched scheme, if the score
    /// is perfect.
    pub fn identified_scheme(&self) -> Option<SchemeKey> {
        self.perfect_match.then_some(self.scheme)
    }
}

/// Score a set of used colors against a target scheme.
///
/// Returns `None` when `colors` is empty: an untouched canvas carries no
/// information, so the caller keeps its prior score instead of
/// recomputing ([`ScoreTracker`] implements exactly that rule). A color
/// count that does not match the scheme's requirement yields a defined
/// score of 0 -- an in-progress coloring is a valid, expected state, not
/// an error.
///
/// # Algorithm
///
/// Hues are taken in degrees and sorted ascending. Each index is tried as
/// the root: the cyclic forward differences from the root are compared,
/// in order, against the scheme's offsets, and the absolute deviations
/// accumulate. The minimum over all roots, collapsed to 0 when it falls
/// below `tolerance_deg`, is normalized against the theoretical ceiling
/// `360 + 2 * tolerance_deg`:
///
/// ```text
/// score = 1 - min_diff / (360 + 2 * tolerance)
/// ```
///
/// # Examples
///
/// ```
/// use color_zones::{score, Rgb, SchemeKey};
///
/// // Red (hue 0°) and cyan (hue 180°): a perfect complementary pair.
/// let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)];
/// let result = score(&colors, SchemeKey::Complementary, 5.0).unwrap();
/// assert_eq!(result.score, 1.0);
/// assert!(result.perfect_match);
///
/// // A triadic scheme needs three colors; two score 0.
/// let result = score(&colors, SchemeKey::Triadic, 5.0).unwrap();
/// assert_eq!(result.score, 0.0);
///
/// // Nothing painted yet: no score update.
/// assert!(score(&[], SchemeKey::Complementary, 5.0).is_none());
/// ```
pub fn score(colors: &[Rgb], scheme: SchemeKey, tolerance_deg: f64) -> Option<HarmonyScore> {
    if colors.is_empty() {
        return None;
    }

    let offsets = scheme.offsets();
    if colors.len() != offsets.len() + 1 {
        return Some(HarmonyScore::zero(scheme));
    }

    let mut hues: Vec<f64> = colors.iter().map(|&c| Hsl::from(c).h).collect();
    hues.sort_by(f64::total_cmp);

    let max_diff = 360.0 + 2.0 * tolerance_deg;
    let mut min_diff = max_diff;

    for (root_idx, &root) in hues.iter().enumerate() {
        let mut diff_sum = 0.0;

        for j in 1..hues.len() {
            // Cyclic forward hue at position root+j, relative to the root
            let hue = hues[(root_idx + j) % hues.len()];
            let angle = (hue - root + 360.0) % 360.0;
            diff_sum += (angle - offsets[j - 1]).abs();
        }

        if diff_sum < min_diff {
            min_diff = diff_sum;
        }
    }

    // Collapse near-misses so rounding noise is not penalized
    if min_diff < tolerance_deg {
        min_diff = 0.0;
    }

    let score = 1.0 - min_diff / max_diff;
    let result = HarmonyScore {
        score,
        scheme,
        perfect_match: (score * 100.0).round() as u32 == 100,
    };
    tracing::trace!(scheme = %scheme, score = result.score, "scored hue harmony");
    Some(result)
}

/// Score hex color strings against a target scheme.
///
/// Every string is parsed before any scoring work; the first malformed
/// color aborts with [`ParseColorError`].
///
/// ```
/// use color_zones::{score_hex, SchemeKey};
///
/// let result = score_hex(&["#ff0000", "#00ffff"], SchemeKey::Complementary, 5.0)
///     .unwrap()
///     .unwrap();
/// assert!(result.perfect_match);
///
/// assert!(score_hex(&["#nope"], SchemeKey::Monochromatic, 5.0).is_err());
/// ```
pub fn score_hex<S: AsRef<str>>(
    colors: &[S],
    scheme: SchemeKey,
    tolerance_deg: f64,
) -> Result<Option<HarmonyScore>, ParseColorError> {
    let parsed = colors
        .iter()
        .map(|s| Rgb::from_str(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(score(&parsed, scheme, tolerance_deg))
}

/// Stateful score holder implementing the "empty input leaves the score
/// unchanged" rule.
///
/// The tracker owns the last computed [`HarmonyScore`] (initially 0) and
/// recomputes from scratch on every update -- the scorer itself is
/// stateless and pure.
///
/// ```
/// use color_zones::{Rgb, SchemeKey, ScoreTracker};
///
/// let mut tracker = ScoreTracker::new(SchemeKey::Complementary, 5.0);
/// assert_eq!(tracker.current().score, 0.0);
///
/// let perfect = tracker.update(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)]);
/// assert!(perfect.perfect_match);
///
/// // An empty reading keeps the prior score
/// assert!(tracker.update(&[]).perfect_match);
/// ```
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    scheme: SchemeKey,
    tolerance_deg: f64,
    last: HarmonyScore,
}

impl ScoreTracker {
    /// Create a tracker for one problem.
    pub fn new(scheme: SchemeKey, tolerance_deg: f64) -> Self {
        Self {
            scheme,
            tolerance_deg,
            last: HarmonyScore::zero(scheme),
        }
    }

    /// The target scheme.
    #[inline]
    pub fn scheme(&self) -> SchemeKey {
        self.scheme
    }

    /// The most recent score.
    #[inline]
    pub fn current(&self) -> HarmonyScore {
        self.last
    }

    /// Recompute the score from the given colors. Empty input is a no-op
    /// that returns the retained score.
    pub fn update(&mut self, colors: &[Rgb]) -> HarmonyScore {
        if let Some(updated) = score(colors, self.scheme, self.tolerance_deg) {
            self.last = updated;
        }
        self.last
    }

    /// Recompute from the session's [`UsedColors`] record.
    pub fn update_from(&mut self, used: &UsedColors) -> HarmonyScore {
        self.update(&used.colors())
    }

    /// Reset to the zero score, for a new problem with the same scheme.
    pub fn reset(&mut self) {
        self.last = HarmonyScore::zero(self.scheme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Colors with exact HSL hues for scorer scenarios.
    fn hue_color(degrees: f64) -> Rgb {
        Rgb::from(Hsl::new(degrees, 1.0, 0.5))
    }

    #[test]
    fn test_perfect_complementary_pair() {
        let result = score(
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)],
            SchemeKey::Complementary,
            5.0,
        )
        .unwrap();

        assert_eq!(result.score, 1.0);
        assert!(result.perfect_match);
        assert_eq!(result.identified_scheme(), Some(SchemeKey::Complementary));
        assert_eq!(result.display_points(), 100);
    }

    #[test]
    fn test_near_miss_outside_tolerance() {
        // Hues 0° and 168°: off by 12°, beyond the 5° tolerance. 168° is
        // exactly representable in 8-bit RGB as (0, 255, 204), so the
        // expected score is exact.
        let result = score(
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 204)],
            SchemeKey::Complementary,
            5.0,
        )
        .unwrap();

        let expected = 1.0 - 12.0 / 370.0;
        assert!(
            (result.score - expected).abs() < 1e-9,
            "expected {expected}, got {}",
            result.score
        );
        assert!(!result.perfect_match);
    }

    #[test]
    fn test_near_miss_inside_tolerance_collapses_to_perfect() {
        // Hues 0° and 177°: off by 3°, within the 5° tolerance.
        let result = score(
            &[hue_color(0.0), hue_color(177.0)],
            SchemeKey::Complementary,
            5.0,
        )
        .unwrap();

        assert_eq!(result.score, 1.0);
        assert!(result.perfect_match);
    }

    #[test]
    fn test_count_mismatch_scores_zero() {
        let two = [hue_color(0.0), hue_color(120.0)];
        let result = score(&two, SchemeKey::Triadic, 5.0).unwrap();
        assert_eq!(result.score, 0.0);
        assert!(!result.perfect_match);
        assert_eq!(result.identified_scheme(), None);

        // Over-complete is equally a mismatch
        let four = [
            hue_color(0.0),
            hue_color(90.0),
            hue_color(180.0),
            hue_color(270.0),
        ];
        assert_eq!(score(&four, SchemeKey::Triadic, 5.0).unwrap().score, 0.0);
    }

    #[test]
    fn test_monochromatic_single_color_is_perfect() {
        for color in [hue_color(13.0), hue_color(200.0), Rgb::new(80, 80, 80)] {
            let result = score(&[color], SchemeKey::Monochromatic, 5.0).unwrap();
            assert_eq!(result.score, 1.0, "any single color satisfies monochromatic");
            assert!(result.perfect_match);
        }
    }

    #[test]
    fn test_empty_input_is_no_update() {
        assert!(score(&[], SchemeKey::Complementary, 5.0).is_none());

        let mut tracker = ScoreTracker::new(SchemeKey::Complementary, 5.0);
        tracker.update(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)]);
        let retained = tracker.update(&[]);
        assert_eq!(retained.score, 1.0, "empty reading retains the prior score");
    }

    #[test]
    fn test_triadic_exact() {
        let result = score(
            &[hue_color(20.0), hue_color(140.0), hue_color(260.0)],
            SchemeKey::Triadic,
            5.0,
        )
        .unwrap();
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_root_rotation_finds_best_alignment() {
        // A valid split-complementary triple whose reference hue is not
        // the smallest: sorting alone would misalign the offsets, so the
        // scorer must rotate through candidate roots.
        let result = score(
            &[hue_color(300.0), hue_color(108.75), hue_color(131.25)],
            SchemeKey::SplitComplementary,
            5.0,
        )
        .unwrap();
        assert_eq!(result.score, 1.0, "root 300° realizes 168.75/191.25");
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let a = [hue_color(0.0), hue_color(120.0), hue_color(240.0)];
        let b = [hue_color(240.0), hue_color(0.0), hue_color(120.0)];

        let score_a = score(&a, SchemeKey::Triadic, 5.0).unwrap();
        let score_b = score(&b, SchemeKey::Triadic, 5.0).unwrap();
        assert_eq!(score_a.score, score_b.score);
    }

    #[test]
    fn test_score_hex_validates_before_scoring() {
        let err = score_hex(
            &["#ff0000", "definitely not a color"],
            SchemeKey::Complementary,
            5.0,
        )
        .unwrap_err();
        assert!(matches!(err, ParseColorError::InvalidLength));
    }

    #[test]
    fn test_tracker_reset() {
        let mut tracker = ScoreTracker::new(SchemeKey::Monochromatic, 5.0);
        tracker.update(&[hue_color(42.0)]);
        assert_eq!(tracker.current().score, 1.0);

        tracker.reset();
        assert_eq!(tracker.current().score, 0.0);
        assert_eq!(tracker.scheme(), SchemeKey::Monochromatic);
    }
}
