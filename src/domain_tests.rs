//! Domain-critical regression tests for color-zones.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use std::collections::HashSet;

    use crate::color::Rgb;
    use crate::harmony::{score, SchemeKey, ScoreTracker};
    use crate::palette::Palette;
    use crate::segment::{Discard, PaletteAssigner, ZoneDetector};
    use crate::zones::{PixelPos, ZoneKey};

    /// Deterministic varied test image in row-major order.
    fn varied_image(width: usize, height: usize) -> Vec<Rgb> {
        (0..width * height)
            .map(|i| {
                Rgb::new(
                    ((i * 7) % 256) as u8,
                    ((i * 13 + 40) % 256) as u8,
                    ((i * 29 + 90) % 256) as u8,
                )
            })
            .collect()
    }

    /// True if `pixels` form one 4-connected component.
    fn is_4_connected(pixels: &[PixelPos]) -> bool {
        let set: HashSet<PixelPos> = pixels.iter().copied().collect();
        let Some(&start) = pixels.first() else {
            return true;
        };

        let mut seen = HashSet::from([start]);
        let mut queue = vec![start];
        while let Some(pos) = queue.pop() {
            let (x, y) = (pos.x as i64, pos.y as i64);
            for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                if nx < 0 || ny < 0 {
                    continue;
                }
                let neighbor = PixelPos::new(nx as u32, ny as u32);
                if set.contains(&neighbor) && seen.insert(neighbor) {
                    queue.push(neighbor);
                }
            }
        }
        seen.len() == set.len()
    }

    // ========================================================================
    // Partition property: palette assignment covers every pixel exactly once
    // ========================================================================

    /// If this breaks, it means: the assigner is dropping pixels or
    /// assigning one pixel to several zones, so repainting by zone would
    /// leave holes or double-paint.
    #[test]
    fn test_assigner_partitions_every_image() {
        let palette =
            Palette::from_hex(&["#000000", "#ff0000", "#00ff00", "#ffffff"]).unwrap();
        let assigner = PaletteAssigner::new(palette);

        for (width, height) in [(1, 1), (7, 3), (16, 16), (5, 11)] {
            let pixels = varied_image(width, height);
            let seg = assigner.segment(&pixels, width, height, &mut Discard).unwrap();

            assert!(
                seg.is_partition(),
                "REGRESSION: {width}x{height} result is not a partition"
            );

            // Exactly-once, checked pixel by pixel across all zones
            let mut seen = HashSet::new();
            for (key, zone) in seg.zone_map() {
                for &pos in zone {
                    assert!(
                        seen.insert(pos),
                        "REGRESSION: {pos:?} appears in more than one zone (dup in {key})"
                    );
                }
            }
            assert_eq!(seen.len(), width * height);
        }
    }

    // ========================================================================
    // Nearest-color property: assignment minimizes distance, ties go left
    // ========================================================================

    /// If this breaks, it means: the assigner no longer picks the closest
    /// palette entry for some pixel, or the strict `<` tie-break drifted
    /// to `<=` and equidistant pixels started flipping to later entries.
    #[test]
    fn test_assigner_nearest_color_and_tie_break() {
        let colors = ["#000000", "#ffffff", "#ff0000", "#00aaff"];
        let palette = Palette::from_hex(&colors).unwrap();
        let assigner = PaletteAssigner::new(palette.clone());

        let (width, height) = (12, 9);
        let pixels = varied_image(width, height);
        let seg = assigner.segment(&pixels, width, height, &mut Discard).unwrap();

        for y in 0..height {
            for x in 0..width {
                let pos = PixelPos::new(x as u32, y as u32);
                let pixel = pixels[pos.flat_index(width)];
                let assigned = seg.zone_at(pos).unwrap().color();

                let assigned_dist = pixel.distance_squared(assigned);
                for &entry in palette.colors() {
                    assert!(
                        assigned_dist <= pixel.distance_squared(entry),
                        "REGRESSION: pixel {pixel} at {pos:?} assigned {assigned} \
                         but {entry} is closer"
                    );
                }
            }
        }

        // Exact tie: (10,10,10) is closer to black; (127,0,0) is exactly
        // between #000000 and #fe0000 and must go to the earlier entry.
        let tie_palette = Palette::from_hex(&["#000000", "#fe0000"]).unwrap();
        let tie = PaletteAssigner::new(tie_palette)
            .segment(&[Rgb::new(10, 10, 10), Rgb::new(127, 0, 0)], 2, 1, &mut Discard)
            .unwrap();
        assert_eq!(
            tie.zone_at(PixelPos::new(0, 0)).unwrap(),
            ZoneKey::of(Rgb::new(0, 0, 0))
        );
        assert_eq!(
            tie.zone_at(PixelPos::new(1, 0)).unwrap(),
            ZoneKey::of(Rgb::new(0, 0, 0)),
            "REGRESSION: equidistant pixel flipped away from the first palette entry"
        );
    }

    // ========================================================================
    // Connectivity property: flood-fill zones are 4-connected to their seed
    // ========================================================================

    /// If this breaks, it means: the flood fill is leaking across
    /// dissimilar boundaries (or accepting diagonal neighbors), so a zone
    /// contains pixels with no 4-connected path back to its seed.
    #[test]
    fn test_detector_zones_are_4_connected() {
        // Distinct, mutually dissimilar colors so the merge pass keeps
        // every discovered region as its own zone; an L-shaped region and
        // a diagonally-touching pixel probe the connectivity rules.
        let a = Rgb::new(10, 10, 10);
        let b = Rgb::new(120, 120, 120);
        let c = Rgb::new(240, 240, 240);
        #[rustfmt::skip]
        let pixels = vec![
            a, a, c, c,
            a, b, b, c,
            a, b, c, c,
        ];

        let seg = ZoneDetector::new().detect(&pixels, 4, 3, &mut Discard).unwrap();

        for (key, zone) in seg.zone_map() {
            assert!(
                is_4_connected(zone),
                "REGRESSION: zone {key} is not 4-connected: {zone:?}"
            );
        }

        // The diagonal c-pixel at (2,0)..(3,0) block and the c-block on
        // row 2 connect only through (3,1): all one zone.
        assert_eq!(seg.zone_count(), 3);
        assert_eq!(seg.assigned_pixels(), 12);
    }

    // ========================================================================
    // Non-transitive merge: pairwise behavior is preserved, index stays sane
    // ========================================================================

    /// If this breaks, it means: the merge pass was "fixed" into a
    /// transitive closure (changing which zones users see), or the
    /// inverse index lost its first-claim determinism.
    ///
    /// The fixture is a similarity chain: a ~ b and b ~ c but not a ~ c
    /// (channel means 0, 15 and 30 against the default lightness
    /// tolerance of 20). Spacer pixels keep the three from being absorbed
    /// into one fill during discovery.
    #[test]
    fn test_detector_pairwise_merge_is_order_dependent_not_transitive() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(0, 0, 45);
        let c = Rgb::new(0, 0, 90);
        let spacer = Rgb::new(255, 255, 255);
        let pixels = vec![a, spacer, b, spacer, c];

        let seg = ZoneDetector::new().detect(&pixels, 5, 1, &mut Discard).unwrap();

        let key_a = ZoneKey::of(a);
        let key_b = ZoneKey::of(b);
        let key_c = ZoneKey::of(c);
        let key_spacer = ZoneKey::of(spacer);

        // Pairwise merge: a's zone pulls in b, b's pulls in a and c, c's
        // pulls in b. Four keys survive and pixels repeat across them.
        assert_eq!(seg.zone_count(), 4);
        assert_eq!(
            seg.zone(&key_a).unwrap(),
            &[PixelPos::new(0, 0), PixelPos::new(2, 0)]
        );
        assert_eq!(
            seg.zone(&key_b).unwrap(),
            &[PixelPos::new(0, 0), PixelPos::new(2, 0), PixelPos::new(4, 0)]
        );
        assert_eq!(
            seg.zone(&key_c).unwrap(),
            &[PixelPos::new(2, 0), PixelPos::new(4, 0)]
        );
        assert_eq!(
            seg.zone(&key_spacer).unwrap(),
            &[PixelPos::new(1, 0), PixelPos::new(3, 0)]
        );
        assert!(!seg.is_partition(), "overlapping merge cannot be a partition");

        // First-claim inverse index: a's merged zone claims pixels 0 and
        // 2 first; c's pixel is first claimed by b's merged zone.
        assert_eq!(seg.assigned_pixels(), 5);
        assert_eq!(seg.zone_at(PixelPos::new(0, 0)), Some(key_a));
        assert_eq!(seg.zone_at(PixelPos::new(2, 0)), Some(key_a));
        assert_eq!(seg.zone_at(PixelPos::new(4, 0)), Some(key_b));
        assert_eq!(seg.zone_at(PixelPos::new(1, 0)), Some(key_spacer));
    }

    // ========================================================================
    // Hex round-trip: parse(render(c)) is the identity on 24-bit colors
    // ========================================================================

    /// If this breaks, it means: hex rendering and parsing disagree, so
    /// zone keys would stop matching the palette strings hosts hold.
    #[test]
    fn test_hex_round_trip_identity() {
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let color = Rgb::new(r as u8, g as u8, b as u8);
                    assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
                }
            }
        }
    }

    // ========================================================================
    // Scorer exact scenarios
    // ========================================================================

    /// If this breaks, it means: the scoring formula drifted from the
    /// published behavior (ceiling `360 + 2 * tolerance`, tolerance
    /// collapse, fixed offset order), so hosts would display different
    /// scores for identical colorings.
    #[test]
    fn test_scorer_published_scenarios() {
        let tolerance = 5.0;

        // Complementary, hues 0° and 180°: perfect.
        let perfect = score(
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)],
            SchemeKey::Complementary,
            tolerance,
        )
        .unwrap();
        assert_eq!(perfect.score, 1.0);
        assert!(perfect.perfect_match);
        assert_eq!(perfect.identified_scheme(), Some(SchemeKey::Complementary));

        // Complementary, hues 0° and 168° (12° off, outside tolerance):
        // score = 1 - 12 / (360 + 2*5).
        let off = score(
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 204)],
            SchemeKey::Complementary,
            tolerance,
        )
        .unwrap();
        assert!((off.score - (1.0 - 12.0 / 370.0)).abs() < 1e-9);
        assert!(!off.perfect_match);

        // Triadic needs 3 colors; 2 are forced to 0.
        let incomplete = score(
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)],
            SchemeKey::Triadic,
            tolerance,
        )
        .unwrap();
        assert_eq!(incomplete.score, 0.0);

        // Monochromatic: one color of any hue is perfect.
        let mono = score(&[Rgb::new(3, 200, 90)], SchemeKey::Monochromatic, tolerance).unwrap();
        assert_eq!(mono.score, 1.0);
        assert!(mono.perfect_match);

        // Zero colors: no recomputation, prior score kept.
        assert!(score(&[], SchemeKey::Triadic, tolerance).is_none());
        let mut tracker = ScoreTracker::new(SchemeKey::Complementary, tolerance);
        tracker.update(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)]);
        assert_eq!(tracker.update(&[]).score, 1.0);
    }

    // ========================================================================
    // Strategy-independent invariant: inverse index points into its zone
    // ========================================================================

    /// If this breaks, it means: hit-testing would send a recolor event
    /// to a zone that does not actually contain the clicked pixel.
    #[test]
    fn test_inverse_index_consistent_for_both_strategies() {
        let (width, height) = (9, 6);
        let pixels = varied_image(width, height);

        let palette = Palette::from_hex(&["#202020", "#c0c0c0"]).unwrap();
        let assigned = PaletteAssigner::new(palette)
            .segment(&pixels, width, height, &mut Discard)
            .unwrap();
        let detected = ZoneDetector::new()
            .detect(&pixels, width, height, &mut Discard)
            .unwrap();

        for seg in [&assigned, &detected] {
            assert_eq!(seg.assigned_pixels(), width * height);
            for (&flat, key) in seg.inverse_index() {
                let zone = seg.zone(key).expect("index key must name a zone");
                assert!(
                    zone.iter().any(|p| p.flat_index(width) == flat),
                    "index entry {flat} -> {key} not contained in its zone"
                );
            }
        }
    }
}
