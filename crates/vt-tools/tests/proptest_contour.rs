//! Property-based tests for contour metrics and snail reconstruction.
//!
//! These tests use proptest to generate random contours and verify invariants.
//!
//! Run with: cargo test -p vt-tools -- proptest

use nalgebra::Point2;
use proptest::prelude::*;
use vt_tools::snail::tapered_widths;
use vt_tools::{
    ErrorCode, MetricsParams, SnailParams, distance_matrix_with_params, euclidean, p2cp_mean,
    p2cp_rms, reconstruct_snail_from_midline,
};

// =============================================================================
// Strategies for generating random contours
// =============================================================================

/// Generate a random point in a bounded range.
fn arb_point() -> impl Strategy<Value = Point2<f64>> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Point2::new(x, y))
}

/// Generate a contour with a point count in the given range.
fn arb_contour(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(arb_point(), min_len..=max_len)
}

/// Generate a midline running strictly left to right, so no segment has zero
/// length and the endpoints never share an x-coordinate.
fn arb_midline(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec((0.1..5.0f64, -3.0..3.0f64), min_len..=max_len).prop_map(|steps| {
        let mut x = 0.0;
        steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                Point2::new(x, y)
            })
            .collect()
    })
}

/// Generate positive widths.
fn arb_width() -> impl Strategy<Value = f64> {
    0.05..3.0f64
}

// =============================================================================
// Property Tests: Distance metrics
// =============================================================================

proptest! {
    /// Distance from a point to itself is zero.
    #[test]
    fn proptest_euclidean_identity(p in arb_point()) {
        prop_assert_eq!(euclidean(&p, &p), 0.0);
    }

    /// Distance is symmetric.
    #[test]
    fn proptest_euclidean_symmetry(a in arb_point(), b in arb_point()) {
        prop_assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }

    /// A contour compared with itself scores zero.
    #[test]
    fn proptest_p2cp_mean_self_is_zero(u in arb_contour(1, 40)) {
        prop_assert_eq!(p2cp_mean(&u, &u).unwrap(), 0.0);
    }

    /// The mean score does not depend on argument order.
    #[test]
    fn proptest_p2cp_mean_is_symmetric(u in arb_contour(1, 30), v in arb_contour(1, 30)) {
        prop_assert_eq!(p2cp_mean(&u, &v).unwrap(), p2cp_mean(&v, &u).unwrap());
    }

    /// Scaling both contours scales the score.
    #[test]
    fn proptest_p2cp_mean_scales_linearly(
        u in arb_contour(1, 20),
        v in arb_contour(1, 20),
        k in 0.1..10.0f64,
    ) {
        let scale = |c: &[Point2<f64>]| -> Vec<Point2<f64>> {
            c.iter().map(|p| Point2::new(p.x * k, p.y * k)).collect()
        };
        let base = p2cp_mean(&u, &v).unwrap();
        let scaled = p2cp_mean(&scale(&u), &scale(&v)).unwrap();
        prop_assert!((scaled - k * base).abs() <= 1e-9 * (1.0 + k * base));
    }

    /// Paired statistic needs equal lengths.
    #[test]
    fn proptest_p2cp_rms_length_check(u in arb_contour(1, 20), v in arb_contour(1, 20)) {
        let result = p2cp_rms(&u, &v);
        if u.len() == v.len() {
            prop_assert!(result.unwrap() >= 0.0);
        } else {
            prop_assert_eq!(result.unwrap_err().code(), ErrorCode::LengthMismatch);
        }
    }

    /// Parallel and serial matrix filling produce identical bits.
    #[test]
    fn proptest_parallel_matrix_is_deterministic(u in arb_contour(1, 60), v in arb_contour(1, 60)) {
        let serial = distance_matrix_with_params(&u, &v, &MetricsParams::serial()).unwrap();
        let parallel = distance_matrix_with_params(&u, &v, &MetricsParams::parallel()).unwrap();
        prop_assert_eq!(serial, parallel);
    }
}

// =============================================================================
// Property Tests: Snail reconstruction
// =============================================================================

proptest! {
    /// Outline length is two points per segment plus the cap.
    #[test]
    fn proptest_snail_point_count(
        midline in arb_midline(2, 30),
        w in arb_width(),
        samples in 0usize..40,
    ) {
        let params = SnailParams::uniform(w).with_apex_samples(samples);
        let snail = reconstruct_snail_from_midline(&midline, &params).unwrap();
        prop_assert_eq!(snail.len(), 2 * (midline.len() - 1) + 2 * samples);
    }

    /// Tracing direction does not change the outline.
    #[test]
    fn proptest_snail_orientation_invariance(
        midline in arb_midline(2, 25),
        wi in arb_width(),
        we in arb_width(),
        wai in arb_width(),
        wae in arb_width(),
    ) {
        let params = SnailParams::new(wi, we, wai, wae);
        let reversed: Vec<_> = midline.iter().rev().copied().collect();

        let forward = reconstruct_snail_from_midline(&midline, &params).unwrap();
        let backward = reconstruct_snail_from_midline(&reversed, &params).unwrap();
        prop_assert_eq!(forward.points, backward.points);
    }

    /// The first segment always uses the untapered widths.
    #[test]
    fn proptest_snail_taper_starts_at_base(
        midline in arb_midline(2, 25),
        wi in arb_width(),
        we in arb_width(),
        wai in arb_width(),
        wae in arb_width(),
    ) {
        let snail = reconstruct_snail_from_midline(&midline, &SnailParams::new(wi, we, wai, wae))
            .unwrap();
        prop_assert_eq!(snail.widths_int[0], wi);
        prop_assert_eq!(snail.widths_ext[0], we);
    }

    /// Tapered widths never leave the range spanned by base and apex widths.
    #[test]
    fn proptest_taper_stays_between_base_and_apex(
        base in arb_width(),
        apex in arb_width(),
        segments in 1usize..200,
    ) {
        let lo = base.min(apex);
        let hi = base.max(apex);
        for w in tapered_widths(base, apex, segments) {
            prop_assert!(w >= lo && w <= hi, "width {} outside [{}, {}]", w, lo, hi);
        }
    }

    /// Every outline coordinate is finite for valid input.
    #[test]
    fn proptest_snail_output_is_finite(midline in arb_midline(2, 25), w in arb_width()) {
        let snail = reconstruct_snail_from_midline(&midline, &SnailParams::uniform(w)).unwrap();
        prop_assert!(snail.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
