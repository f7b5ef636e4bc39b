//! Rounded cap closing the snail at the end of the midline.
//!
//! The cap is built in a local frame where the last segment's boundary points
//! sit at `(w_ext, 0)` and `(-w_int, 0)`. Each side sweeps a quarter turn
//! (`α = π/2 · k/n`) while its radius grows along a half-sine from the side's
//! width to the apex radius. The local frame is then rotated with
//! [`rotate_row`] by the last segment's angle and moved to its midpoint.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Point2, Vector2};

use super::segment::rotate_row;

/// Apex radius for the last tapered widths.
pub const APEX_RADIUS_FACTOR: f64 = 1.2;

/// Synthesize the apex cap.
///
/// Returns `2 * samples` points: the external side for `k = 0..samples`,
/// followed by the internal side for `k = samples-1..=0`. With
/// `samples == 0` the cap is empty.
pub fn apex_cap(
    center: Point2<f64>,
    radius: f64,
    int_width: f64,
    ext_width: f64,
    angle: f64,
    samples: usize,
) -> Vec<Point2<f64>> {
    let fractions: Vec<f64> = (0..samples).map(|k| k as f64 / samples as f64).collect();

    let external = fractions.iter().map(|&s| {
        let alpha = FRAC_PI_2 * s;
        let r = ext_width + half_sine(s) * (radius - ext_width);
        Vector2::new(ext_width * alpha.cos(), r * alpha.sin())
    });
    let internal = fractions.iter().rev().map(|&s| {
        let alpha = FRAC_PI_2 * s;
        let r = int_width + half_sine(s) * (radius - int_width);
        Vector2::new(-int_width * alpha.cos(), r * alpha.sin())
    });

    external
        .chain(internal)
        .map(|local| center + rotate_row(local, angle))
        .collect()
}

/// Half-sine ramp from 0 at `s = 0` to 1 at `s = 1`.
#[inline]
fn half_sine(s: f64) -> f64 {
    ((PI * (-0.5 + s)).sin() + 1.0) / 2.0
}
