//! Width taper from the open end of the midline towards the apex.
//!
//! The per-segment step is `atan((apex - base) / segment_count)`, so width `k`
//! is `base + k * atan((apex - base) / segment_count)`. The step is bounded by
//! `±π/2` and the last width only lands near the apex width when the
//! difference per segment is small; it is never forced to hit it.
//!
//! Since `|atan(x)| < |x|` for `x != 0`, every tapered width lies between the
//! base and apex widths. Positive inputs therefore always give positive widths.

/// Per-segment width step for a boundary.
pub fn taper_decay(base: f64, apex: f64, segment_count: usize) -> f64 {
    ((apex - base) / segment_count as f64).atan()
}

/// Widths for segments `0..segment_count`, starting exactly at `base`.
///
/// ```
/// use vt_tools::snail::tapered_widths;
///
/// let widths = tapered_widths(2.0, 1.0, 4);
/// assert_eq!(widths.len(), 4);
/// assert_eq!(widths[0], 2.0);
/// assert!(widths[3] < 2.0);
/// ```
pub fn tapered_widths(base: f64, apex: f64, segment_count: usize) -> Vec<f64> {
    let decay = taper_decay(base, apex, segment_count);
    (0..segment_count)
        .map(|k| decay * k as f64 + base)
        .collect()
}
