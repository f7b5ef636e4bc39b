//! Snail-shape reconstruction from a midline.
//!
//! Some vocal tract structures (e.g. the arytenoid cartilage) are traced as a
//! single centerline. This module rebuilds a closed outline around that
//! midline: an internal and an external boundary offset from each segment by a
//! tapering width, joined at the far end by a rounded apex cap.
//!
//! # Algorithm
//!
//! 1. The midline is reversed if it runs right to left, so the internal and
//!    external sides are always on the same anatomical side.
//! 2. Each segment contributes a midpoint and an orientation ([`Segment`]).
//! 3. Internal and external widths taper per segment ([`tapered_widths`]).
//! 4. Each segment yields one internal and one external boundary point.
//! 5. An apex cap ([`apex_cap`]) is synthesized around the last midpoint.
//! 6. The outline is internal boundary, cap (reversed), external boundary (reversed).
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use vt_tools::snail::{SnailParams, reconstruct_snail_from_midline};
//!
//! let midline = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.5),
//!     Point2::new(2.0, 0.8),
//! ];
//! let params = SnailParams::new(0.4, 0.6, 0.2, 0.3).with_apex_samples(10);
//!
//! let snail = reconstruct_snail_from_midline(&midline, &params).unwrap();
//! assert_eq!(snail.len(), 2 * 2 + 2 * 10);
//! ```

mod apex;
mod segment;
mod taper;

pub use apex::{APEX_RADIUS_FACTOR, apex_cap};
pub use segment::{Segment, rotate_row};
pub use taper::{taper_decay, tapered_widths};

use nalgebra::Point2;
use tracing::debug;

use crate::error::{ContourError, ContourResult};
use crate::points::validate_points;
use crate::tracing_ext::{OperationTimer, log_contour_stats};

/// Width profile and sampling for snail reconstruction.
///
/// All widths are in the same units as the midline coordinates and must be
/// finite and strictly positive.
///
/// # Example
///
/// ```
/// use vt_tools::snail::SnailParams;
///
/// let params = SnailParams::new(1.0, 1.5, 0.3, 0.5);
/// assert_eq!(params.apex_samples, SnailParams::DEFAULT_APEX_SAMPLES);
///
/// let coarse = params.with_apex_samples(8);
/// assert_eq!(coarse.apex_samples, 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnailParams {
    /// Internal width at the open end of the midline.
    pub width_int: f64,
    /// External width at the open end of the midline.
    pub width_ext: f64,
    /// Internal width the taper heads towards at the apex.
    pub width_apex_int: f64,
    /// External width the taper heads towards at the apex.
    pub width_apex_ext: f64,
    /// Number of cap samples per side.
    ///
    /// Default: `20`
    #[cfg_attr(feature = "serde", serde(default = "default_apex_samples"))]
    pub apex_samples: usize,
}

#[cfg(feature = "serde")]
fn default_apex_samples() -> usize {
    SnailParams::DEFAULT_APEX_SAMPLES
}

impl SnailParams {
    /// Cap samples per side used unless configured otherwise.
    pub const DEFAULT_APEX_SAMPLES: usize = 20;

    /// Create params from the four widths with the default apex sampling.
    pub fn new(width_int: f64, width_ext: f64, width_apex_int: f64, width_apex_ext: f64) -> Self {
        Self {
            width_int,
            width_ext,
            width_apex_int,
            width_apex_ext,
            apex_samples: Self::DEFAULT_APEX_SAMPLES,
        }
    }

    /// Same width everywhere (no taper).
    pub fn uniform(width: f64) -> Self {
        Self::new(width, width, width, width)
    }

    /// Set the number of cap samples per side.
    pub fn with_apex_samples(mut self, apex_samples: usize) -> Self {
        self.apex_samples = apex_samples;
        self
    }

    /// Check that every width is finite and positive.
    pub fn validate(&self) -> ContourResult<()> {
        let widths = [
            ("width_int", self.width_int),
            ("width_ext", self.width_ext),
            ("width_apex_int", self.width_apex_int),
            ("width_apex_ext", self.width_apex_ext),
        ];
        for (name, value) in widths {
            if !value.is_finite() {
                return Err(ContourError::invalid_parameter(name, value, "must be finite"));
            }
            if value <= 0.0 {
                return Err(ContourError::invalid_parameter(name, value, "must be positive"));
            }
        }
        Ok(())
    }
}

/// A reconstructed snail outline with the intermediate values that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnailContour {
    /// Closed outline: internal boundary, apex cap, external boundary.
    pub points: Vec<Point2<f64>>,
    /// Number of midline segments.
    pub segment_count: usize,
    /// Tapered internal width per segment.
    pub widths_int: Vec<f64>,
    /// Tapered external width per segment.
    pub widths_ext: Vec<f64>,
    /// Radius the cap grows to.
    pub apex_radius: f64,
    /// Orientation of the last segment, used to rotate the cap.
    pub apex_angle: f64,
    /// Midpoint of the last segment, center of the cap.
    pub apex_center: Point2<f64>,
    /// Whether the midline was reversed to run left to right.
    pub reversed: bool,
}

impl SnailContour {
    /// Total number of outline points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Internal boundary points, one per segment, from the open end to the apex.
    ///
    /// Empty if `segment_count` does not fit the outline.
    pub fn internal_boundary(&self) -> &[Point2<f64>] {
        self.split().map(|(internal, _, _)| internal).unwrap_or_default()
    }

    /// Apex cap points in outline order.
    pub fn apex(&self) -> &[Point2<f64>] {
        self.split().map(|(_, apex, _)| apex).unwrap_or_default()
    }

    /// External boundary points, one per segment, from the apex back to the open end.
    pub fn external_boundary(&self) -> &[Point2<f64>] {
        self.split().map(|(_, _, external)| external).unwrap_or_default()
    }

    fn split(&self) -> Option<(&[Point2<f64>], &[Point2<f64>], &[Point2<f64>])> {
        let cap_end = self.points.len().checked_sub(self.segment_count)?;
        let internal = self.points.get(..self.segment_count)?;
        let apex = self.points.get(self.segment_count..cap_end)?;
        let external = self.points.get(cap_end..)?;
        Some((internal, apex, external))
    }

    /// Consume the result and keep only the outline.
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }
}

impl std::fmt::Display for SnailContour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Snail Reconstruction:")?;
        writeln!(f, "  Segments: {}", self.segment_count)?;
        writeln!(f, "  Outline points: {}", self.points.len())?;
        if let (Some(int), Some(ext)) = (self.widths_int.last(), self.widths_ext.last()) {
            writeln!(f, "  Apex widths: {:.4} (int) / {:.4} (ext)", int, ext)?;
        }
        writeln!(f, "  Apex radius: {:.4}", self.apex_radius)?;
        write!(f, "  Midline reversed: {}", self.reversed)
    }
}

/// Reconstruct a closed snail outline from a midline.
///
/// The outline has `2 * segments + 2 * apex_samples` points.
///
/// # Errors
///
/// - [`ContourError::DegenerateMidline`] for fewer than two points
/// - [`ContourError::InvalidCoordinate`] for NaN or infinite coordinates
/// - [`ContourError::InvalidParameter`] for non-finite or non-positive widths
/// - [`ContourError::ZeroLengthSegment`] when two consecutive points coincide
pub fn reconstruct_snail_from_midline(
    midline: &[Point2<f64>],
    params: &SnailParams,
) -> ContourResult<SnailContour> {
    if midline.len() < 2 {
        return Err(ContourError::DegenerateMidline {
            points: midline.len(),
        });
    }
    validate_points(midline, "midline", 2)?;
    params.validate()?;

    let _timer = OperationTimer::new("reconstruct_snail");
    log_contour_stats(midline, "midline");

    let reversed = midline[0].x > midline[midline.len() - 1].x;
    let ordered: Vec<Point2<f64>> = if reversed {
        midline.iter().rev().copied().collect()
    } else {
        midline.to_vec()
    };

    let segments = ordered
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Segment::from_points(i, &pair[0], &pair[1]))
        .collect::<ContourResult<Vec<_>>>()?;
    let segment_count = segments.len();

    let widths_int = tapered_widths(params.width_int, params.width_apex_int, segment_count);
    let widths_ext = tapered_widths(params.width_ext, params.width_apex_ext, segment_count);
    let (external, internal): (Vec<_>, Vec<_>) = segments
        .iter()
        .zip(widths_int.iter().zip(&widths_ext))
        .map(|(segment, (&wi, &we))| segment.offset_points(wi, we))
        .unzip();

    let last = segments[segment_count - 1];
    let int_width = widths_int[segment_count - 1];
    let ext_width = widths_ext[segment_count - 1];
    let apex_radius = int_width.max(ext_width) * APEX_RADIUS_FACTOR;
    let cap = apex_cap(
        last.midpoint,
        apex_radius,
        int_width,
        ext_width,
        last.angle,
        params.apex_samples,
    );

    let mut points = Vec::with_capacity(2 * segment_count + cap.len());
    points.extend(internal);
    points.extend(cap.into_iter().rev());
    points.extend(external.into_iter().rev());

    debug!(
        segments = segment_count,
        points = points.len(),
        apex_radius = apex_radius,
        reversed = reversed,
        "Snail reconstructed"
    );

    Ok(SnailContour {
        points,
        segment_count,
        widths_int,
        widths_ext,
        apex_radius,
        apex_angle: last.angle,
        apex_center: last.midpoint,
        reversed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn curved_midline() -> Vec<Point2<f64>> {
        (0..12)
            .map(|i| {
                let t = i as f64 / 11.0;
                Point2::new(4.0 * t, (3.0 * t).sin())
            })
            .collect()
    }

    #[test]
    fn test_single_segment_point_count() {
        let midline = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let snail = reconstruct_snail_from_midline(&midline, &SnailParams::uniform(0.2)).unwrap();
        assert_eq!(snail.segment_count, 1);
        assert_eq!(snail.len(), 2 + 2 * SnailParams::DEFAULT_APEX_SAMPLES);
    }

    #[test]
    fn test_point_count_formula() {
        let midline = curved_midline();
        let params = SnailParams::new(0.5, 0.7, 0.2, 0.3).with_apex_samples(7);
        let snail = reconstruct_snail_from_midline(&midline, &params).unwrap();
        assert_eq!(snail.segment_count, 11);
        assert_eq!(snail.len(), 2 * 11 + 2 * 7);
        assert_eq!(snail.internal_boundary().len(), 11);
        assert_eq!(snail.apex().len(), 14);
        assert_eq!(snail.external_boundary().len(), 11);
    }

    #[test]
    fn test_zero_apex_samples() {
        let midline = curved_midline();
        let params = SnailParams::uniform(0.3).with_apex_samples(0);
        let snail = reconstruct_snail_from_midline(&midline, &params).unwrap();
        assert_eq!(snail.len(), 22);
        assert!(snail.apex().is_empty());
    }

    #[test]
    fn test_orientation_invariance() {
        let midline = curved_midline();
        let reversed: Vec<_> = midline.iter().rev().copied().collect();
        let params = SnailParams::new(0.5, 0.7, 0.2, 0.3);

        let a = reconstruct_snail_from_midline(&midline, &params).unwrap();
        let b = reconstruct_snail_from_midline(&reversed, &params).unwrap();
        assert!(!a.reversed);
        assert!(b.reversed);
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn test_taper_endpoints() {
        let midline = curved_midline();
        let params = SnailParams::new(0.5, 0.7, 0.2, 0.3);
        let snail = reconstruct_snail_from_midline(&midline, &params).unwrap();

        assert_eq!(snail.widths_int[0], 0.5);
        assert_eq!(snail.widths_ext[0], 0.7);

        let n = snail.segment_count as f64;
        let last_int = 0.5 + (n - 1.0) * ((0.2 - 0.5) / n).atan();
        let last_ext = 0.7 + (n - 1.0) * ((0.3 - 0.7) / n).atan();
        assert_eq!(*snail.widths_int.last().unwrap(), last_int);
        assert_eq!(*snail.widths_ext.last().unwrap(), last_ext);
        assert!(approx_eq(snail.apex_radius, last_int.max(last_ext) * 1.2));
    }

    #[test]
    fn test_horizontal_midline_sides() {
        let midline = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)];
        let params = SnailParams::uniform(0.5).with_apex_samples(4);
        let snail = reconstruct_snail_from_midline(&midline, &params).unwrap();

        let internal = snail.internal_boundary()[0];
        let external = snail.external_boundary()[0];
        assert!(approx_eq(internal.x, 1.0));
        assert!(approx_eq(internal.y, 0.5));
        assert!(approx_eq(external.x, 1.0));
        assert!(approx_eq(external.y, -0.5));

        // The cap extends forward from the last midpoint
        assert!(snail.apex().iter().any(|p| p.x > 1.5));
    }

    #[test]
    fn test_cap_joins_both_boundaries() {
        let midline = curved_midline();
        let params = SnailParams::new(0.5, 0.7, 0.2, 0.3).with_apex_samples(6);
        let snail = reconstruct_snail_from_midline(&midline, &params).unwrap();

        let n = snail.segment_count;
        // Cap starts on the last internal point and ends on the last external point
        assert_eq!(snail.points[n], snail.points[n - 1]);
        assert_eq!(snail.points[n + 11], snail.points[n + 12]);
    }

    #[test]
    fn test_scaling_with_flat_taper() {
        let midline = curved_midline();
        let k = 2.5;
        let scaled: Vec<_> = midline.iter().map(|p| Point2::new(p.x * k, p.y * k)).collect();

        let a = reconstruct_snail_from_midline(&midline, &SnailParams::uniform(0.4)).unwrap();
        let b = reconstruct_snail_from_midline(&scaled, &SnailParams::uniform(0.4 * k)).unwrap();
        for (p, q) in a.points.iter().zip(&b.points) {
            assert!(approx_eq(p.x * k, q.x));
            assert!(approx_eq(p.y * k, q.y));
        }
    }

    #[test]
    fn test_degenerate_midline() {
        let err = reconstruct_snail_from_midline(&[Point2::new(0.0, 0.0)], &SnailParams::uniform(1.0))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DegenerateMidline);

        let err = reconstruct_snail_from_midline(&[], &SnailParams::uniform(1.0)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DegenerateMidline);
    }

    #[test]
    fn test_zero_length_segment_reports_index() {
        let midline = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let err =
            reconstruct_snail_from_midline(&midline, &SnailParams::uniform(1.0)).unwrap_err();
        match err {
            ContourError::ZeroLengthSegment { segment_index } => assert_eq!(segment_index, 1),
            other => panic!("Expected ZeroLengthSegment, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_positive_widths() {
        let midline = curved_midline();
        let err = reconstruct_snail_from_midline(&midline, &SnailParams::new(0.0, 1.0, 1.0, 1.0))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParameter);

        let err =
            reconstruct_snail_from_midline(&midline, &SnailParams::new(1.0, 1.0, 1.0, f64::NAN))
                .unwrap_err();
        assert!(err.to_string().contains("width_apex_ext"));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let midline: Vec<_> = curved_midline().into_iter().rev().collect();
        let copy = midline.clone();
        let _ = reconstruct_snail_from_midline(&midline, &SnailParams::uniform(0.3)).unwrap();
        assert_eq!(midline, copy);
    }

    #[test]
    fn test_inconsistent_segment_count_gives_empty_parts() {
        let mut snail =
            reconstruct_snail_from_midline(&curved_midline(), &SnailParams::uniform(0.3)).unwrap();
        snail.segment_count = snail.points.len();

        assert!(snail.internal_boundary().is_empty());
        assert!(snail.apex().is_empty());
        assert!(snail.external_boundary().is_empty());
    }
}
