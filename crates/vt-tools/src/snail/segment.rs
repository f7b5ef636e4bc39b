//! Per-segment geometry: midpoint, orientation and boundary offsets.

use nalgebra::{Point2, Vector2};

use crate::error::{ContourError, ContourResult};
use crate::metrics::euclidean;

/// Midpoint and orientation of one midline segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Center of the segment.
    pub midpoint: Point2<f64>,
    /// Orientation in radians, measured as `atan2(dx, dy)`.
    pub angle: f64,
}

impl Segment {
    /// Compute midpoint and angle of the segment `p1 -> p2`.
    ///
    /// The midpoint is `min + |span| / 2` per axis. The angle takes the
    /// normalized x-span as the first `atan2` argument and the y-span as the
    /// second, which places `0` along +y.
    ///
    /// `index` is only used to report a zero-length segment.
    pub fn from_points(index: usize, p1: &Point2<f64>, p2: &Point2<f64>) -> ContourResult<Self> {
        let midpoint = Point2::new(
            p2.x.min(p1.x) + (p2.x - p1.x).abs() / 2.0,
            p2.y.min(p1.y) + (p2.y - p1.y).abs() / 2.0,
        );

        let hyp = euclidean(p1, p2);
        if hyp == 0.0 {
            return Err(ContourError::ZeroLengthSegment {
                segment_index: index,
            });
        }
        let sin = (p2.y - p1.y) / hyp;
        let cos = (p2.x - p1.x) / hyp;
        let angle = cos.atan2(sin);

        Ok(Self { midpoint, angle })
    }

    /// External and internal boundary points for the given widths, as `(external, internal)`.
    ///
    /// `(w_ext, 0)` and `(-w_int, 0)` are rotated with [`rotate_row`] and
    /// translated to the midpoint.
    pub fn offset_points(&self, w_int: f64, w_ext: f64) -> (Point2<f64>, Point2<f64>) {
        let ext = rotate_row(Vector2::new(w_ext, 0.0), self.angle);
        let int = rotate_row(Vector2::new(-w_int, 0.0), self.angle);
        (self.midpoint + ext, self.midpoint + int)
    }
}

/// Rotate `v` treated as a row vector: `[x, y] · [[cos, -sin], [sin, cos]]`.
///
/// This is a rotation by `-angle` in the usual column-vector convention.
#[inline]
pub fn rotate_row(v: Vector2<f64>, angle: f64) -> Vector2<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}
