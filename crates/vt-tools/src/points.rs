//! Point sequences: conversion from raw rows and input validation.
//!
//! Contours are plain slices of [`Point2<f64>`]. The type system already
//! guarantees two coordinates per point; raw rows coming from JSON or other
//! untyped sources go through [`points_from_rows`], which rejects rows of the
//! wrong width.

use nalgebra::Point2;

use crate::error::{ContourError, ContourResult};

/// Convert raw `[x, y]` rows into points.
///
/// Fails with [`ContourError::Shape`] on the first row that does not hold
/// exactly two values, and with [`ContourError::InvalidCoordinate`] on NaN or
/// infinite values.
///
/// # Example
///
/// ```
/// use vt_tools::points_from_rows;
///
/// let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
/// let points = points_from_rows(&rows).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].y, 3.0);
///
/// assert!(points_from_rows(&[vec![1.0, 2.0, 3.0]]).is_err());
/// ```
pub fn points_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> ContourResult<Vec<Point2<f64>>> {
    let mut points = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match row.as_ref() {
            &[x, y] => {
                let point = Point2::new(x, y);
                check_finite(index, &point)?;
                points.push(point);
            }
            other => return Err(ContourError::shape(index, other.len())),
        }
    }
    Ok(points)
}

/// Convert points back into `[x, y]` rows.
pub fn points_to_rows(points: &[Point2<f64>]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// Check that a sequence has at least `required` points and only finite coordinates.
pub fn validate_points(
    points: &[Point2<f64>],
    name: &'static str,
    required: usize,
) -> ContourResult<()> {
    if points.len() < required {
        return Err(ContourError::empty_sequence(name, required, points.len()));
    }
    for (index, point) in points.iter().enumerate() {
        check_finite(index, point)?;
    }
    Ok(())
}

fn check_finite(index: usize, point: &Point2<f64>) -> ContourResult<()> {
    if !point.x.is_finite() {
        return Err(ContourError::invalid_coordinate(index, "x", point.x));
    }
    if !point.y.is_finite() {
        return Err(ContourError::invalid_coordinate(index, "y", point.y));
    }
    Ok(())
}

/// Axis-aligned bounds of a point sequence as `(min, max)`.
///
/// Returns `None` for an empty sequence.
pub fn bounds(points: &[Point2<f64>]) -> Option<(Point2<f64>, Point2<f64>)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn test_points_from_rows_rejects_wrong_width() {
        let rows = vec![vec![0.0, 0.0], vec![1.0], vec![2.0, 2.0]];
        let err = points_from_rows(&rows).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Shape);
        match err {
            ContourError::Shape { index, dimensions } => {
                assert_eq!(index, 1);
                assert_eq!(dimensions, 1);
            }
            other => panic!("Expected Shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_points_from_rows_rejects_nan() {
        let rows = [[0.0, 0.0], [1.0, f64::NAN]];
        let err = points_from_rows(&rows).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCoordinate);
    }

    #[test]
    fn test_rows_round_trip_preserves_order() {
        let rows = [[3.0, -1.0], [0.5, 2.0]];
        let points = points_from_rows(&rows).unwrap();
        assert_eq!(points_to_rows(&points), rows.to_vec());
    }

    #[test]
    fn test_validate_points() {
        let points = vec![Point2::new(0.0, 0.0)];
        assert!(validate_points(&points, "u", 1).is_ok());

        let err = validate_points(&points, "midline", 2).unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmptySequence);

        let points = vec![Point2::new(f64::INFINITY, 0.0)];
        let err = validate_points(&points, "u", 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCoordinate);
    }

    #[test]
    fn test_bounds() {
        assert!(bounds(&[]).is_none());

        let points = vec![
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ];
        let (min, max) = bounds(&points).unwrap();
        assert_eq!(min, Point2::new(-2.0, -1.0));
        assert_eq!(max, Point2::new(4.0, 5.0));
    }
}
