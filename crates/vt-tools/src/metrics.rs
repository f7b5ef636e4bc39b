//! Point-to-closest-point (p2cp) distance metrics between two contours.
//!
//! Every statistic here is derived from the pairwise [`DistanceMatrix`] between
//! two point sequences `U` and `V`:
//!
//! - the *row minimum* of row `i` is the distance from `U[i]` to its closest point in `V`,
//! - the *column minimum* of column `j` is the distance from `V[j]` to its closest point in `U`.
//!
//! [`p2cp_mean`] averages both directions and accepts contours of different
//! density. [`p2cp_rms`] pairs the two directions position by position and
//! therefore needs equal lengths.
//!
//! # Determinism
//!
//! Large matrices are filled in parallel with rayon, one row per task. Each
//! entry is an independent IEEE computation and every reduction (minima and
//! sums) runs sequentially in index order, so results are bit-identical to the
//! serial path and across runs.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use vt_tools::metrics::{distance_matrix, p2cp_mean};
//!
//! let u = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
//! let v = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)];
//!
//! let matrix = distance_matrix(&u, &v).unwrap();
//! assert_eq!(matrix.get(0, 0), 1.0);
//! assert_eq!(matrix.get(0, 1), 2.0_f64.sqrt());
//!
//! assert_eq!(p2cp_mean(&u, &v).unwrap(), 1.0);
//! ```

use nalgebra::Point2;
use rayon::prelude::*;

use crate::error::{ContourError, ContourResult};
use crate::points::validate_points;
use crate::tracing_ext::{OperationTimer, log_metric_result, log_perf_section};

/// Parameters for distance metric computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsParams {
    /// Number of point pairs (`|U| * |V|`) from which the distance matrix is
    /// filled in parallel. Below it, a plain nested loop is used.
    ///
    /// Default: `16_384` (e.g. two contours of 128 points)
    pub parallel_threshold: usize,
}

impl Default for MetricsParams {
    fn default() -> Self {
        Self {
            parallel_threshold: 16_384,
        }
    }
}

impl MetricsParams {
    /// Always use the serial nested loop.
    pub fn serial() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Always fill the matrix in parallel.
    pub fn parallel() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }
}

/// Pairwise Euclidean distances between two point sequences.
///
/// Stored row-major in a single flat buffer: entry `(i, j)` is the distance
/// between `U[i]` and `V[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of rows (`|U|`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`|V|`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance between `U[i]` and `V[j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(j < self.cols, "column {} out of range ({})", j, self.cols);
        self.data[i * self.cols + j]
    }

    /// Distances from `U[i]` to every point of `V`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Distances from `V[j]` to every point of `U`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(j).step_by(self.cols).copied()
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Closest distance for each point of `U` (minimum of each row).
    pub fn row_minima(&self) -> Vec<f64> {
        self.data
            .chunks_exact(self.cols)
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }

    /// Closest distance for each point of `V` (minimum of each column).
    pub fn column_minima(&self) -> Vec<f64> {
        let mut minima = vec![f64::INFINITY; self.cols];
        for row in self.data.chunks_exact(self.cols) {
            for (min, &d) in minima.iter_mut().zip(row) {
                *min = min.min(d);
            }
        }
        minima
    }

    /// Copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks_exact(self.cols)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Per-point closest distances in both directions, with the summary statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct P2cpAnalysis {
    /// Distance from each point of `U` to its closest point in `V`.
    pub u_to_v: Vec<f64>,
    /// Distance from each point of `V` to its closest point in `U`.
    pub v_to_u: Vec<f64>,
    /// Symmetric mean p2cp distance (see [`p2cp_mean`]).
    pub mean: f64,
    /// Paired p2cp statistic (see [`p2cp_rms`]); `None` when the lengths differ.
    pub rms: Option<f64>,
}

impl P2cpAnalysis {
    /// Largest closest-point distance in either direction.
    pub fn max_distance(&self) -> f64 {
        self.u_to_v
            .iter()
            .chain(&self.v_to_u)
            .copied()
            .fold(0.0, f64::max)
    }
}

impl std::fmt::Display for P2cpAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "P2CP Analysis:")?;
        writeln!(
            f,
            "  Points: {} vs {}",
            self.u_to_v.len(),
            self.v_to_u.len()
        )?;
        writeln!(f, "  Mean: {:.6}", self.mean)?;
        match self.rms {
            Some(rms) => writeln!(f, "  RMS: {:.6}", rms)?,
            None => writeln!(f, "  RMS: n/a (unequal lengths)")?,
        }
        write!(f, "  Max closest distance: {:.6}", self.max_distance())
    }
}

/// Euclidean distance between two 2-D points.
///
/// Computed as `sqrt(dx² + dy²)` with no intermediate scaling, so the result is
/// reproducible bit for bit.
///
/// ```
/// use nalgebra::Point2;
/// use vt_tools::euclidean;
///
/// let d = euclidean(&Point2::new(3.0, 0.0), &Point2::new(0.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
#[inline]
pub fn euclidean(u: &Point2<f64>, v: &Point2<f64>) -> f64 {
    let dx = u.x - v.x;
    let dy = u.y - v.y;
    (dx * dx + dy * dy).sqrt()
}

/// Compute the distance matrix between `u` and `v` with default parameters.
pub fn distance_matrix(u: &[Point2<f64>], v: &[Point2<f64>]) -> ContourResult<DistanceMatrix> {
    distance_matrix_with_params(u, v, &MetricsParams::default())
}

/// Compute the distance matrix between `u` and `v`.
///
/// Fails if either sequence is empty or holds a non-finite coordinate.
pub fn distance_matrix_with_params(
    u: &[Point2<f64>],
    v: &[Point2<f64>],
    params: &MetricsParams,
) -> ContourResult<DistanceMatrix> {
    validate_points(u, "u", 1)?;
    validate_points(v, "v", 1)?;
    Ok(fill_matrix(u, v, params))
}

fn fill_matrix(u: &[Point2<f64>], v: &[Point2<f64>], params: &MetricsParams) -> DistanceMatrix {
    let _perf = log_perf_section("distance_matrix");
    let rows = u.len();
    let cols = v.len();
    let mut data = vec![0.0; rows * cols];

    let fill_row = |row: &mut [f64], ui: &Point2<f64>| {
        for (d, vj) in row.iter_mut().zip(v) {
            *d = euclidean(ui, vj);
        }
    };

    if rows * cols >= params.parallel_threshold {
        data.par_chunks_mut(cols)
            .zip(u.par_iter())
            .for_each(|(row, ui)| fill_row(row, ui));
    } else {
        for (row, ui) in data.chunks_mut(cols).zip(u) {
            fill_row(row, ui);
        }
    }

    DistanceMatrix { rows, cols, data }
}

/// Distance from `u[i]` to its closest point in `v`.
pub fn p2cp(i: usize, u: &[Point2<f64>], v: &[Point2<f64>]) -> ContourResult<f64> {
    validate_points(u, "u", 1)?;
    validate_points(v, "v", 1)?;
    let ui = u.get(i).ok_or(ContourError::IndexOutOfRange {
        index: i,
        len: u.len(),
    })?;
    Ok(v.iter()
        .map(|vj| euclidean(ui, vj))
        .fold(f64::INFINITY, f64::min))
}

/// Symmetric mean point-to-closest-point distance with default parameters.
pub fn p2cp_mean(u: &[Point2<f64>], v: &[Point2<f64>]) -> ContourResult<f64> {
    p2cp_mean_with_params(u, v, &MetricsParams::default())
}

/// Symmetric mean point-to-closest-point distance.
///
/// The mean of the row minima and the mean of the column minima are averaged,
/// so each contour weighs the same regardless of its point count.
pub fn p2cp_mean_with_params(
    u: &[Point2<f64>],
    v: &[Point2<f64>],
    params: &MetricsParams,
) -> ContourResult<f64> {
    let _timer = OperationTimer::with_sizes("p2cp_mean", u.len(), v.len());
    let matrix = distance_matrix_with_params(u, v, params)?;
    let mean = mean_from_minima(&matrix.row_minima(), &matrix.column_minima());
    log_metric_result("p2cp_mean", u.len(), v.len(), mean);
    Ok(mean)
}

/// Paired point-to-closest-point statistic with default parameters.
pub fn p2cp_rms(u: &[Point2<f64>], v: &[Point2<f64>]) -> ContourResult<f64> {
    p2cp_rms_with_params(u, v, &MetricsParams::default())
}

/// Paired point-to-closest-point statistic.
///
/// Requires `|u| == |v|`. For each index `i` the closest distance of `u[i]`
/// and the closest distance of `v[i]` are averaged; the squares of these
/// averages are summed and divided by `N`. No square root is taken.
///
/// The pairing is positional: it is only meaningful when both contours are
/// sampled with the same parametrization.
pub fn p2cp_rms_with_params(
    u: &[Point2<f64>],
    v: &[Point2<f64>],
    params: &MetricsParams,
) -> ContourResult<f64> {
    if u.len() != v.len() {
        return Err(ContourError::length_mismatch(u.len(), v.len()));
    }
    let _timer = OperationTimer::with_sizes("p2cp_rms", u.len(), v.len());
    let matrix = distance_matrix_with_params(u, v, params)?;
    let rms = rms_from_minima(&matrix.row_minima(), &matrix.column_minima());
    log_metric_result("p2cp_rms", u.len(), v.len(), rms);
    Ok(rms)
}

/// Compute both directions of closest distances and the summary statistics in
/// a single matrix pass.
pub fn p2cp_analysis(
    u: &[Point2<f64>],
    v: &[Point2<f64>],
    params: &MetricsParams,
) -> ContourResult<P2cpAnalysis> {
    let _timer = OperationTimer::with_sizes("p2cp_analysis", u.len(), v.len());
    let matrix = distance_matrix_with_params(u, v, params)?;
    let u_to_v = matrix.row_minima();
    let v_to_u = matrix.column_minima();

    let mean = mean_from_minima(&u_to_v, &v_to_u);
    let rms = (u_to_v.len() == v_to_u.len()).then(|| rms_from_minima(&u_to_v, &v_to_u));

    Ok(P2cpAnalysis {
        u_to_v,
        v_to_u,
        mean,
        rms,
    })
}

fn mean_from_minima(u_to_v: &[f64], v_to_u: &[f64]) -> f64 {
    let u_mean = u_to_v.iter().sum::<f64>() / u_to_v.len() as f64;
    let v_mean = v_to_u.iter().sum::<f64>() / v_to_u.len() as f64;
    (u_mean + v_mean) / 2.0
}

fn rms_from_minima(u_to_v: &[f64], v_to_u: &[f64]) -> f64 {
    let sum: f64 = u_to_v
        .iter()
        .zip(v_to_u)
        .map(|(a, b)| {
            let paired = (a + b) / 2.0;
            paired * paired
        })
        .sum();
    sum / u_to_v.len() as f64
}
