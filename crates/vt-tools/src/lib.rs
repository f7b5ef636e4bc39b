//! Geometry utilities for vocal tract contours.
//!
//! This crate works on 2-D contours traced on vocal tract images (tongue,
//! lips, pharynx, cartilages...). Contours are ordered slices of
//! [`nalgebra::Point2<f64>`]; every function takes them by reference and
//! returns freshly allocated results.
//!
//! # Features
//!
//! - **Similarity metrics**: pairwise distance matrices and point-to-closest-point
//!   (p2cp) statistics between two contours ([`metrics`])
//! - **Snail reconstruction**: closed outline of a tapered, apex-capped structure
//!   rebuilt from its midline ([`snail`], [`SnailBuilder`])
//! - **Input validation**: conversion from raw `[x, y]` rows with shape and
//!   coordinate checks ([`points_from_rows`])
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Point2;
//! use vt_tools::{p2cp_mean, p2cp_rms, SnailBuilder};
//!
//! let reference = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
//! let traced = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)];
//!
//! assert_eq!(p2cp_mean(&reference, &traced).unwrap(), 1.0);
//! assert_eq!(p2cp_rms(&reference, &traced).unwrap(), 1.0);
//!
//! let midline = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.3), Point2::new(2.0, 0.4)];
//! let snail = SnailBuilder::new(&midline)
//!     .widths(0.3, 0.5)
//!     .apex_widths(0.1, 0.2)
//!     .build()
//!     .unwrap();
//! println!("{}", snail);
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `ContourResult<T>`, which is `Result<T, ContourError>`.
//!
//! ```
//! use nalgebra::Point2;
//! use vt_tools::{ContourError, p2cp_rms};
//!
//! let u = vec![Point2::new(0.0, 0.0)];
//! let v = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)];
//!
//! match p2cp_rms(&u, &v) {
//!     Err(ContourError::LengthMismatch { left, right }) => {
//!         println!("cannot pair {} with {} points", left, right);
//!     }
//!     Err(e) => println!("Other error: {} ({})", e, e.code()),
//!     Ok(value) => println!("{}", value),
//! }
//! ```
//!
//! # Logging
//!
//! Operations emit `tracing` events under the `vt_tools` target. See
//! [`tracing_ext`] for the available helpers and log levels.

mod builder;
mod error;
mod points;

pub mod metrics;
pub mod snail;
pub mod tracing_ext;

// Re-export core types at crate root
pub use error::{ContourError, ContourLocation, ContourResult, ErrorCode, RecoverySuggestion};
pub use points::{bounds, points_from_rows, points_to_rows, validate_points};

// Builder API
pub use builder::SnailBuilder;

pub use metrics::{
    DistanceMatrix, MetricsParams, P2cpAnalysis, distance_matrix, distance_matrix_with_params,
    euclidean, p2cp, p2cp_analysis, p2cp_mean, p2cp_mean_with_params, p2cp_rms,
    p2cp_rms_with_params,
};
pub use snail::{SnailContour, SnailParams, reconstruct_snail_from_midline};

pub use tracing_ext::{OperationTimer, log_contour_stats, log_metric_result, log_perf_section};
