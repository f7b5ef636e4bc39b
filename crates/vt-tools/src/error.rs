//! Error types for contour operations with rich diagnostics.
//!
//! This module provides:
//! - Machine-readable error codes for programmatic handling
//! - Context about which point, segment or parameter was rejected
//! - Recovery suggestions for common input problems
//! - Terminal display via miette
//!
//! # Error Codes
//!
//! Each error has a unique code in the format `VT-XXXX`:
//! - `VT-1xxx`: Shape errors (point dimensions, empty sequences, bad coordinates)
//! - `VT-2xxx`: Pairing errors (sequences that must have equal length)
//! - `VT-3xxx`: Degenerate geometry (midlines without usable segments)
//! - `VT-4xxx`: Parameter errors (widths, sample counts)
//!
//! # Example
//!
//! ```
//! use vt_tools::{ContourError, ErrorCode};
//!
//! let err = ContourError::length_mismatch(10, 12);
//! assert_eq!(err.code(), ErrorCode::LengthMismatch);
//! assert_eq!(err.code().as_str(), "VT-2001");
//! ```

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for contour operations.
pub type ContourResult<T> = Result<T, ContourError>;

/// Machine-readable error codes for contour operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Shape errors (1xxx)
    /// VT-1001: Point does not have exactly two coordinates
    Shape = 1001,
    /// VT-1002: Sequence has fewer points than required
    EmptySequence = 1002,
    /// VT-1003: Coordinate is NaN or infinite
    InvalidCoordinate = 1003,
    /// VT-1004: Point index outside the sequence
    IndexOutOfRange = 1004,

    // Pairing errors (2xxx)
    /// VT-2001: Sequences must have the same length
    LengthMismatch = 2001,

    // Degenerate geometry (3xxx)
    /// VT-3001: Midline has no segment to process
    DegenerateMidline = 3001,
    /// VT-3002: Consecutive midline points coincide
    ZeroLengthSegment = 3002,

    // Parameter errors (4xxx)
    /// VT-4001: Parameter outside its valid range
    InvalidParameter = 4001,
}

impl ErrorCode {
    /// Returns the error code as a string in the format `VT-XXXX`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Shape => "VT-1001",
            ErrorCode::EmptySequence => "VT-1002",
            ErrorCode::InvalidCoordinate => "VT-1003",
            ErrorCode::IndexOutOfRange => "VT-1004",
            ErrorCode::LengthMismatch => "VT-2001",
            ErrorCode::DegenerateMidline => "VT-3001",
            ErrorCode::ZeroLengthSegment => "VT-3002",
            ErrorCode::InvalidParameter => "VT-4001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recovery suggestions for contour errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoverySuggestion {
    /// Check the input data for the listed problems.
    CheckInput { checks: Vec<String> },
    /// Resample the contours so they can be paired.
    Resample { target_len: usize },
    /// Remove duplicated consecutive points from the midline.
    DeduplicatePoints,
    /// Adjust parameters for the operation.
    AdjustParameters { parameters: Vec<(String, String)> },
}

impl std::fmt::Display for RecoverySuggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoverySuggestion::CheckInput { checks } => {
                write!(f, "Check the input for: {}", checks.join(", "))
            }
            RecoverySuggestion::Resample { target_len } => {
                write!(
                    f,
                    "Resample both contours to {} points, or use p2cp_mean which accepts unequal lengths",
                    target_len
                )
            }
            RecoverySuggestion::DeduplicatePoints => {
                write!(f, "Remove repeated consecutive points from the midline")
            }
            RecoverySuggestion::AdjustParameters { parameters } => {
                let params: Vec<String> = parameters
                    .iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect();
                write!(f, "Try adjusting: {}", params.join(", "))
            }
        }
    }
}

/// Location information for contour errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ContourLocation {
    /// Error at a specific point of an input sequence.
    Point { index: usize },
    /// Error at a specific midline segment (between points `index` and `index + 1`).
    Segment { index: usize },
    /// Error in a named parameter.
    Parameter { name: &'static str },
}

impl std::fmt::Display for ContourLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContourLocation::Point { index } => write!(f, "point {}", index),
            ContourLocation::Segment { index } => {
                write!(f, "segment {} (points {} and {})", index, index, index + 1)
            }
            ContourLocation::Parameter { name } => write!(f, "parameter `{}`", name),
        }
    }
}

/// Errors that can occur during contour operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ContourError {
    /// A raw point row does not have exactly two coordinates.
    #[error("point {index} has {dimensions} coordinates, expected 2")]
    #[diagnostic(
        code(vt::shape::dimensions),
        help("Contours are 2-D: every row must be an [x, y] pair.")
    )]
    Shape { index: usize, dimensions: usize },

    /// A sequence is shorter than the operation requires.
    #[error("{name} has {actual} points, at least {required} required")]
    #[diagnostic(code(vt::shape::empty), help("Check that the contour was extracted correctly."))]
    EmptySequence {
        name: &'static str,
        required: usize,
        actual: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("invalid coordinate at point {index}: {coordinate} is {value}")]
    #[diagnostic(
        code(vt::shape::coordinate),
        help("Check the source data for numerical issues.")
    )]
    InvalidCoordinate {
        index: usize,
        coordinate: &'static str,
        value: f64,
    },

    /// A point index is outside the sequence.
    #[error("point index {index} is out of range for a sequence of {len} points")]
    #[diagnostic(code(vt::shape::index))]
    IndexOutOfRange { index: usize, len: usize },

    /// Paired statistics were requested for sequences of different length.
    #[error("sequences have different lengths ({left} vs {right}), paired statistics need equal lengths")]
    #[diagnostic(
        code(vt::pairing::length),
        help("Resample the contours to a common length or use the mean p2cp distance.")
    )]
    LengthMismatch { left: usize, right: usize },

    /// The midline has fewer than two points.
    #[error("midline has {points} points, at least 2 are needed to form a segment")]
    #[diagnostic(code(vt::degenerate::midline))]
    DegenerateMidline { points: usize },

    /// Two consecutive midline points coincide, so the segment has no direction.
    #[error("midline segment {segment_index} has zero length")]
    #[diagnostic(
        code(vt::degenerate::segment),
        help("Remove repeated consecutive points from the midline.")
    )]
    ZeroLengthSegment { segment_index: usize },

    /// A parameter is outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {details}")]
    #[diagnostic(code(vt::params::invalid))]
    InvalidParameter {
        name: &'static str,
        value: f64,
        details: String,
    },
}

impl ContourError {
    /// Returns the machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ContourError::Shape { .. } => ErrorCode::Shape,
            ContourError::EmptySequence { .. } => ErrorCode::EmptySequence,
            ContourError::InvalidCoordinate { .. } => ErrorCode::InvalidCoordinate,
            ContourError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            ContourError::LengthMismatch { .. } => ErrorCode::LengthMismatch,
            ContourError::DegenerateMidline { .. } => ErrorCode::DegenerateMidline,
            ContourError::ZeroLengthSegment { .. } => ErrorCode::ZeroLengthSegment,
            ContourError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
        }
    }

    /// Returns a recovery suggestion for this error.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self {
            ContourError::Shape { .. } => RecoverySuggestion::CheckInput {
                checks: vec!["rows are [x, y] pairs".into()],
            },
            ContourError::EmptySequence { .. } => RecoverySuggestion::CheckInput {
                checks: vec!["contour has points".into(), "correct file was passed".into()],
            },
            ContourError::InvalidCoordinate { .. } => RecoverySuggestion::CheckInput {
                checks: vec!["coordinate values".into(), "export precision".into()],
            },
            ContourError::IndexOutOfRange { len, .. } => RecoverySuggestion::AdjustParameters {
                parameters: vec![("index".into(), format!("below {}", len))],
            },
            ContourError::LengthMismatch { left, right } => RecoverySuggestion::Resample {
                target_len: (*left).max(*right),
            },
            ContourError::DegenerateMidline { .. } => RecoverySuggestion::CheckInput {
                checks: vec!["midline has at least two points".into()],
            },
            ContourError::ZeroLengthSegment { .. } => RecoverySuggestion::DeduplicatePoints,
            ContourError::InvalidParameter { name, .. } => RecoverySuggestion::AdjustParameters {
                parameters: vec![((*name).into(), "a finite positive value".into())],
            },
        }
    }

    /// Returns location information if available.
    pub fn location(&self) -> Option<ContourLocation> {
        match self {
            ContourError::Shape { index, .. }
            | ContourError::InvalidCoordinate { index, .. }
            | ContourError::IndexOutOfRange { index, .. } => {
                Some(ContourLocation::Point { index: *index })
            }
            ContourError::ZeroLengthSegment { segment_index } => Some(ContourLocation::Segment {
                index: *segment_index,
            }),
            ContourError::InvalidParameter { name, .. } => {
                Some(ContourLocation::Parameter { name })
            }
            _ => None,
        }
    }

    // Constructor helpers for common error patterns

    /// Create a Shape error.
    pub fn shape(index: usize, dimensions: usize) -> Self {
        ContourError::Shape { index, dimensions }
    }

    /// Create an EmptySequence error.
    pub fn empty_sequence(name: &'static str, required: usize, actual: usize) -> Self {
        ContourError::EmptySequence {
            name,
            required,
            actual,
        }
    }

    /// Create an InvalidCoordinate error.
    pub fn invalid_coordinate(index: usize, coordinate: &'static str, value: f64) -> Self {
        ContourError::InvalidCoordinate {
            index,
            coordinate,
            value,
        }
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        ContourError::LengthMismatch { left, right }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(name: &'static str, value: f64, details: impl Into<String>) -> Self {
        ContourError::InvalidParameter {
            name,
            value,
            details: details.into(),
        }
    }
}
