//! Tracing extensions for contour operations.
//!
//! Structured logging and timing for metric and reconstruction calls, built on
//! the `tracing` ecosystem. Nothing is emitted unless the application installs
//! a subscriber:
//!
//! ```rust,ignore
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env())
//!     .init();
//!
//! // RUST_LOG=vt_tools=debug for detailed output
//! ```
//!
//! # Log Levels
//!
//! - **INFO**: operation timing
//! - **DEBUG**: contour sizes, metric values, reconstruction summaries
//! - **TRACE**: per-section performance timing

use std::time::Instant;

use nalgebra::Point2;
use tracing::span::EnteredSpan;
use tracing::{Span, debug, info, trace};

/// A performance timer that logs duration on drop.
///
/// The `contour_operation` span is entered for the lifetime of the timer, so
/// events emitted while it is alive are grouped under it.
///
/// ```rust,ignore
/// use vt_tools::tracing_ext::OperationTimer;
///
/// fn expensive_operation() {
///     let _timer = OperationTimer::new("expensive_operation");
///     // ... do work ...
/// } // Timer logs duration when dropped
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
    span: EnteredSpan,
}

impl OperationTimer {
    /// Create a new operation timer.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!("contour_operation", operation = name).entered();
        debug!(target: "vt_tools::timing", operation = name, "Starting operation");
        Self {
            name,
            start: Instant::now(),
            span,
        }
    }

    /// Create a timer that also records the sizes of the two inputs.
    pub fn with_sizes(name: &'static str, left: usize, right: usize) -> Self {
        let span = tracing::info_span!(
            "contour_operation",
            operation = name,
            left = left,
            right = right
        )
        .entered();
        debug!(
            target: "vt_tools::timing",
            operation = name,
            left = left,
            right = right,
            "Starting operation"
        );
        Self {
            name,
            start: Instant::now(),
            span,
        }
    }

    /// Get the elapsed time.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Get the span for this timer.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        info!(
            target: "vt_tools::timing",
            operation = self.name,
            elapsed_ms = format!("{:.3}", elapsed_ms),
            "Operation completed"
        );
    }
}

/// Log the size and extent of a contour at debug level.
pub fn log_contour_stats(points: &[Point2<f64>], context: &str) {
    let (min, max) = crate::points::bounds(points).unwrap_or((Point2::origin(), Point2::origin()));
    let dims = max - min;

    debug!(
        target: "vt_tools::contour",
        context = context,
        points = points.len(),
        dimensions = format!("{:.3} x {:.3}", dims.x, dims.y),
        "Contour state"
    );
}

/// Log a computed metric value.
pub fn log_metric_result(metric: &str, left: usize, right: usize, value: f64) {
    debug!(
        target: "vt_tools::metrics",
        metric = metric,
        left = left,
        right = right,
        value = value,
        "Metric computed"
    );
}

/// Log a performance-critical section.
///
/// Returns a guard that logs when dropped.
#[must_use]
pub fn log_perf_section(name: &'static str) -> impl Drop {
    struct PerfGuard {
        name: &'static str,
        start: Instant,
    }
    impl Drop for PerfGuard {
        fn drop(&mut self) {
            let elapsed = self.start.elapsed();
            trace!(
                target: "vt_tools::perf",
                section = self.name,
                elapsed_us = elapsed.as_micros(),
                "Performance section completed"
            );
        }
    }
    PerfGuard {
        name,
        start: Instant::now(),
    }
}
