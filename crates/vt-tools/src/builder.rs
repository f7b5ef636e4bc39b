//! Fluent builder for snail reconstruction.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use vt_tools::SnailBuilder;
//!
//! let midline = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.2), Point2::new(2.0, 0.1)];
//!
//! let snail = SnailBuilder::new(&midline)
//!     .widths(0.4, 0.6)
//!     .apex_widths(0.2, 0.3)
//!     .apex_samples(12)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(snail.len(), 2 * 2 + 2 * 12);
//! ```

use nalgebra::Point2;

use crate::error::{ContourError, ContourResult};
use crate::snail::{SnailContour, SnailParams, reconstruct_snail_from_midline};

/// Builder for [`reconstruct_snail_from_midline`].
///
/// Base widths are required. Apex widths default to the base widths, which
/// gives a flat taper.
#[derive(Debug, Clone)]
pub struct SnailBuilder<'a> {
    midline: &'a [Point2<f64>],
    widths: Option<(f64, f64)>,
    apex_widths: Option<(f64, f64)>,
    apex_samples: usize,
}

impl<'a> SnailBuilder<'a> {
    /// Start a reconstruction for the given midline.
    pub fn new(midline: &'a [Point2<f64>]) -> Self {
        Self {
            midline,
            widths: None,
            apex_widths: None,
            apex_samples: SnailParams::DEFAULT_APEX_SAMPLES,
        }
    }

    /// Internal and external widths at the open end.
    pub fn widths(mut self, internal: f64, external: f64) -> Self {
        self.widths = Some((internal, external));
        self
    }

    /// Internal and external widths the taper heads towards at the apex.
    pub fn apex_widths(mut self, internal: f64, external: f64) -> Self {
        self.apex_widths = Some((internal, external));
        self
    }

    /// Same width on both sides and at both ends.
    pub fn uniform_width(self, width: f64) -> Self {
        self.widths(width, width).apex_widths(width, width)
    }

    /// Number of cap samples per side.
    pub fn apex_samples(mut self, samples: usize) -> Self {
        self.apex_samples = samples;
        self
    }

    /// Resolve the configured values into [`SnailParams`].
    pub fn params(&self) -> ContourResult<SnailParams> {
        let (width_int, width_ext) = self.widths.ok_or_else(|| {
            ContourError::invalid_parameter("width_int", f64::NAN, "base widths were not set")
        })?;
        let (width_apex_int, width_apex_ext) = self.apex_widths.unwrap_or((width_int, width_ext));
        let params = SnailParams::new(width_int, width_ext, width_apex_int, width_apex_ext)
            .with_apex_samples(self.apex_samples);
        params.validate()?;
        Ok(params)
    }

    /// Run the reconstruction.
    pub fn build(self) -> ContourResult<SnailContour> {
        let params = self.params()?;
        reconstruct_snail_from_midline(self.midline, &params)
    }
}
