//! Subcommands and the contour file I/O they share.

pub mod compare;
pub mod matrix;
pub mod snail;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Point2;
use tracing::debug;
use vt_tools::{points_from_rows, points_to_rows};

/// Load a contour stored as a JSON array of `[x, y]` rows.
pub fn load_contour(path: &Path) -> Result<Vec<Point2<f64>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open contour file {:?}", path))?;
    let rows: Vec<Vec<f64>> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse contour JSON from {:?}", path))?;
    let points = points_from_rows(&rows)?;
    debug!(path = %path.display(), points = points.len(), "Loaded contour");
    Ok(points)
}

/// Save a contour as a JSON array of `[x, y]` rows.
pub fn save_contour(path: &Path, points: &[Point2<f64>]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &points_to_rows(points))
        .with_context(|| format!("Failed to write contour to {:?}", path))?;
    writer.flush()?;
    debug!(path = %path.display(), points = points.len(), "Saved contour");
    Ok(())
}
