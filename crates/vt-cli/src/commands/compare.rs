//! vt compare command - point-to-closest-point similarity of two contours.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use vt_tools::{ContourError, MetricsParams, p2cp_analysis};

use crate::commands::load_contour;
use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct CompareResult {
    a: String,
    b: String,
    a_points: usize,
    b_points: usize,
    p2cp_mean: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    p2cp_rms: Option<f64>,
    max_closest_distance: f64,
}

pub fn run(a: &Path, b: &Path, rms: bool, cli: &Cli) -> Result<()> {
    let u = load_contour(a)?;
    let v = load_contour(b)?;

    if rms && u.len() != v.len() {
        return Err(ContourError::length_mismatch(u.len(), v.len()).into());
    }

    let analysis = p2cp_analysis(&u, &v, &MetricsParams::default())?;

    let result = CompareResult {
        a: a.display().to_string(),
        b: b.display().to_string(),
        a_points: u.len(),
        b_points: v.len(),
        p2cp_mean: analysis.mean,
        p2cp_rms: if rms { analysis.rms } else { None },
        max_closest_distance: analysis.max_distance(),
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&result, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Contour Comparison".bold().underline());
                println!("  {}: {} ({} points)", "A".cyan(), result.a, result.a_points);
                println!("  {}: {} ({} points)", "B".cyan(), result.b, result.b_points);
                println!("  {}: {:.6}", "P2CP mean".cyan(), result.p2cp_mean);
                if let Some(value) = result.p2cp_rms {
                    println!("  {}: {:.6}", "P2CP RMS".cyan(), value);
                }
                println!(
                    "  {}: {:.6}",
                    "Max closest distance".cyan(),
                    result.max_closest_distance
                );
            }
        }
    }

    Ok(())
}
