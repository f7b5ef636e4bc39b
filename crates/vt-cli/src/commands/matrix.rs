//! vt matrix command - pairwise distances between two contours.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use vt_tools::distance_matrix;

use crate::commands::load_contour;
use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct MatrixResult {
    rows: usize,
    cols: usize,
    distances: Vec<Vec<f64>>,
}

pub fn run(a: &Path, b: &Path, precision: usize, cli: &Cli) -> Result<()> {
    let u = load_contour(a)?;
    let v = load_contour(b)?;

    let matrix = distance_matrix(&u, &v)?;

    match cli.format {
        OutputFormat::Json => {
            let result = MatrixResult {
                rows: matrix.rows(),
                cols: matrix.cols(),
                distances: matrix.to_rows(),
            };
            output::print(&result, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!(
                    "{} ({} x {})",
                    "Distance Matrix".bold().underline(),
                    matrix.rows(),
                    matrix.cols()
                );
                for i in 0..matrix.rows() {
                    let line: Vec<String> = matrix
                        .row(i)
                        .iter()
                        .map(|d| format!("{:.*}", precision, d))
                        .collect();
                    println!("  {}", line.join(" "));
                }
            }
        }
    }

    Ok(())
}
