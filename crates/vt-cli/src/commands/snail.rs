//! vt snail command - rebuild a closed outline from a midline.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use vt_tools::{SnailParams, reconstruct_snail_from_midline};

use crate::commands::{load_contour, save_contour};
use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct SnailResult {
    input: String,
    output: String,
    midline_points: usize,
    outline_points: usize,
    apex_radius: f64,
    apex_width_int: f64,
    apex_width_ext: f64,
    midline_reversed: bool,
    params: SnailParams,
}

pub fn run(input: &Path, output_path: &Path, params: &SnailParams, cli: &Cli) -> Result<()> {
    let midline = load_contour(input)?;

    output::info(
        &format!("Reconstructing outline from {} midline points", midline.len()),
        cli.format,
        cli.quiet,
    );
    if params.apex_samples == 0 {
        output::warning("apex samples set to 0, the outline has no cap", cli.quiet);
    }

    let snail = reconstruct_snail_from_midline(&midline, params)
        .with_context(|| format!("Failed to reconstruct outline from {:?}", input))?;

    save_contour(output_path, &snail.points)?;

    let result = SnailResult {
        input: input.display().to_string(),
        output: output_path.display().to_string(),
        midline_points: midline.len(),
        outline_points: snail.len(),
        apex_radius: snail.apex_radius,
        apex_width_int: snail.widths_int.last().copied().unwrap_or(params.width_int),
        apex_width_ext: snail.widths_ext.last().copied().unwrap_or(params.width_ext),
        midline_reversed: snail.reversed,
        params: params.clone(),
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&result, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                output::success(
                    &format!("Outline saved to {}", output_path.display()),
                    cli.format,
                    cli.quiet,
                );
                println!(
                    "  {}: {} midline → {} outline",
                    "Points".cyan(),
                    result.midline_points,
                    result.outline_points
                );
                println!(
                    "  {}: {:.4} (int) / {:.4} (ext)",
                    "Apex widths".cyan(),
                    result.apex_width_int,
                    result.apex_width_ext
                );
                println!("  {}: {:.4}", "Apex radius".cyan(), result.apex_radius);
                if result.midline_reversed {
                    println!("  {}: midline ran right to left", "Reversed".yellow());
                }
            }
        }
    }

    Ok(())
}
