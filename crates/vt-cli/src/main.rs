//! vt: Command-line interface for vocal tract contour tools.
//!
//! Compares traced contours with the point-to-closest-point metrics and
//! rebuilds snail-shaped structures from their midlines.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=vt_tools=info` - Basic operation logging
//! - `RUST_LOG=vt_tools=debug` - Contour statistics and intermediate values
//! - `RUST_LOG=vt_tools::timing=info` - Performance timing
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Compare two tongue contours
//! vt compare reference.json traced.json --rms
//!
//! # Rebuild an arytenoid outline with debug logging
//! RUST_LOG=vt_tools=debug vt snail midline.json -o outline.json \
//!     --width-int 0.3 --width-ext 0.5 --apex-width-int 0.1 --apex-width-ext 0.2
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{compare, matrix, snail};

/// vt - Geometry tools for vocal tract contours.
///
/// Contour files are JSON arrays of `[x, y]` rows.
#[derive(Parser)]
#[command(name = "vt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the similarity of two contours
    Compare {
        /// Reference contour file
        a: PathBuf,

        /// Contour file to compare against the reference
        b: PathBuf,

        /// Also compute the paired statistic (requires equal point counts)
        #[arg(long)]
        rms: bool,
    },

    /// Print the pairwise distance matrix between two contours
    Matrix {
        /// First contour file (matrix rows)
        a: PathBuf,

        /// Second contour file (matrix columns)
        b: PathBuf,

        /// Decimal places in text output
        #[arg(long, default_value = "4")]
        precision: usize,
    },

    /// Rebuild a closed snail outline from a midline
    Snail {
        /// Midline contour file
        input: PathBuf,

        /// Output contour file
        #[arg(short, long)]
        output: PathBuf,

        /// Internal width at the open end
        #[arg(long)]
        width_int: f64,

        /// External width at the open end
        #[arg(long)]
        width_ext: f64,

        /// Internal width towards the apex
        #[arg(long)]
        apex_width_int: f64,

        /// External width towards the apex
        #[arg(long)]
        apex_width_ext: f64,

        /// Number of apex cap samples per side
        #[arg(long, default_value = "20")]
        apex_samples: usize,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "vt_tools=info,vt=info",
            2 => "vt_tools=debug,vt=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Compare { a, b, rms } => compare::run(a, b, *rms, &cli),
        Commands::Matrix { a, b, precision } => matrix::run(a, b, *precision, &cli),
        Commands::Snail {
            input,
            output,
            width_int,
            width_ext,
            apex_width_int,
            apex_width_ext,
            apex_samples,
        } => {
            let params = vt_tools::SnailParams::new(
                *width_int,
                *width_ext,
                *apex_width_int,
                *apex_width_ext,
            )
            .with_apex_samples(*apex_samples);
            snail::run(input, output, &params, &cli)
        }
    };

    if let Err(e) = &result {
        if !cli.quiet {
            for (label, message) in error_report(e) {
                let label = match label {
                    "Error" => label.red().bold(),
                    "Code" => label.cyan(),
                    "Suggestion" => label.green(),
                    _ => label.yellow(),
                };
                eprintln!("{}: {}", label, message);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Labelled lines describing a failed command, first line is the error itself.
///
/// Contour errors are reported with their own message, followed by any context
/// a command attached, the code, the suggestion and the location.
fn error_report(e: &anyhow::Error) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();
    if let Some(contour_err) = e.downcast_ref::<vt_tools::ContourError>() {
        lines.push(("Error", contour_err.to_string()));
        let outer = e.to_string();
        if outer != contour_err.to_string() {
            lines.push(("Context", outer));
        }
        lines.push(("Code", contour_err.code().to_string()));
        lines.push(("Suggestion", contour_err.recovery_suggestion().to_string()));
        if let Some(location) = contour_err.location() {
            lines.push(("Location", location.to_string()));
        }
    } else {
        lines.push(("Error", e.to_string()));
        for cause in e.chain().skip(1) {
            lines.push(("Caused by", cause.to_string()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use vt_tools::ContourError;

    #[test]
    fn test_report_shows_contour_message_under_context() {
        let err = Err::<(), _>(ContourError::ZeroLengthSegment { segment_index: 1 })
            .context("Failed to reconstruct outline")
            .unwrap_err();

        let lines = error_report(&err);
        let message = ContourError::ZeroLengthSegment { segment_index: 1 }.to_string();
        assert_eq!(lines[0], ("Error", message));
        assert_eq!(
            lines[1],
            ("Context", "Failed to reconstruct outline".to_string())
        );
        assert!(lines.contains(&("Code", "VT-3002".to_string())));
        assert!(lines.iter().any(|(label, _)| *label == "Location"));
    }

    #[test]
    fn test_report_without_context() {
        let err = anyhow::Error::from(ContourError::length_mismatch(3, 4));

        let lines = error_report(&err);
        assert_eq!(lines[0].0, "Error");
        assert_eq!(lines[1], ("Code", "VT-2001".to_string()));
        assert!(lines.iter().all(|(label, _)| *label != "Context"));
    }

    #[test]
    fn test_report_for_other_errors_lists_causes() {
        let err = anyhow::anyhow!("disk full").context("Failed to write contour");

        let lines = error_report(&err);
        assert_eq!(lines[0], ("Error", "Failed to write contour".to_string()));
        assert_eq!(lines[1], ("Caused by", "disk full".to_string()));
    }
}
