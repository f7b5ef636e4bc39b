//! Output helpers shared by all commands.
//!
//! In JSON mode only structured results reach stdout, so status messages are
//! dropped to keep the stream parseable.

use colored::Colorize;
use serde::Serialize;

use crate::OutputFormat;

/// Print a structured result as pretty JSON.
///
/// Commands call this in JSON mode and format their own text output.
pub fn print<T: Serialize>(value: &T, quiet: bool) {
    if quiet {
        return;
    }
    match render(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}: failed to serialize result: {}", "Error".red().bold(), e),
    }
}

fn render<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Print a progress message.
pub fn info(message: &str, format: OutputFormat, quiet: bool) {
    if quiet || matches!(format, OutputFormat::Json) {
        return;
    }
    println!("{} {}", "→".blue(), message);
}

/// Print a completion message.
pub fn success(message: &str, format: OutputFormat, quiet: bool) {
    if quiet || matches!(format, OutputFormat::Json) {
        return;
    }
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning to stderr.
pub fn warning(message: &str, quiet: bool) {
    if quiet {
        return;
    }
    eprintln!("{}: {}", "Warning".yellow().bold(), message);
}
