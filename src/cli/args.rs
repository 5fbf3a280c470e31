//! Command-line argument definitions for the spectrum normalizer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the spectrum normalizer
///
/// Normalizes messy, delimited RF spectrum captures (frequency/power
/// tables) into a stable report with summary statistics, with no
/// a-priori knowledge of delimiter, header presence, or column order.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spectrum-normalizer",
    version,
    about = "Normalize messy RF spectrum captures into analyzable reports",
    long_about = "Ingests delimited frequency/power captures in unknown formats and produces a \
                  normalized report: detected headers, frequency and power ranges, average power, \
                  and representative sample windows. Delimiter, banner lines, header presence, \
                  and column roles are all inferred heuristically; ambiguous captures fail with \
                  the detected headers and sample rows so columns can be mapped manually."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the spectrum normalizer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze capture files and emit normalized reports
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Capture files or directories to analyze
    ///
    /// Directories are expanded recursively to files with csv, tsv, txt,
    /// or dat extensions.
    #[arg(
        value_name = "PATH",
        required = true,
        help = "Capture files or directories to analyze"
    )]
    pub paths: Vec<PathBuf>,

    /// Output format for the report
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "summary",
        help = "Report output format"
    )]
    pub format: OutputFormat,

    /// Manual frequency column index (0-based)
    ///
    /// Bypasses automatic column resolution. Must be supplied together
    /// with --power-col. Useful after a column detection failure.
    #[arg(
        long = "freq-col",
        value_name = "INDEX",
        help = "Manual frequency column index (requires --power-col)"
    )]
    pub freq_col: Option<usize>,

    /// Manual power column index (0-based)
    #[arg(
        long = "power-col",
        value_name = "INDEX",
        help = "Manual power column index (requires --freq-col)"
    )]
    pub power_col: Option<usize>,

    /// Split on any run of tab/comma/semicolon/space instead of
    /// detecting the delimiter statistically
    #[arg(long = "simple-split", help = "Use fixed character-class splitting")]
    pub simple_split: bool,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress all output except errors and the report itself
    #[arg(short = 'q', long = "quiet", help = "Suppress progress and log output")]
    pub quiet: bool,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable summary
    Summary,
    /// Full report as pretty-printed JSON
    Json,
}

impl AnalyzeArgs {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        match (self.freq_col, self.power_col) {
            (Some(_), None) | (None, Some(_)) => Err(Error::configuration(
                "--freq-col and --power-col must be supplied together",
            )),
            (Some(f), Some(p)) if f == p => Err(Error::configuration(format!(
                "--freq-col and --power-col must differ (both are {})",
                f
            ))),
            _ => Ok(()),
        }
    }

    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}
