//! Command implementations for the spectrum normalizer CLI
//!
//! This module contains the command execution logic: logging setup,
//! input expansion, per-file analysis with progress reporting, and
//! rendering of reports and recovery payloads.

use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::app::models::FileAnalysisReport;
use crate::cli::args::{AnalyzeArgs, Args, Commands, OutputFormat};
use crate::config::{ColumnSelection, DelimiterMode, ParseOptions};
use crate::{CaptureParser, Error, Result};

/// File extensions treated as capture exports when expanding directories
const CAPTURE_EXTENSIONS: &[&str] = &["csv", "tsv", "txt", "dat"];

/// Run statistics for final reporting
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of capture files analyzed successfully
    pub files_analyzed: usize,
    /// Number of files that failed
    pub errors_encountered: usize,
    /// Total points retained across all reports
    pub points_retained: usize,
    /// Total run time
    pub run_time: std::time::Duration,
}

/// Main command runner
pub async fn run(args: Args) -> Result<RunStats> {
    match args.command {
        Some(Commands::Analyze(analyze_args)) => analyze(analyze_args).await,
        None => Err(Error::configuration("no command provided")),
    }
}

/// Execute the analyze command over every requested capture
async fn analyze(args: AnalyzeArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args);
    args.validate()?;

    let files = expand_paths(&args.paths)?;
    info!("Analyzing {} capture file(s)", files.len());

    let parser = CaptureParser::with_options(parse_options(&args));

    let progress_bar = if files.len() > 1 && !args.quiet {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut stats = RunStats::default();
    let mut last_error: Option<Error> = None;

    for (i, file) in files.iter().enumerate() {
        if let Some(pb) = &progress_bar {
            pb.set_position(i as u64);
            pb.set_message(format!("{}", file.display()));
        }

        match parser.parse_file(file).await {
            Ok(report) => {
                stats.files_analyzed += 1;
                stats.points_retained += report.row_count;
                render_report(&report, args.format)?;
            }
            Err(e) => {
                error!("Failed to analyze {}: {}", file.display(), e);
                render_failure(&e);
                stats.errors_encountered += 1;
                last_error = Some(e);
            }
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    stats.run_time = start_time.elapsed();

    if !args.quiet && files.len() > 1 {
        println!(
            "{} {} file(s), {} point(s) retained, {} error(s) in {}",
            "Done:".green().bold(),
            stats.files_analyzed,
            stats.points_retained,
            stats.errors_encountered,
            HumanDuration(stats.run_time)
        );
    }

    // A run where nothing succeeded propagates the last failure.
    if stats.files_analyzed == 0 {
        if let Some(e) = last_error {
            return Err(e);
        }
    }

    Ok(stats)
}

/// Set up structured logging on stderr
fn setup_logging(args: &AnalyzeArgs) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("spectrum_normalizer={}", args.log_level())));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    debug!("Logging initialized at level: {}", args.log_level());
}

/// Map CLI flags onto parser options
fn parse_options(args: &AnalyzeArgs) -> ParseOptions {
    let delimiter_mode = if args.simple_split {
        DelimiterMode::Simple
    } else {
        DelimiterMode::Adaptive
    };

    let columns = match (args.freq_col, args.power_col) {
        (Some(freq_index), Some(power_index)) => ColumnSelection::Manual {
            freq_index,
            power_index,
        },
        _ => ColumnSelection::Auto,
    };

    ParseOptions {
        delimiter_mode,
        columns,
    }
}

/// Expand path arguments, walking directories for capture extensions
fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let is_capture = entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| CAPTURE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                    .unwrap_or(false);
                if is_capture {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    if files.is_empty() {
        return Err(Error::configuration(
            "no capture files found in the given paths",
        ));
    }

    files.sort();
    Ok(files)
}

/// Print one report in the requested format
fn render_report(report: &FileAnalysisReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| Error::configuration(format!("failed to serialize report: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Summary => {
            println!("{}", report.file_name.bold());
            println!(
                "  {} rows x {} columns ({})",
                report.row_count,
                report.column_count,
                report.headers.join(", ")
            );
            println!(
                "  frequency: {:.4} - {:.4} MHz",
                report.stats.frequency.min, report.stats.frequency.max
            );
            println!(
                "  power: {:.2} - {:.2} dBm (avg {:.2})",
                report.stats.power.min, report.stats.power.max, report.stats.power.avg
            );
            if let Some(peak) = report.samples.peak_power_rows.first() {
                println!(
                    "  peak: {} dBm @ {:.4} MHz",
                    format!("{:.2}", peak.power).yellow(),
                    peak.frequency
                );
            }
        }
    }
    Ok(())
}

/// Print a failure; column detection failures include their recovery
/// payload and the override flags that resolve them
fn render_failure(error: &Error) {
    eprintln!("{} {}", "error:".red().bold(), error);

    if let Error::ColumnDetection {
        headers,
        sample_rows,
        ..
    } = error
    {
        eprintln!("  detected headers: {}", headers.join(", "));
        for row in sample_rows {
            eprintln!("    {}", row.join(" | "));
        }
        eprintln!(
            "  {}",
            "re-run with --freq-col <INDEX> --power-col <INDEX> to map columns manually".cyan()
        );
    }
}
