//! Core parsing orchestration
//!
//! `CaptureParser` runs the linear normalization pipeline: read text →
//! split lines → detect delimiter → locate the data start → classify the
//! header → resolve column roles → materialize rows → assemble the
//! report. Each failure is terminal for the invocation and surfaced to
//! the caller; nothing is logged-and-swallowed.
//!
//! The parse is synchronous-sequential with exactly one suspension
//! point, the initial bulk read. Callers are responsible for bounding
//! input size before invocation; the whole segment is materialized in
//! memory by design.

use std::path::Path;

use tracing::{debug, info, warn};

use super::columns::{self, ColumnRoles};
use super::delimiter::{self, Delimiter};
use super::layout;
use super::report;
use crate::app::models::FileAnalysisReport;
use crate::config::{ColumnSelection, DelimiterMode, ParseOptions};
use crate::constants::RECOMMENDED_MAX_INPUT_BYTES;
use crate::{Error, Result};

/// Heuristic normalizer for delimited RF spectrum captures
///
/// Each invocation is independent and reentrant; the parser holds no
/// state beyond its options, so concurrent parses of different inputs
/// are safe.
#[derive(Debug, Clone, Default)]
pub struct CaptureParser {
    options: ParseOptions,
}

impl CaptureParser {
    /// Create a parser with default options (adaptive delimiter
    /// detection, automatic column resolution)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Read a capture file and normalize it into a report.
    ///
    /// The bulk read is the pipeline's only await point; everything after
    /// it runs synchronously to completion or failure. No retries, no
    /// cancellation.
    pub async fn parse_file(&self, file_path: &Path) -> Result<FileAnalysisReport> {
        info!("Parsing capture file: {}", file_path.display());

        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            Error::io(
                format!("failed to read capture {}", file_path.display()),
                e,
            )
        })?;

        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.display().to_string());

        self.parse_str(&file_name, &content)
    }

    /// Normalize capture text already held in memory.
    ///
    /// `file_name` is carried through into the report verbatim.
    pub fn parse_str(&self, file_name: &str, content: &str) -> Result<FileAnalysisReport> {
        self.options.validate()?;

        if content.len() > RECOMMENDED_MAX_INPUT_BYTES {
            warn!(
                "capture '{}' is {} bytes, above the recommended {} byte slice bound",
                file_name,
                content.len(),
                RECOMMENDED_MAX_INPUT_BYTES
            );
        }

        // Blank lines are dropped before any structural analysis; CRLF is
        // handled by lines().
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect();

        if lines.is_empty() {
            return Err(Error::empty_input(format!(
                "capture '{}' contains no non-blank lines",
                file_name
            )));
        }

        let rows = self.tokenize(&lines);

        let data_start = layout::locate_data_start(&rows);
        let table = layout::classify(&rows, data_start);
        let data_rows = &rows[table.data_start..];

        if data_rows.is_empty() {
            return Err(Error::empty_input(format!(
                "capture '{}' has a header but no data rows",
                file_name
            )));
        }

        let roles = self.resolve_roles(&table.headers, table.synthetic_headers, data_rows)?;
        debug!(
            "resolved columns for '{}': frequency={}, power={}",
            file_name, roles.freq_index, roles.power_index
        );

        let analysis = report::assemble(file_name, table.headers, data_rows, roles)?;
        info!(
            "normalized '{}': {} points, {} columns",
            file_name, analysis.row_count, analysis.column_count
        );
        Ok(analysis)
    }

    /// Split every line into trimmed cells according to the delimiter mode
    fn tokenize(&self, lines: &[&str]) -> Vec<Vec<String>> {
        match self.options.delimiter_mode {
            DelimiterMode::Simple => lines.iter().map(|line| delimiter::split_any(line)).collect(),
            DelimiterMode::Adaptive => {
                let detected: Delimiter = delimiter::detect(lines);
                lines.iter().map(|line| detected.split(line)).collect()
            }
        }
    }

    /// Resolve column roles, or take the caller's explicit indices
    fn resolve_roles(
        &self,
        headers: &[String],
        synthetic_headers: bool,
        data_rows: &[Vec<String>],
    ) -> Result<ColumnRoles> {
        match self.options.columns {
            ColumnSelection::Manual {
                freq_index,
                power_index,
            } => {
                debug!(
                    "manual column override: frequency={}, power={}",
                    freq_index, power_index
                );
                Ok(ColumnRoles {
                    freq_index,
                    power_index,
                })
            }
            ColumnSelection::Auto => columns::resolve(headers, synthetic_headers, data_rows),
        }
    }
}
