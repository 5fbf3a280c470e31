//! Data-start location and header classification
//!
//! Instrument exports often prepend free-text banner lines (device
//! identifiers, capture settings) before the real table. This module
//! finds the first line that looks like tabular data, pulls in an
//! immediately preceding header row when one is present, and decides
//! whether the table leads with a header or is headerless (in which case
//! synthetic column names are generated).

use tracing::debug;

use super::fields::is_numeric_token;
use crate::constants::DATA_START_SCAN_LINES;

/// Result of classifying the relevant slice of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Detected or synthesized column names
    pub headers: Vec<String>,
    /// Whether the header row was synthesized (`Column 1…N`)
    pub synthetic_headers: bool,
    /// Index of the first data row, relative to the full row slice
    pub data_start: usize,
}

/// Locate the first row index that looks like genuine tabular data.
///
/// Scans at most the first [`DATA_START_SCAN_LINES`] rows. A row
/// qualifies when it has at least two cells and a numeric first cell. If
/// the immediately preceding row has the same column count but is not
/// fully numeric, it is treated as the table's header and the start index
/// shifts back to include it. Falls back to index 0 when nothing in the
/// scan window qualifies.
pub fn locate_data_start(rows: &[Vec<String>]) -> usize {
    for (index, row) in rows.iter().take(DATA_START_SCAN_LINES).enumerate() {
        if row.len() < 2 || !is_numeric_token(&row[0]) {
            continue;
        }

        if index > 0 {
            let previous = &rows[index - 1];
            let fully_numeric = previous.iter().all(|cell| is_numeric_token(cell));
            if previous.len() == row.len() && !fully_numeric {
                debug!("data starts at row {}, preceding row kept as header", index);
                return index - 1;
            }
        }

        debug!("data starts at row {}", index);
        return index;
    }

    debug!(
        "no data-start candidate in first {} rows, assuming table starts at 0",
        DATA_START_SCAN_LINES
    );
    0
}

/// Classify the relevant slice (post data-start) as headed or headerless.
///
/// The first row is a header when at least one of its cells is non-empty
/// and fails the numeric test; otherwise every row is data and synthetic
/// `Column N` names are generated from the first row's width.
pub fn classify(rows: &[Vec<String>], data_start: usize) -> TableLayout {
    let slice = &rows[data_start..];

    let first = match slice.first() {
        Some(row) => row,
        None => {
            return TableLayout {
                headers: Vec::new(),
                synthetic_headers: true,
                data_start,
            };
        }
    };

    let has_header = first
        .iter()
        .any(|cell| !cell.is_empty() && !is_numeric_token(cell));

    if has_header {
        debug!("header row detected: {:?}", first);
        TableLayout {
            headers: first.clone(),
            synthetic_headers: false,
            data_start: data_start + 1,
        }
    } else {
        let headers: Vec<String> = (1..=first.len()).map(|i| format!("Column {}", i)).collect();
        debug!("no header row, synthesized {} column names", headers.len());
        TableLayout {
            headers,
            synthetic_headers: true,
            data_start,
        }
    }
}
