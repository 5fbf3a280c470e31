//! Row materialization and statistics assembly
//!
//! The final pipeline stage: every data row is bounds-checked, its target
//! cells cleaned, and corrupt rows dropped silently. The surviving points
//! are reduced to range statistics and three fixed-size sample windows.
//! Sorting the full point set for min/max is deliberate: reports are
//! built once per upload, not on a hot path.

use tracing::debug;

use super::columns::ColumnRoles;
use super::fields::clean_numeric;
use crate::app::models::{
    FileAnalysisReport, FrequencyStats, PowerStats, ReportSamples, SpectrumPoint, SpectrumStats,
};
use crate::constants::REPORT_SAMPLE_ROWS;
use crate::{Error, Result};

/// Materialize data rows into spectrum points and assemble the report.
///
/// Rows shorter than the resolved column span are skipped; rows whose
/// frequency or power cell cleans to a non-finite value are dropped
/// silently (partial
/// corruption of a capture is expected and must not abort the parse).
/// Zero surviving points is the unrecoverable no-valid-data failure: the
/// columns were identified, the data just didn't parse.
pub fn assemble(
    file_name: &str,
    headers: Vec<String>,
    data_rows: &[Vec<String>],
    roles: ColumnRoles,
) -> Result<FileAnalysisReport> {
    let required_len = roles.freq_index.max(roles.power_index) + 1;

    let mut points: Vec<SpectrumPoint> = Vec::with_capacity(data_rows.len());
    let mut power_sum = 0.0;

    for row in data_rows {
        if row.len() < required_len {
            continue;
        }

        // Not just NaN: "inf" and overflowing literals like "1e999"
        // parse to infinity, and every retained point must be finite.
        let frequency = clean_numeric(&row[roles.freq_index]);
        let power = clean_numeric(&row[roles.power_index]);
        if !frequency.is_finite() || !power.is_finite() {
            continue;
        }

        points.push(SpectrumPoint::new(frequency, power));
        power_sum += power;
    }

    if points.is_empty() {
        return Err(Error::no_valid_data(format!(
            "columns {} and {} were identified but no row produced a valid numeric pair",
            roles.freq_index, roles.power_index
        )));
    }

    debug!(
        "retained {} of {} rows after numeric cleaning",
        points.len(),
        data_rows.len()
    );

    let mut by_frequency = points.clone();
    by_frequency.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));

    let mut by_power_desc = points.clone();
    by_power_desc.sort_by(|a, b| b.power.total_cmp(&a.power));

    let stats = SpectrumStats {
        frequency: FrequencyStats {
            min: by_frequency.first().map(|p| p.frequency).unwrap_or(0.0),
            max: by_frequency.last().map(|p| p.frequency).unwrap_or(0.0),
        },
        power: PowerStats {
            min: by_power_desc.last().map(|p| p.power).unwrap_or(0.0),
            max: by_power_desc.first().map(|p| p.power).unwrap_or(0.0),
            avg: power_sum / points.len() as f64,
        },
    };

    let samples = ReportSamples {
        first_rows: points.iter().take(REPORT_SAMPLE_ROWS).copied().collect(),
        last_rows: points
            .iter()
            .skip(points.len().saturating_sub(REPORT_SAMPLE_ROWS))
            .copied()
            .collect(),
        peak_power_rows: by_power_desc
            .iter()
            .take(REPORT_SAMPLE_ROWS)
            .copied()
            .collect(),
    };

    Ok(FileAnalysisReport {
        file_name: file_name.to_string(),
        row_count: points.len(),
        column_count: headers.len(),
        headers,
        stats,
        samples,
    })
}
