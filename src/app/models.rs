//! Core domain models for normalized spectrum data
//!
//! This module defines the canonical output types of the normalizer: the
//! per-row spectrum point and the aggregate analysis report handed to
//! downstream consumers. The report's serialized shape is a consumer
//! contract, so all fields rename to camelCase on the wire.

use serde::{Deserialize, Serialize};

/// One normalized measurement: frequency in MHz, power in dBm.
///
/// Both fields are finite by construction; rows whose cells clean to a
/// non-finite value are dropped before a point is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Frequency in MHz
    pub frequency: f64,
    /// Power in dBm (characteristically negative for noise-floor data)
    pub power: f64,
}

/// Frequency range statistics over all retained points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyStats {
    pub min: f64,
    pub max: f64,
}

/// Power statistics over all retained points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Aggregate statistics section of the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumStats {
    pub frequency: FrequencyStats,
    pub power: PowerStats,
}

/// Representative sample windows retained in the report.
///
/// The three windows are independent and not deduplicated against each
/// other; on small inputs the same point can appear in all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSamples {
    /// First rows in original file order
    pub first_rows: Vec<SpectrumPoint>,
    /// Last rows in original file order
    pub last_rows: Vec<SpectrumPoint>,
    /// Highest-power rows, sorted descending by power
    pub peak_power_rows: Vec<SpectrumPoint>,
}

/// Terminal artifact of a successful parse.
///
/// Constructed exactly once per parse and never mutated afterward; the
/// normalizer holds no reference once it is returned. Consumers needing a
/// modified view must copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysisReport {
    /// Name of the analyzed capture (file name, not full path)
    pub file_name: String,
    /// Number of points retained after numeric cleaning
    pub row_count: usize,
    /// Number of columns in the detected table
    pub column_count: usize,
    /// Detected or synthesized column headers
    pub headers: Vec<String>,
    /// Aggregate statistics over retained points
    pub stats: SpectrumStats,
    /// Representative sample windows
    pub samples: ReportSamples,
}

impl SpectrumPoint {
    pub fn new(frequency: f64, power: f64) -> Self {
        Self { frequency, power }
    }
}
