//! Application constants for the spectrum normalizer
//!
//! This module contains the heuristic tuning constants, keyword lists,
//! and default values used throughout the normalizer.

// =============================================================================
// Column Role Keywords
// =============================================================================

/// Header keywords that indicate a frequency column
pub const FREQUENCY_KEYWORDS: &[&str] = &[
    "freq",
    "frequency",
    "mhz",
    "khz",
    "ghz",
    "hertz",
    "hz",
    "channel",
    "band",
    "freq.",
    "f(mhz)",
];

/// Header keywords that indicate a power column
pub const POWER_KEYWORDS: &[&str] = &[
    "power",
    "dbm",
    "db",
    "level",
    "amplitude",
    "rssi",
    "signal",
    "strength",
    "intensity",
    "sig_str",
    "pwr",
];

/// Bonus added when a header cell equals a keyword exactly, so an
/// unambiguous header like "power" outranks a noisier substring match
/// like "power_supply_level"
pub const EXACT_HEADER_MATCH_BONUS: u32 = 10;

// =============================================================================
// Numeric Cleaning
// =============================================================================

/// Unit suffixes stripped from the end of a cell before numeric parsing.
/// Ordered longest-first so "mhz" wins over "hz" and "dbm" over "db".
pub const UNIT_SUFFIXES: &[&str] = &["mhz", "khz", "ghz", "dbm", "pwr", "hz", "mw", "db"];

// =============================================================================
// Sampling Bounds
// =============================================================================

/// Maximum non-blank lines sampled for delimiter detection
pub const DELIMITER_SAMPLE_LINES: usize = 50;

/// Maximum lines scanned when locating the start of tabular data
pub const DATA_START_SCAN_LINES: usize = 10;

/// Maximum data rows sampled for statistical column profiling
pub const COLUMN_PROFILE_SAMPLE_ROWS: usize = 20;

/// Rows retained in each report sample window (first / last / peak-power)
pub const REPORT_SAMPLE_ROWS: usize = 10;

/// Raw sample rows attached to a column detection failure for manual
/// column-mapping recovery
pub const ERROR_SAMPLE_ROWS: usize = 5;

// =============================================================================
// Input Bounds
// =============================================================================

/// Deployment convention: callers slice captures before invoking the
/// normalizer and never hand it more than this many bytes at once. Inputs
/// above the bound are processed anyway but logged as a warning, since
/// the whole segment is materialized in memory.
pub const RECOMMENDED_MAX_INPUT_BYTES: usize = 50 * 1024 * 1024;
