//! Cell cleaning and numeric parsing
//!
//! Two tiers of numeric handling live here. The light structural test
//! (`is_numeric_token`) backs the data-start and header heuristics and
//! accepts plain signed decimals only. The full cleaner (`clean_numeric`)
//! is applied to every cell actually used for frequency or power: it
//! strips thousands separators and trailing unit suffixes, then parses a
//! float (scientific notation accepted), yielding NaN on failure so the
//! row can be dropped without aborting the parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::UNIT_SUFFIXES;

/// Optional sign, digits, optional decimal part. Thousands separators
/// are stripped before matching.
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d*)?$").expect("numeric token pattern is valid"));

/// Lightweight structural numeric test used by the banner and header
/// detectors. Rejects empty and whitespace-only cells.
pub fn is_numeric_token(cell: &str) -> bool {
    let stripped = cell.trim().replace(',', "");
    !stripped.is_empty() && NUMERIC_TOKEN.is_match(&stripped)
}

/// Clean a raw cell and parse it as a float, returning NaN on failure.
///
/// Order matters: trim, strip thousands-separator commas, lowercase,
/// strip one trailing unit suffix, trim again, then parse. Empty after
/// cleaning means NaN, never an error.
pub fn clean_numeric(cell: &str) -> f64 {
    let mut cleaned = cell.trim().replace(',', "").to_lowercase();

    for suffix in UNIT_SUFFIXES {
        if let Some(stripped) = cleaned.strip_suffix(suffix) {
            cleaned = stripped.to_string();
            break;
        }
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return f64::NAN;
    }

    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}
