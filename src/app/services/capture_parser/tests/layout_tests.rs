//! Tests for data-start location and header classification

use super::rows;
use crate::app::services::capture_parser::layout::{classify, locate_data_start};

#[test]
fn skips_banner_lines_before_data() {
    let rows = rows(&[
        &["# RF Explorer sweep export"],
        &["# Device: RFE6GEN"],
        &["2400.0", "-90.5"],
        &["2400.5", "-89.0"],
    ]);
    assert_eq!(locate_data_start(&rows), 2);
}

#[test]
fn pulls_in_preceding_header_with_matching_width() {
    let rows = rows(&[
        &["capture settings follow"],
        &["Frequency (MHz)", "Power (dBm)"],
        &["2400.0", "-90.5"],
        &["2400.5", "-89.0"],
    ]);
    // Row 2 qualifies as data; row 1 has the same width and is not fully
    // numeric, so it is kept as the header.
    assert_eq!(locate_data_start(&rows), 1);
}

#[test]
fn preceding_line_with_different_width_is_not_a_header() {
    let rows = rows(&[
        &["instrument", "firmware", "1.2"],
        &["2400.0", "-90.5"],
        &["2400.5", "-89.0"],
    ]);
    assert_eq!(locate_data_start(&rows), 1);
}

#[test]
fn falls_back_to_zero_when_no_candidate_in_window() {
    let rows = rows(&[
        &["only"],
        &["text"],
        &["here"],
    ]);
    assert_eq!(locate_data_start(&rows), 0);
}

#[test]
fn data_on_first_row_starts_at_zero() {
    let rows = rows(&[&["2400.0", "-90.5"], &["2400.5", "-89.0"]]);
    assert_eq!(locate_data_start(&rows), 0);
}

#[test]
fn classifies_header_row() {
    let rows = rows(&[
        &["freq", "power"],
        &["100.0", "-50.5"],
    ]);
    let layout = classify(&rows, 0);
    assert!(!layout.synthetic_headers);
    assert_eq!(layout.headers, vec!["freq", "power"]);
    assert_eq!(layout.data_start, 1);
}

#[test]
fn synthesizes_names_for_headerless_data() {
    let rows = rows(&[
        &["100.0", "-50.5"],
        &["100.1", "-48.2"],
    ]);
    let layout = classify(&rows, 0);
    assert!(layout.synthetic_headers);
    assert_eq!(layout.headers, vec!["Column 1", "Column 2"]);
    assert_eq!(layout.data_start, 0);
}

#[test]
fn numeric_looking_header_with_thousands_separator_is_data() {
    // "2,400" strips to "2400" under the light test, so the row is data.
    let rows = rows(&[&["2,400", "-90"], &["2,401", "-91"]]);
    let layout = classify(&rows, 0);
    assert!(layout.synthetic_headers);
    assert_eq!(layout.data_start, 0);
}

#[test]
fn classify_respects_data_start_offset() {
    let rows = rows(&[
        &["# banner"],
        &["freq", "power"],
        &["100.0", "-50.5"],
    ]);
    let layout = classify(&rows, 1);
    assert!(!layout.synthetic_headers);
    assert_eq!(layout.headers, vec!["freq", "power"]);
    assert_eq!(layout.data_start, 2);
}
