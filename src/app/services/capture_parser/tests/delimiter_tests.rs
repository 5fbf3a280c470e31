//! Tests for delimiter detection and line splitting

use crate::app::services::capture_parser::delimiter::{Delimiter, detect, split_any};

#[test]
fn detects_comma_on_consistent_csv() {
    let lines = vec!["100.0,-50.5", "100.1,-48.2", "100.2,-52.0", "100.3,-49.9"];
    assert_eq!(detect(&lines), Delimiter::Comma);
}

#[test]
fn detects_comma_even_when_whitespace_appears_in_fields() {
    // Spaces after the comma must not pull detection toward whitespace:
    // comma yields a perfectly consistent 2 columns, whitespace varies.
    let lines = vec![
        "100.0, -50.5",
        "100.1, -48.2 extra",
        "100.2, -52.0",
        "100.3, -49.9",
    ];
    assert_eq!(detect(&lines), Delimiter::Comma);
}

#[test]
fn detects_semicolon() {
    let lines = vec!["2400;-90", "2401;-88", "2402;-91"];
    assert_eq!(detect(&lines), Delimiter::Semicolon);
}

#[test]
fn detects_tab() {
    let lines = vec!["2400\t-90", "2401\t-88", "2402\t-91"];
    assert_eq!(detect(&lines), Delimiter::Tab);
}

#[test]
fn falls_back_to_whitespace_when_nothing_survives() {
    let lines = vec!["2400 -90", "2401 -88", "2402 -91"];
    assert_eq!(detect(&lines), Delimiter::Whitespace);
}

#[test]
fn empty_sample_defaults_to_whitespace() {
    assert_eq!(detect(&[]), Delimiter::Whitespace);
}

#[test]
fn tie_break_prefers_comma_over_semicolon() {
    // Both candidates split every line into a consistent 2 columns.
    let lines = vec!["1,2;3", "4,5;6", "7,8;9"];
    // Each line has one comma and one semicolon: both give 2 columns with
    // zero deviation, so priority order decides.
    assert_eq!(detect(&lines), Delimiter::Comma);
}

#[test]
fn inconsistent_candidate_loses_to_consistent_one() {
    // Commas appear in most lines but with varying counts; tabs are
    // perfectly consistent.
    let lines = vec![
        "a,b\tc",
        "d,e,f\tg",
        "h\ti",
        "j,k,l,m\tn",
    ];
    assert_eq!(detect(&lines), Delimiter::Tab);
}

#[test]
fn split_trims_cells() {
    let cells = Delimiter::Comma.split(" 100.0 , -50.5 ");
    assert_eq!(cells, vec!["100.0", "-50.5"]);
}

#[test]
fn whitespace_split_collapses_runs() {
    let cells = Delimiter::Whitespace.split("2400.0    -90.5\t -12");
    assert_eq!(cells, vec!["2400.0", "-90.5", "-12"]);
}

#[test]
fn split_any_treats_all_separators_alike() {
    let cells = split_any("2400.0, -90.5;\t-12");
    assert_eq!(cells, vec!["2400.0", "-90.5", "-12"]);
}

#[test]
fn split_any_collapses_separator_runs() {
    let cells = split_any("2400.0,,  -90.5");
    assert_eq!(cells, vec!["2400.0", "-90.5"]);
}
