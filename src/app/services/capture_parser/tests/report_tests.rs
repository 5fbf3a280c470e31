//! Tests for row materialization and statistics assembly

use super::{headers, rows};
use crate::Error;
use crate::app::services::capture_parser::columns::ColumnRoles;
use crate::app::services::capture_parser::report::assemble;

fn roles() -> ColumnRoles {
    ColumnRoles {
        freq_index: 0,
        power_index: 1,
    }
}

#[test]
fn assembles_stats_over_retained_points() {
    let data = rows(&[
        &["100.0", "-50.5"],
        &["100.1", "-48.2"],
        &["100.2", "-52.0"],
    ]);

    let report = assemble("sweep.csv", headers(&["freq", "power"]), &data, roles()).unwrap();

    assert_eq!(report.row_count, 3);
    assert_eq!(report.column_count, 2);
    assert_eq!(report.stats.frequency.min, 100.0);
    assert_eq!(report.stats.frequency.max, 100.2);
    assert_eq!(report.stats.power.min, -52.0);
    assert_eq!(report.stats.power.max, -48.2);
    let expected_avg = (-50.5 + -48.2 + -52.0) / 3.0;
    assert!((report.stats.power.avg - expected_avg).abs() < 1e-9);
}

#[test]
fn stats_bound_every_retained_point() {
    let data: Vec<Vec<String>> = (0..40)
        .map(|i| {
            vec![
                format!("{:.2}", 2400.0 + (i * 7 % 40) as f64),
                format!("{:.2}", -90.0 + (i * 13 % 50) as f64),
            ]
        })
        .collect();

    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();

    for point in report
        .samples
        .first_rows
        .iter()
        .chain(&report.samples.last_rows)
        .chain(&report.samples.peak_power_rows)
    {
        assert!(report.stats.frequency.min <= point.frequency);
        assert!(point.frequency <= report.stats.frequency.max);
        assert!(report.stats.power.min <= point.power);
        assert!(point.power <= report.stats.power.max);
    }
}

#[test]
fn peak_rows_are_sorted_descending_and_capped_at_ten() {
    let data: Vec<Vec<String>> = (0..25)
        .map(|i| vec![format!("{}", 2400 + i), format!("{}", -90 + (i * 11 % 37))])
        .collect();

    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();

    let peaks = &report.samples.peak_power_rows;
    assert_eq!(peaks.len(), 10);
    for pair in peaks.windows(2) {
        assert!(pair[0].power >= pair[1].power);
    }
    assert_eq!(peaks[0].power, report.stats.power.max);
}

#[test]
fn peak_window_shrinks_with_small_inputs() {
    let data = rows(&[&["100.0", "-50.0"], &["100.1", "-49.0"]]);
    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();
    assert_eq!(report.samples.peak_power_rows.len(), 2);
    assert_eq!(report.samples.first_rows.len(), 2);
    assert_eq!(report.samples.last_rows.len(), 2);
}

#[test]
fn sample_windows_keep_file_order() {
    let data: Vec<Vec<String>> = (0..30)
        .map(|i| vec![format!("{}", 2400 + i), format!("{}", -50 - i)])
        .collect();

    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();

    let first: Vec<f64> = report.samples.first_rows.iter().map(|p| p.frequency).collect();
    assert_eq!(first, (2400..2410).map(f64::from).collect::<Vec<_>>());

    let last: Vec<f64> = report.samples.last_rows.iter().map(|p| p.frequency).collect();
    assert_eq!(last, (2420..2430).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn corrupt_rows_are_dropped_silently() {
    let data = rows(&[
        &["100.0", "-50.5"],
        &["100.1", "garbage"],
        &["not-a-number", "-48.0"],
        &["100.3", "-49.0"],
    ]);

    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();
    assert_eq!(report.row_count, 2);
}

#[test]
fn short_rows_are_skipped() {
    let data = rows(&[
        &["100.0", "-50.5"],
        &["100.1"],
        &["100.2", "-49.0"],
    ]);

    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();
    assert_eq!(report.row_count, 2);
}

#[test]
fn unit_suffixed_cells_are_cleaned() {
    let data = rows(&[&["2400MHz", "-90.5dBm"], &["2401MHz", "-89.0dBm"]]);
    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();
    assert_eq!(report.row_count, 2);
    assert_eq!(report.stats.frequency.min, 2400.0);
    assert_eq!(report.stats.power.max, -89.0);
}

#[test]
fn non_finite_cells_are_dropped_like_garbage() {
    // "inf" and overflowing literals parse to infinity; retained points
    // must stay finite so the stats cannot be poisoned.
    let data = rows(&[
        &["100.0", "inf"],
        &["1e999", "-48.0"],
        &["100.2", "-49.0"],
    ]);

    let report = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap();
    assert_eq!(report.row_count, 1);
    assert_eq!(report.stats.power.min, -49.0);
    assert_eq!(report.stats.power.max, -49.0);
    assert!(report.stats.power.avg.is_finite());
    assert!(report.stats.frequency.max.is_finite());
}

#[test]
fn all_rows_invalid_is_no_valid_data() {
    let data = rows(&[&["a", "b"], &["c", "d"]]);
    let err = assemble("x.csv", headers(&["f", "p"]), &data, roles()).unwrap_err();
    assert!(matches!(err, Error::NoValidData { .. }));
}
