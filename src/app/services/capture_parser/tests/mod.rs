//! Test utilities shared across capture parser test modules

mod delimiter_tests;
mod layout_tests;
mod report_tests;

/// Build owned rows from string slices
pub fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Build owned headers from string slices
pub fn headers(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|h| h.to_string()).collect()
}

/// A typical instrument export: banner lines, header, comma-separated data
pub fn create_banner_capture() -> String {
    let mut content = String::from(
        "# RF Explorer sweep export\n\
         # Device: RFE6GEN, RBW 10 kHz\n\
         \n\
         Frequency (MHz),Power (dBm)\n",
    );
    for i in 0..30 {
        content.push_str(&format!("{:.3},{:.1}\n", 2400.0 + i as f64 * 0.5, -90.0 + i as f64));
    }
    content
}

/// A headerless whitespace-separated capture (positive freq, negative power)
pub fn create_headerless_capture() -> String {
    let mut content = String::new();
    for i in 0..25 {
        content.push_str(&format!("{:.1}\t{:.1}\n", 2400.0 + i as f64, -80.0 + i as f64 * 0.5));
    }
    content
}
