//! Delimiter detection and line splitting
//!
//! Instrument exports carry no format metadata, so the field separator is
//! inferred from a bounded sample of lines: the candidate that splits the
//! sample into the most consistent column count wins. A fixed-class
//! splitter (any run of tab/comma/semicolon/space) is retained as the
//! historical simple mode and as the universal fallback.

use tracing::debug;

use crate::constants::DELIMITER_SAMPLE_LINES;

/// A detected field delimiter.
///
/// Variants are ordered by tie-break priority: when two candidates are
/// equally consistent, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
    /// One-or-more whitespace characters; also the universal fallback
    Whitespace,
}

impl Delimiter {
    /// All candidates in tie-break priority order
    pub const CANDIDATES: &'static [Delimiter] = &[
        Delimiter::Comma,
        Delimiter::Semicolon,
        Delimiter::Tab,
        Delimiter::Whitespace,
    ];

    /// Split a line into trimmed cells using this delimiter
    pub fn split(&self, line: &str) -> Vec<String> {
        match self {
            Delimiter::Comma => split_on_char(line, ','),
            Delimiter::Semicolon => split_on_char(line, ';'),
            Delimiter::Tab => split_on_char(line, '\t'),
            Delimiter::Whitespace => line.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Human-readable name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Tab => "tab",
            Delimiter::Whitespace => "whitespace",
        }
    }
}

fn split_on_char(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|cell| cell.trim().to_string()).collect()
}

/// Split a line on any run of tab, comma, semicolon, or space.
///
/// This is the historical simple splitting mode, applied uniformly with
/// no detection pass.
pub fn split_any(line: &str) -> Vec<String> {
    line.split(|c| matches!(c, '\t' | ',' | ';' | ' '))
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Detect the most likely delimiter from a sample of non-blank lines.
///
/// For each candidate the sample is split and the column counts recorded.
/// A candidate is discarded when fewer than half the sampled lines
/// produce more than one column (the separator is simply not present).
/// Among survivors the lowest population standard deviation of column
/// count wins; ties and an empty survivor set fall back in priority
/// order, with whitespace as the terminal default.
///
/// Never fails: always returns a usable delimiter.
pub fn detect(lines: &[&str]) -> Delimiter {
    let sample: Vec<&str> = lines.iter().take(DELIMITER_SAMPLE_LINES).copied().collect();
    if sample.is_empty() {
        return Delimiter::Whitespace;
    }

    let mut best: Option<(Delimiter, f64)> = None;
    for &candidate in Delimiter::CANDIDATES {
        let counts: Vec<usize> = sample.iter().map(|line| candidate.split(line).len()).collect();

        let multi_column = counts.iter().filter(|&&c| c > 1).count();
        if multi_column * 2 < sample.len() {
            continue;
        }

        let deviation = population_std_dev(&counts);
        debug!(
            "delimiter candidate {}: {}/{} multi-column lines, stddev {:.3}",
            candidate.name(),
            multi_column,
            sample.len(),
            deviation
        );

        // Strict comparison keeps the earlier (higher-priority) candidate
        // on a tie.
        match best {
            Some((_, best_dev)) if deviation >= best_dev => {}
            _ => best = Some((candidate, deviation)),
        }
    }

    let chosen = best.map(|(d, _)| d).unwrap_or(Delimiter::Whitespace);
    debug!("detected delimiter: {}", chosen.name());
    chosen
}

/// Population standard deviation of column counts
fn population_std_dev(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().sum::<usize>() as f64 / n;
    let variance = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}
