//! Frequency/power column role resolution
//!
//! Two resolution paths, tried in order. Path A scores header text
//! against fixed keyword lists for each role. Path B, used when headers
//! are synthetic or carry no usable keywords, profiles a bounded sample
//! of data rows statistically: power in dBm is characteristically
//! negative, which discriminates it from frequency absent any textual
//! hint. Both paths fail with a recoverable error carrying the headers
//! and a few sample rows for a manual-mapping retry.

use tracing::debug;

use super::fields::clean_numeric;
use crate::constants::{
    COLUMN_PROFILE_SAMPLE_ROWS, ERROR_SAMPLE_ROWS, EXACT_HEADER_MATCH_BONUS, FREQUENCY_KEYWORDS,
    POWER_KEYWORDS,
};
use crate::{Error, Result};

/// Resolved column assignment: two distinct indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRoles {
    pub freq_index: usize,
    pub power_index: usize,
}

/// Per-column keyword scores for the header path
#[derive(Debug, Clone, Copy)]
struct HeaderScore {
    index: usize,
    freq_score: u32,
    power_score: u32,
}

/// Per-column numeric profile for the statistical path
#[derive(Debug, Clone, Copy)]
struct ColumnProfile {
    index: usize,
    numeric_count: usize,
    negative_count: usize,
}

/// Resolve which column holds frequency and which holds power.
///
/// Headers with keyword matches on both axes resolve by scoring; anything
/// else falls through to statistical profiling of the data rows.
pub fn resolve(
    headers: &[String],
    synthetic_headers: bool,
    data_rows: &[Vec<String>],
) -> Result<ColumnRoles> {
    if !synthetic_headers {
        if let Some(roles) = resolve_by_keywords(headers, data_rows)? {
            return Ok(roles);
        }
        debug!("headers carry no usable role keywords, profiling columns statistically");
    }

    resolve_by_profile(headers, data_rows)
}

/// Path A: keyword scoring over header text.
///
/// Returns `Ok(None)` when either role has no keyword match at all, which
/// sends resolution to the statistical path. A same-index conflict is
/// broken by the column's higher score; the losing role falls through to
/// its next-best distinct candidate, and an exhausted ranking is a
/// detection failure.
fn resolve_by_keywords(
    headers: &[String],
    data_rows: &[Vec<String>],
) -> Result<Option<ColumnRoles>> {
    let scores: Vec<HeaderScore> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| HeaderScore {
            index,
            freq_score: keyword_score(header, FREQUENCY_KEYWORDS),
            power_score: keyword_score(header, POWER_KEYWORDS),
        })
        .collect();

    let freq_ranked = ranked(&scores, |s| s.freq_score);
    let power_ranked = ranked(&scores, |s| s.power_score);

    if freq_ranked.is_empty() || power_ranked.is_empty() {
        return Ok(None);
    }

    let top_freq = freq_ranked[0];
    let top_power = power_ranked[0];

    if top_freq.index != top_power.index {
        debug!(
            "keyword scoring: frequency column {} ({:?}), power column {} ({:?})",
            top_freq.index, headers[top_freq.index], top_power.index, headers[top_power.index]
        );
        return Ok(Some(ColumnRoles {
            freq_index: top_freq.index,
            power_index: top_power.index,
        }));
    }

    // One column tops both rankings. It keeps the role it scored higher
    // on (frequency on a tie) and the other role takes its next distinct
    // candidate.
    let contested = top_freq.index;
    if top_freq.freq_score >= top_power.power_score {
        let power = power_ranked.iter().find(|s| s.index != contested);
        match power {
            Some(power) => Ok(Some(ColumnRoles {
                freq_index: contested,
                power_index: power.index,
            })),
            None => Err(detection_error(
                format!(
                    "header '{}' matches both roles and no other column scores for power",
                    headers[contested]
                ),
                headers,
                data_rows,
            )),
        }
    } else {
        let freq = freq_ranked.iter().find(|s| s.index != contested);
        match freq {
            Some(freq) => Ok(Some(ColumnRoles {
                freq_index: freq.index,
                power_index: contested,
            })),
            None => Err(detection_error(
                format!(
                    "header '{}' matches both roles and no other column scores for frequency",
                    headers[contested]
                ),
                headers,
                data_rows,
            )),
        }
    }
}

/// Score a header cell against a keyword list.
///
/// Counts keyword substrings inside the lower-cased, trimmed text; an
/// exact full-string match earns a strong fixed bonus so "power" beats
/// "power_supply_level".
fn keyword_score(header: &str, keywords: &[&str]) -> u32 {
    let text = header.trim().to_lowercase();
    if text.is_empty() {
        return 0;
    }

    let mut score = keywords.iter().filter(|k| text.contains(**k)).count() as u32;
    if keywords.contains(&text.as_str()) {
        score += EXACT_HEADER_MATCH_BONUS;
    }
    score
}

/// Columns with a positive score, ordered by score descending then index
fn ranked(scores: &[HeaderScore], score_of: impl Fn(&HeaderScore) -> u32) -> Vec<HeaderScore> {
    let mut matched: Vec<HeaderScore> = scores.iter().copied().filter(|s| score_of(s) > 0).collect();
    matched.sort_by(|a, b| score_of(b).cmp(&score_of(a)).then(a.index.cmp(&b.index)));
    matched
}

/// Path B: statistical column profiling.
///
/// Over a sample of up to [`COLUMN_PROFILE_SAMPLE_ROWS`] rows, each
/// column is profiled by how many cells parse as numeric and, among
/// those, how many are negative. Mostly-non-numeric columns are
/// rejected; the most-negative survivor is power and the next distinct
/// column by numeric rank is frequency.
fn resolve_by_profile(headers: &[String], data_rows: &[Vec<String>]) -> Result<ColumnRoles> {
    let sample = &data_rows[..data_rows.len().min(COLUMN_PROFILE_SAMPLE_ROWS)];
    if sample.is_empty() {
        return Err(detection_error(
            "no data rows available for statistical column profiling",
            headers,
            data_rows,
        ));
    }

    let width = headers.len();
    let mut profiles: Vec<ColumnProfile> = Vec::with_capacity(width);
    for index in 0..width {
        let mut numeric_count = 0;
        let mut negative_count = 0;
        for row in sample {
            let Some(cell) = row.get(index) else { continue };
            let value = clean_numeric(cell);
            if value.is_finite() {
                numeric_count += 1;
                if value < 0.0 {
                    negative_count += 1;
                }
            }
        }
        profiles.push(ColumnProfile {
            index,
            numeric_count,
            negative_count,
        });
    }

    // Majority filter: a real measurement column is numeric in more than
    // half the sampled rows.
    let mut qualifying: Vec<ColumnProfile> = profiles
        .into_iter()
        .filter(|p| p.numeric_count * 2 > sample.len())
        .collect();
    qualifying.sort_by(|a, b| {
        b.numeric_count
            .cmp(&a.numeric_count)
            .then(a.index.cmp(&b.index))
    });

    if qualifying.len() < 2 {
        return Err(detection_error(
            format!(
                "found {} numeric column(s) in {} sampled rows, need at least 2",
                qualifying.len(),
                sample.len()
            ),
            headers,
            data_rows,
        ));
    }

    // Stable re-rank by negative count: on ties the numeric-rank order
    // is preserved.
    let mut by_negative = qualifying.clone();
    by_negative.sort_by(|a, b| b.negative_count.cmp(&a.negative_count));
    let power = by_negative[0];

    let freq = qualifying
        .iter()
        .find(|p| p.index != power.index)
        .copied()
        .expect("qualifying has at least two entries");

    debug!(
        "statistical profiling: power column {} ({} negatives), frequency column {}",
        power.index, power.negative_count, freq.index
    );

    Ok(ColumnRoles {
        freq_index: freq.index,
        power_index: power.index,
    })
}

/// Build the recoverable detection failure with its manual-mapping payload
fn detection_error(
    message: impl Into<String>,
    headers: &[String],
    data_rows: &[Vec<String>],
) -> Error {
    let sample_rows = data_rows
        .iter()
        .take(ERROR_SAMPLE_ROWS)
        .cloned()
        .collect();
    Error::column_detection(message, headers.to_vec(), sample_rows)
}
