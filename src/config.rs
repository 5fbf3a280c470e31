//! Configuration for capture parsing.
//!
//! Provides the options accepted by the normalizer: how lines are split
//! into cells, and whether column roles are resolved automatically or
//! supplied by the caller (the manual-mapping retry path).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a capture line is split into cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DelimiterMode {
    /// Statistically detect the delimiter from a bounded line sample,
    /// preferring the candidate with the most consistent column count
    #[default]
    Adaptive,
    /// Historical behavior: always split on any run of tab, comma,
    /// semicolon, or space, with no detection pass
    Simple,
}

/// How the frequency and power columns are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnSelection {
    /// Resolve roles by header keyword scoring, falling back to
    /// statistical column profiling
    #[default]
    Auto,
    /// Explicit caller-supplied indices; role resolution is skipped
    /// entirely. Used to retry after a column detection failure.
    Manual {
        freq_index: usize,
        power_index: usize,
    },
}

/// Options accepted by [`crate::CaptureParser`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Line splitting behavior
    pub delimiter_mode: DelimiterMode,
    /// Column role selection
    pub columns: ColumnSelection,
}

impl ParseOptions {
    /// Validate option combinations before parsing begins
    pub fn validate(&self) -> Result<()> {
        if let ColumnSelection::Manual {
            freq_index,
            power_index,
        } = self.columns
        {
            if freq_index == power_index {
                return Err(Error::configuration(format!(
                    "manual frequency and power columns must differ (both are {})",
                    freq_index
                )));
            }
        }
        Ok(())
    }

    /// Convenience constructor for the manual-override retry path
    pub fn with_manual_columns(freq_index: usize, power_index: usize) -> Self {
        Self {
            columns: ColumnSelection::Manual {
                freq_index,
                power_index,
            },
            ..Self::default()
        }
    }
}
