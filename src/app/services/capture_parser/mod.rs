//! Heuristic parser for delimited RF spectrum captures
//!
//! This module normalizes instrument-exported frequency/power tables with
//! no a-priori knowledge of delimiter, header presence, or column order.
//! The pipeline is a strictly linear reduction: acquire text → split
//! lines → detect delimiter → locate the data start → classify the
//! header → resolve column roles → clean cells → assemble the report.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`delimiter`] - Delimiter detection and line splitting
//! - [`layout`] - Banner skipping and header classification
//! - [`columns`] - Frequency/power column role resolution
//! - [`fields`] - Cell cleaning and numeric parsing
//! - [`report`] - Row materialization and statistics assembly
//!
//! ## Usage
//!
//! ```rust
//! use spectrum_normalizer::CaptureParser;
//!
//! # fn example() -> spectrum_normalizer::Result<()> {
//! let parser = CaptureParser::new();
//! let report = parser.parse_str("sweep.csv", "freq,power\n100.0,-50.5\n")?;
//!
//! println!(
//!     "{} points between {} and {} MHz",
//!     report.row_count, report.stats.frequency.min, report.stats.frequency.max
//! );
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod delimiter;
pub mod fields;
pub mod layout;
pub mod parser;
pub mod report;

#[cfg(test)]
mod tests;

pub use columns::ColumnRoles;
pub use delimiter::Delimiter;
pub use parser::CaptureParser;
