//! Spectrum Normalizer Library
//!
//! A Rust library for normalizing messy, delimited RF spectrum captures
//! (frequency/power tables exported by instruments and SDR tooling) into a
//! stable, analyzable report.
//!
//! This library provides tools for:
//! - Detecting the field delimiter of a capture with no format metadata
//! - Skipping instrument banner/preamble lines to locate the real table
//! - Classifying header rows versus headerless data
//! - Resolving which column is frequency and which is power, by header
//!   keyword scoring or by statistical column profiling
//! - Cleaning numeric cells (thousands separators, unit suffixes) and
//!   assembling summary statistics with representative sample windows
//! - Typed, recoverable errors that carry enough context for a manual
//!   column-mapping retry

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod capture_parser;
        pub mod quefrency;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FileAnalysisReport, SpectrumPoint};
pub use app::services::capture_parser::CaptureParser;
pub use config::ParseOptions;

/// Result type alias for the spectrum normalizer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for capture normalization operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed reading the capture source
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input was empty or structurally empty (no lines, or no data rows
    /// after stripping the banner/preamble)
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Columns were identified but no row survived numeric cleaning
    #[error("No valid data: {message}")]
    NoValidData { message: String },

    /// Column roles could not be resolved automatically. Carries the
    /// headers and a few tokenized sample rows so a caller can offer a
    /// manual column-mapping step and retry with explicit indices.
    #[error("Column detection failed: {message}")]
    ColumnDetection {
        message: String,
        headers: Vec<String>,
        sample_rows: Vec<Vec<String>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an empty-input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a no-valid-data error
    pub fn no_valid_data(message: impl Into<String>) -> Self {
        Self::NoValidData {
            message: message.into(),
        }
    }

    /// Create a column detection error with its recovery payload
    pub fn column_detection(
        message: impl Into<String>,
        headers: Vec<String>,
        sample_rows: Vec<Vec<String>>,
    ) -> Self {
        Self::ColumnDetection {
            message: message.into(),
            headers,
            sample_rows,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether a manual column override retry could resolve this failure
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ColumnDetection { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
