//! Error types for aeolus-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the aeolus-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the csv crate (I/O, parsing,
    /// deserialisation).
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a (variable, year) lacks one of its statistics.
    #[error("{variable} {year}: missing statistic '{statistic}'")]
    MissingStatistic {
        /// Variable name.
        variable: &'static str,
        /// Year of the incomplete record.
        year: i32,
        /// Name of the absent statistic.
        statistic: &'static str,
    },

    /// Returned when a complete record fails target validation.
    #[error("{variable} {year}: {reason}")]
    InvalidTarget {
        /// Variable name.
        variable: &'static str,
        /// Year of the rejected record.
        year: i32,
        /// Validation message.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
