//! Error types for the aeolus-calendar crate.

/// Error type for all fallible operations in the aeolus-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range for its year.
    #[error("invalid day of year: {doy} for year {year} (must be 1..={max_doy})")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
        /// Year the day-of-year was interpreted in.
        year: i32,
        /// Number of days in that year.
        max_doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a daily series does not cover exactly one calendar year.
    #[error("series length mismatch for year {year}: expected {expected} days, got {got}")]
    LengthMismatch {
        /// Calendar year of the series.
        year: i32,
        /// Number of days in that year.
        expected: usize,
        /// Actual series length.
        got: usize,
    },
}
