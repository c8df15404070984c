//! Error types for the aeolus-collate crate.

/// Error type for all fallible operations in the aeolus-collate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollateError {
    /// Returned when the same year is supplied twice.
    #[error("duplicate year: {year}")]
    DuplicateYear {
        /// The repeated year.
        year: i32,
    },

    /// Returned when a series does not have one value per day of its year.
    #[error("{variable} series for {year} has {got} values, expected {expected}")]
    SeriesLength {
        /// Year of the series.
        year: i32,
        /// Variable name.
        variable: &'static str,
        /// Days in the year.
        expected: usize,
        /// Values supplied.
        got: usize,
    },

    /// Returned when tmin and tmax differ in length.
    #[error("tmin has {tmin} values but tmax has {tmax}")]
    RangeLengthMismatch {
        /// Length of the tmin series.
        tmin: usize,
        /// Length of the tmax series.
        tmax: usize,
    },
}
