//! Error types for the aeolus-calibrate crate.

use aeolus_calendar::CalendarError;
use aeolus_distfit::DistFitError;
use aeolus_markov::MarkovError;

/// Error type for all fallible operations in the aeolus-calibrate crate.
///
/// Calibration shortfalls are never errors; they surface through
/// [`crate::Calibrated::acceptable`] and the per-month outcomes.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CalibrateError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a target statistic is outside its admissible range.
    #[error("invalid target {statistic}[{period}] = {value}: {reason}")]
    InvalidTarget {
        /// Statistic name.
        statistic: &'static str,
        /// 0 for annual, 1..=12 for months.
        period: usize,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Returned when a statistic record is built from the wrong number of fields.
    #[error("field count mismatch: expected {expected}, got {got}")]
    FieldCount {
        /// Number of fields of the record type.
        expected: usize,
        /// Number of fields supplied.
        got: usize,
    },

    /// Wrapped calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Wrapped Markov chain error.
    #[error(transparent)]
    Markov(#[from] MarkovError),

    /// Wrapped distribution fitting error.
    #[error(transparent)]
    DistFit(#[from] DistFitError),
}
