//! Error types for the aeolus-markov crate.

/// Error type for all fallible operations in the aeolus-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when a transition probability is non-finite or outside [0, 1].
    #[error("invalid probability {name} = {value} (must be finite and in [0, 1])")]
    InvalidProbability {
        /// Which probability was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a pre-allocated buffer has the wrong length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },
}
