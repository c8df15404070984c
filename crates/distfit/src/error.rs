//! Error types for the aeolus-distfit crate.

/// Error type for all fallible operations in the aeolus-distfit crate.
///
/// The `message` fields are `String`s (not rand_distr error types) so the
/// enum stays `Clone`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistFitError {
    /// Returned when an input moment is NaN or infinite.
    #[error("{name} is not finite: {value}")]
    NonFinite {
        /// Which input was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when the target moments admit no distribution of the
    /// requested family (e.g. a non-positive mean for a Weibull).
    #[error("degenerate target: {reason}")]
    Degenerate {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when constructing the underlying sampler fails.
    #[error("failed to construct {family} sampler: {message}")]
    Construction {
        /// Distribution family name.
        family: &'static str,
        /// Underlying error message.
        message: String,
    },
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), DistFitError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistFitError::NonFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_non_finite() {
        let e = DistFitError::NonFinite {
            name: "mean",
            value: f64::NAN,
        };
        assert_eq!(e.to_string(), "mean is not finite: NaN");
    }

    #[test]
    fn error_degenerate() {
        let e = DistFitError::Degenerate {
            reason: "mean must be positive".to_string(),
        };
        assert_eq!(e.to_string(), "degenerate target: mean must be positive");
    }

    #[test]
    fn error_construction() {
        let e = DistFitError::Construction {
            family: "gamma",
            message: "shape is not positive".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to construct gamma sampler: shape is not positive"
        );
    }

    #[test]
    fn ensure_finite_rejects_inf() {
        assert!(ensure_finite("sd", f64::INFINITY).is_err());
        assert!(ensure_finite("sd", 1.0).is_ok());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DistFitError>();
    }
}
