//! Weibull parameters for autocorrelated wind innovations.

use rand_distr::Weibull;
use statrs::function::gamma::gamma;

use crate::error::{DistFitError, ensure_finite};
use crate::innovation::innovation_sd;

/// Empirical exponent relating the coefficient of variation to the shape.
const CV_SHAPE_EXPONENT: f64 = -1.086;

/// Weibull shape/scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullParams {
    shape: f64,
    scale: f64,
}

impl WeibullParams {
    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `scale · Γ(1 + 1/shape)`.
    pub fn mean(&self) -> f64 {
        self.scale * gamma(1.0 + 1.0 / self.shape)
    }

    /// # Errors
    ///
    /// Returns [`DistFitError::Construction`] if rand_distr rejects the
    /// parameters.
    pub fn sampler(&self) -> Result<Weibull<f64>, DistFitError> {
        Weibull::new(self.scale, self.shape).map_err(|e| DistFitError::Construction {
            family: "weibull",
            message: e.to_string(),
        })
    }
}

/// Fits Weibull parameters to a wind target.
///
/// The sd is first reduced to the innovation sd `sd·sqrt(1 − lag1²)`; the
/// shape follows `(sd_e / mean)^-1.086` and the scale
/// `mean / Γ(1 + 1/shape)`, so the distribution mean equals `mean`.
///
/// # Errors
///
/// Returns [`DistFitError::NonFinite`] for non-finite inputs and
/// [`DistFitError::Degenerate`] when `mean` or the innovation sd is not
/// positive.
pub fn weibull_params(mean: f64, sd: f64, lag1: f64) -> Result<WeibullParams, DistFitError> {
    ensure_finite("mean", mean)?;
    ensure_finite("sd", sd)?;
    ensure_finite("lag1", lag1)?;
    if mean <= 0.0 {
        return Err(DistFitError::Degenerate {
            reason: format!("weibull mean must be positive, got {mean}"),
        });
    }
    let sd_e = innovation_sd(sd, lag1);
    if sd_e <= 0.0 {
        return Err(DistFitError::Degenerate {
            reason: format!("innovation sd must be positive, got {sd_e}"),
        });
    }
    let shape = (sd_e / mean).powf(CV_SHAPE_EXPONENT);
    let scale = mean / gamma(1.0 + 1.0 / shape);
    if !shape.is_finite() || !scale.is_finite() || scale <= 0.0 {
        return Err(DistFitError::Degenerate {
            reason: format!("no weibull for mean {mean}, innovation sd {sd_e}"),
        });
    }
    Ok(WeibullParams { shape, scale })
}
