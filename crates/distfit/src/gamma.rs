//! Gamma distribution parameters for wet-day rainfall amounts.

use rand::Rng;
use rand_distr::Gamma;

use crate::error::{DistFitError, ensure_finite};
use crate::gev::RAIN_SHAPE_GEV;

/// Validated parameters for a Gamma distribution (shape/scale convention).
///
/// Both `shape` (k) and `scale` (theta) must be finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    shape: f64,
    scale: f64,
}

impl GammaParams {
    /// Create new gamma parameters after validating that both `shape` and
    /// `scale` are finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, scale })
        } else {
            None
        }
    }

    /// Shape parameter (k).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (theta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Distribution mean (shape * scale).
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    /// Build a [`rand_distr::Gamma`] sampler.
    ///
    /// # Errors
    ///
    /// Returns [`DistFitError::Construction`] if rand_distr rejects the
    /// parameters, which validated params should never trigger.
    pub fn sampler(&self) -> Result<Gamma<f64>, DistFitError> {
        Gamma::new(self.shape, self.scale).map_err(|e| DistFitError::Construction {
            family: "gamma",
            message: e.to_string(),
        })
    }
}

/// Gamma parameters for the wet-day amounts of one month.
///
/// The shape is drawn from [`RAIN_SHAPE_GEV`] (redrawn until positive) and
/// the scale is set so the distribution mean equals `mean_per_wet_day`.
/// Each call therefore yields a different amount distribution.
///
/// # Errors
///
/// Returns [`DistFitError::NonFinite`] for a non-finite mean and
/// [`DistFitError::Degenerate`] for a non-positive one.
pub fn gamma_params_for_monthly_rain(
    mean_per_wet_day: f64,
    rng: &mut impl Rng,
) -> Result<GammaParams, DistFitError> {
    ensure_finite("mean_per_wet_day", mean_per_wet_day)?;
    if mean_per_wet_day <= 0.0 {
        return Err(DistFitError::Degenerate {
            reason: format!("wet-day mean must be positive, got {mean_per_wet_day}"),
        });
    }
    let shape = RAIN_SHAPE_GEV.sample_positive(rng);
    GammaParams::new(shape, mean_per_wet_day / shape).ok_or_else(|| DistFitError::Degenerate {
        reason: format!("gamma shape {shape} with mean {mean_per_wet_day} is not representable"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_distr::Distribution;

    #[test]
    fn new_valid() {
        let p = GammaParams::new(2.0, 3.0).unwrap();
        assert_relative_eq!(p.shape(), 2.0);
        assert_relative_eq!(p.scale(), 3.0);
        assert_relative_eq!(p.mean(), 6.0);
    }

    #[test]
    fn new_invalid() {
        assert!(GammaParams::new(0.0, 1.0).is_none());
        assert!(GammaParams::new(1.0, -1.0).is_none());
        assert!(GammaParams::new(f64::NAN, 1.0).is_none());
        assert!(GammaParams::new(f64::INFINITY, 1.0).is_none());
    }

    #[test]
    fn sampler_mean() {
        let p = GammaParams::new(0.8, 10.0).unwrap();
        let dist = p.sampler().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let n = 50_000;
        let total: f64 = (0..n).map(|_| dist.sample(&mut rng)).sum();
        assert_relative_eq!(total / n as f64, 8.0, epsilon = 0.2);
    }

    #[test]
    fn monthly_rain_preserves_mean() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let p = gamma_params_for_monthly_rain(12.5, &mut rng).unwrap();
            assert!(p.shape() > 0.0);
            assert_relative_eq!(p.mean(), 12.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn monthly_rain_shape_varies() {
        let mut rng = StdRng::seed_from_u64(10);
        let a = gamma_params_for_monthly_rain(5.0, &mut rng).unwrap();
        let b = gamma_params_for_monthly_rain(5.0, &mut rng).unwrap();
        assert_ne!(a.shape(), b.shape());
    }

    #[test]
    fn monthly_rain_rejects_non_positive() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            gamma_params_for_monthly_rain(0.0, &mut rng),
            Err(DistFitError::Degenerate { .. })
        ));
        assert!(matches!(
            gamma_params_for_monthly_rain(f64::NAN, &mut rng),
            Err(DistFitError::NonFinite { .. })
        ));
    }

    #[test]
    fn gamma_params_is_copy_clone_send_sync() {
        fn assert_impl<T: Copy + Clone + Send + Sync>() {}
        assert_impl::<GammaParams>();
    }
}
