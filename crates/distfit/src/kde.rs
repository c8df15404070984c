//! F-distribution resampling with Gaussian kernel smoothing.

use rand::Rng;
use rand_distr::{Distribution, FisherF, Normal};

use crate::error::{DistFitError, ensure_finite};

/// Denominator degrees of freedom held fixed when matching skew.
pub const F_FIXED_DOF: f64 = 500.0;

/// Number of F draws backing a [`KernelDensity`].
pub const KDE_SAMPLE_SIZE: usize = 10_000;

/// Gaussian kernel density over a fixed sample.
///
/// Sampling picks a stored point uniformly and adds `N(0, bandwidth)`.
#[derive(Debug, Clone)]
pub struct KernelDensity {
    points: Vec<f64>,
    kernel: Normal<f64>,
}

impl KernelDensity {
    /// Builds a density over `points` with the given kernel bandwidth.
    ///
    /// # Errors
    ///
    /// Returns [`DistFitError::Degenerate`] if `points` is empty and
    /// [`DistFitError::Construction`] for an invalid bandwidth.
    pub fn new(points: Vec<f64>, bandwidth: f64) -> Result<Self, DistFitError> {
        if points.is_empty() {
            return Err(DistFitError::Degenerate {
                reason: "kernel density needs at least one point".to_string(),
            });
        }
        let kernel = Normal::new(0.0, bandwidth).map_err(|e| DistFitError::Construction {
            family: "normal kernel",
            message: e.to_string(),
        })?;
        Ok(Self { points, kernel })
    }

    /// The stored sample.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Kernel standard deviation.
    pub fn bandwidth(&self) -> f64 {
        self.kernel.std_dev()
    }
}

impl Distribution<f64> for KernelDensity {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let i = rng.random_range(0..self.points.len());
        self.points[i] + self.kernel.sample(rng)
    }
}

/// Solves for the numerator degrees of freedom of F(d1, [`F_FIXED_DOF`])
/// whose skewness equals `|skew|`.
///
/// F skewness is `(2 d1 + m) sqrt(8 (d2 - 4)) / ((d2 - 6) sqrt(d1 (d1 + m)))`
/// with `m = d2 - 2`; squaring gives a quadratic in `d1`. Returns `None`
/// when `|skew|` is at or below the family's floor `2 sqrt(8 (d2 - 4)) / (d2 - 6)`.
pub fn f_dof_for_skew(skew: f64) -> Option<f64> {
    let d2 = F_FIXED_DOF;
    let m = d2 - 2.0;
    let a2 = 8.0 * (d2 - 4.0) / ((d2 - 6.0) * (d2 - 6.0));
    let gap = skew * skew - 4.0 * a2;
    if !gap.is_finite() || gap <= 0.0 {
        return None;
    }
    let k = a2 * m * m / gap;
    let d1 = (-m + (m * m + 4.0 * k).sqrt()) / 2.0;
    (d1 > 0.0 && d1.is_finite()).then_some(d1)
}

/// Builds a kernel density with the requested mean, sd and skew from an
/// F-distribution sample.
///
/// The sample is standardised, mirrored when `skew < 0`, and rescaled so
/// that sample variance plus kernel variance equals `sd^2`. The bandwidth
/// follows Scott's rule, `n^(-1/5)` times the sample sd.
///
/// # Errors
///
/// Returns [`DistFitError::Degenerate`] when no F(d1, 500) reaches `|skew|`
/// or `sd <= 0`.
pub fn f_resampled_density(
    mean: f64,
    sd: f64,
    skew: f64,
    rng: &mut impl Rng,
) -> Result<KernelDensity, DistFitError> {
    ensure_finite("mean", mean)?;
    ensure_finite("sd", sd)?;
    ensure_finite("skew", skew)?;
    if sd <= 0.0 {
        return Err(DistFitError::Degenerate {
            reason: format!("standard deviation must be positive, got {sd}"),
        });
    }
    let d1 = f_dof_for_skew(skew.abs()).ok_or_else(|| DistFitError::Degenerate {
        reason: format!("skew {skew} is below the F({F_FIXED_DOF}) family floor"),
    })?;
    let f = FisherF::new(d1, F_FIXED_DOF).map_err(|e| DistFitError::Construction {
        family: "fisher-f",
        message: e.to_string(),
    })?;

    let raw: Vec<f64> = (0..KDE_SAMPLE_SIZE).map(|_| f.sample(rng)).collect();
    let raw_mean = aeolus_stats::mean(&raw);
    let raw_sd = aeolus_stats::sd(&raw);
    if raw_sd <= 0.0 || !raw_sd.is_finite() {
        return Err(DistFitError::Degenerate {
            reason: format!("F({d1}, {F_FIXED_DOF}) sample has no spread"),
        });
    }

    let factor = (KDE_SAMPLE_SIZE as f64).powf(-0.2);
    let point_sd = sd / (1.0 + factor * factor).sqrt();
    let sign = if skew < 0.0 { -1.0 } else { 1.0 };
    let points: Vec<f64> = raw
        .iter()
        .map(|&x| mean + sign * (x - raw_mean) / raw_sd * point_sd)
        .collect();

    KernelDensity::new(points, factor * point_sd)
}
