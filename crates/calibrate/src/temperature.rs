//! Daily temperature generation with skew-normal innovations.

use aeolus_distfit::{SkewedInnovations, innovation_sd, innovation_skew, skew_normal_params};
use rand::Rng;
use tracing::debug;

use crate::autoregressive::{InnovationSource, MonthTarget, calibrate_year};
use crate::config::CalibrationConfig;
use crate::error::CalibrateError;
use crate::params::{Calibrated, GenerationTrace, Observed};
use crate::stats::TemperatureStats;

/// Generates one year of daily temperature (tmin or tmax) calibrated to
/// `obs`.
///
/// Each month is an AR(1) series whose innovations are skew-normal with
/// zero mean and the sd and skew that make the series match the month's
/// targets. Up to `ar_attempts` candidates are drawn per month and the
/// one with the lowest worst-case error is kept. Targets for which no
/// innovation distribution exists fall back to zero innovations.
///
/// # Errors
///
/// Returns [`CalibrateError::InvalidConfig`] for an invalid `config`.
/// Shortfalls against the targets are reported through
/// [`Calibrated::acceptable`], never as errors.
#[tracing::instrument(skip(obs, config, rng), fields(year = obs.year()))]
pub fn generate_temperature<R: Rng>(
    obs: &Observed<TemperatureStats>,
    config: &CalibrationConfig,
    rng: &mut R,
) -> Result<Calibrated<TemperatureStats>, CalibrateError> {
    config.validate()?;
    let t = obs.obs();
    let targets: [MonthTarget; 12] = std::array::from_fn(|i| MonthTarget {
        mean: t.mean[i + 1],
        sd: t.sd[i + 1],
        lag1: t.lag1[i + 1],
        skew: Some(t.skew[i + 1]),
    });

    let year = calibrate_year(obs.year(), t.mean[0], &targets, None, config, rng, |target, rng| {
        let sd_e = innovation_sd(target.sd, target.lag1);
        let skew_e = innovation_skew(target.skew.unwrap_or(0.0), target.lag1);
        match skew_normal_params(0.0, sd_e, skew_e, rng) {
            Ok(SkewedInnovations::Constant(_)) => InnovationSource::Zero,
            Ok(dist) => InnovationSource::Skewed(dist),
            Err(e) => {
                debug!(error = %e, "no innovation distribution, using zero innovations");
                InnovationSource::Zero
            }
        }
    });

    Calibrated::assemble(
        obs,
        year.values,
        year.months,
        GenerationTrace::Autoregressive {
            innovations: year.innovations,
        },
        config,
    )
}
