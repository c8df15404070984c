//! Daily wind speed generation with Weibull innovations.

use aeolus_distfit::weibull_params;
use rand::Rng;
use tracing::debug;

use crate::autoregressive::{InnovationSource, MonthTarget, calibrate_year};
use crate::config::CalibrationConfig;
use crate::error::CalibrateError;
use crate::params::{Calibrated, GenerationTrace, Observed};
use crate::stats::WindStats;

/// Generates one year of daily wind speed calibrated to `obs`.
///
/// Same month-by-month search as [`crate::generate_temperature`], with
/// Weibull innovations centred on their mean and every value held at or
/// above `config.wind_floor()` inside the recurrence.
///
/// # Errors
///
/// Returns [`CalibrateError::InvalidConfig`] for an invalid `config`.
#[tracing::instrument(skip(obs, config, rng), fields(year = obs.year()))]
pub fn generate_wind<R: Rng>(
    obs: &Observed<WindStats>,
    config: &CalibrationConfig,
    rng: &mut R,
) -> Result<Calibrated<WindStats>, CalibrateError> {
    config.validate()?;
    let w = obs.obs();
    let targets: [MonthTarget; 12] = std::array::from_fn(|i| MonthTarget {
        mean: w.mean[i + 1],
        sd: w.sd[i + 1],
        lag1: w.lag1[i + 1],
        skew: None,
    });

    let floor = Some(config.wind_floor());
    let year = calibrate_year(obs.year(), w.mean[0], &targets, floor, config, rng, |target, _| {
        let fitted = weibull_params(target.mean, target.sd, target.lag1)
            .and_then(|p| Ok((p.sampler()?, p.mean())));
        match fitted {
            Ok((dist, mean)) => InnovationSource::Centred { dist, mean },
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
