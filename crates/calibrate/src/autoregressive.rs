//! Month-by-month AR(1) calibration shared by temperature and wind.

use aeolus_calendar::{days_in_year, month_lengths};
use aeolus_distfit::SkewedInnovations;
use aeolus_stats::{lag1_autocorrelation, mean, relative_error, sd, skewness};
use rand::Rng;
use rand_distr::{Distribution, Weibull};
use tracing::debug;

use crate::config::CalibrationConfig;
use crate::params::MonthOutcome;
use crate::search::best_of;

/// Builds a lag-1 autoregressive series from innovations.
///
/// `x[0] = c + lag1 * carry + e[0]` and `x[i] = c + lag1 * x[i-1] + e[i]`
/// with `c = mean * (1 - lag1)`. When `floor` is set every value is raised
/// to at least `floor` before it feeds the next day.
pub fn autoregress(
    mean: f64,
    lag1: f64,
    carry: f64,
    innovations: &[f64],
    floor: Option<f64>,
) -> Vec<f64> {
    let c = mean * (1.0 - lag1);
    let mut prev = carry;
    innovations
        .iter()
        .map(|&e| {
            let mut x = c + lag1 * prev + e;
            if let Some(f) = floor {
                x = x.max(f);
            }
            prev = x;
            x
        })
        .collect()
}

/// Targets of one month.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MonthTarget {
    pub mean: f64,
    pub sd: f64,
    pub lag1: f64,
    pub skew: Option<f64>,
}

impl MonthTarget {
    /// Worst relative error of the month's mean, sd, lag-1 and (if targeted)
    /// skew.
    fn worst_error(&self, series: &[f64]) -> f64 {
        let mut worst = relative_error(self.mean, mean(series))
            .max(relative_error(self.sd, sd(series)))
            .max(relative_error(self.lag1, lag1_autocorrelation(series)));
        if let Some(skew) = self.skew {
            worst = worst.max(relative_error(skew, skewness(series)));
        }
        worst
    }
}

/// Zero-mean innovation source for one month.
#[derive(Debug, Clone)]
pub(crate) enum InnovationSource {
    Zero,
    Skewed(SkewedInnovations),
    /// Weibull draws shifted by the distribution mean.
    Centred { dist: Weibull<f64>, mean: f64 },
}

impl InnovationSource {
    fn fill<R: Rng>(&self, rng: &mut R, out: &mut [f64]) {
        match self {
            Self::Zero => out.fill(0.0),
            Self::Skewed(dist) => out.iter_mut().for_each(|e| *e = dist.sample(rng)),
            Self::Centred { dist, mean } => {
                out.iter_mut().for_each(|e| *e = dist.sample(rng) - mean)
            }
        }
    }
}

pub(crate) struct ArYear {
    pub values: Vec<f64>,
    pub innovations: Vec<f64>,
    pub months: [MonthOutcome; 12],
}

/// Calibrates the twelve months of `year` in calendar order.
///
/// January starts from `annual_mean`; every later month starts from the
/// last value of the month before. `source_for` is called once per month,
/// before that month's search.
pub(crate) fn calibrate_year<R: Rng>(
    year: i32,
    annual_mean: f64,
    targets: &[MonthTarget; 12],
    floor: Option<f64>,
    config: &CalibrationConfig,
    rng: &mut R,
    mut source_for: impl FnMut(&MonthTarget, &mut R) -> InnovationSource,
) -> ArYear {
    let n = days_in_year(year);
    let mut values = Vec::with_capacity(n);
    let mut innovations = Vec::with_capacity(n);
    let mut months = Vec::with_capacity(12);
    let mut carry = annual_mean;

    for ((target, &len), month) in targets.iter().zip(&month_lengths(year)).zip(1u8..) {
        let source = source_for(target, &mut *rng);
        let attempts = match source {
            InnovationSource::Zero => 1,
            _ => config.ar_attempts(),
        };

        let outcome = best_of(attempts, config.good_fit_threshold(), || {
            let mut e = vec![0.0; usize::from(len)];
            source.fill(rng, &mut e);
            let x = autoregress(target.mean, target.lag1, carry, &e, floor);
            let err = target.worst_error(&x);
            ((x, e), err)
        });

        debug!(
            month,
            error = outcome.error,
            attempts = outcome.attempts,
            converged = outcome.converged,
            "month calibrated"
        );
        months.push(MonthOutcome {
            month,
            error: outcome.error,
            attempts: outcome.attempts,
            converged: outcome.converged,
        });

        let (x, e) = outcome.candidate;
        if let Some(&last) = x.last() {
            carry = last;
        }
        values.extend(x);
        innovations.extend(e);
    }

    ArYear {
        values,
        innovations,
        months: months.try_into().expect("one outcome per month"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn autoregress_recurrence() {
        let x = autoregress(10.0, 0.5, 12.0, &[1.0, -1.0, 0.0], None);
        // c = 5; x0 = 5 + 6 + 1 = 12; x1 = 5 + 6 - 1 = 10; x2 = 5 + 5 = 10
        assert_eq!(x, vec![12.0, 10.0, 10.0]);
    }

    #[test]
    fn autoregress_floor_feeds_forward() {
        let x = autoregress(1.0, 0.5, 1.0, &[-5.0, 0.0], Some(0.1));
        assert_eq!(x[0], 0.1);
        // c = 0.5; x1 = 0.5 + 0.05
        assert_relative_eq!(x[1], 0.55, epsilon = 1e-12);
    }

    #[test]
    fn zero_innovations_settle_on_mean() {
        let x = autoregress(3.0, 0.0, 99.0, &[0.0; 5], None);
        assert!(x.iter().all(|&v| v == 3.0));
    }

    #[test]
    fn worst_error_picks_max() {
        let t = MonthTarget {
            mean: 2.0,
            sd: 1.0,
            lag1: 0.0,
            skew: None,
        };
        // mean 2.5 (25%), sd of [2,3] = 0.7071 (29.3%), lag1 undefined -> 0 (0%)
        let err = t.worst_error(&[2.0, 3.0]);
        assert_relative_eq!(err, 100.0 * (1.0 - 0.5f64.sqrt()), epsilon = 1e-9);
    }

    #[test]
    fn zero_source_single_attempt() {
        let targets = [MonthTarget {
            mean: 5.0,
            sd: 0.0,
            lag1: 0.0,
            skew: None,
        }; 12];
        let mut rng = StdRng::seed_from_u64(0);
        let year = calibrate_year(
            2023,
            5.0,
            &targets,
            None,
            &CalibrationConfig::new(),
            &mut rng,
            |_, _| InnovationSource::Zero,
        );
        assert_eq!(year.values.len(), 365);
        assert!(year.values.iter().all(|&v| v == 5.0));
        assert!(year.months.iter().all(|m| m.attempts == 1));
    }
}
