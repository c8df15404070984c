//! Daily rainfall generation: monthly amounts first, then day placement.

use aeolus_calendar::{days_in_year, month_lengths};
use aeolus_distfit::{DistFitError, gamma_params_for_monthly_rain};
use aeolus_markov::{TransitionProbs, WetState, estimate_transitions, simulate_states};
use aeolus_stats::relative_error;
use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use crate::config::CalibrationConfig;
use crate::error::CalibrateError;
use crate::params::{Calibrated, GenerationTrace, MonthOutcome, Observed};
use crate::search::{best_of, try_best_of};
use crate::stats::RainStats;

/// Randomly selects `k` indices from `indices` without replacement.
fn sample_without_replacement(indices: &[usize], k: usize, rng: &mut impl Rng) -> Vec<usize> {
    // Fisher-Yates partial shuffle
    let mut pool = indices.to_vec();
    let k = k.min(pool.len());
    for i in 0..k {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }
    pool[..k].to_vec()
}

/// Assigns `amounts` in order to the wet days of `states`.
///
/// Wet days beyond the last amount stay dry: the chain's surplus wet days
/// are dropped so the month total is kept at the drawn sum. Amounts left
/// over when the chain has too few wet days go, largest first, to randomly
/// chosen dry days. The month total is always `sum(amounts)`.
fn place_amounts(states: &[WetState], amounts: &[f64], rng: &mut impl Rng) -> Vec<f64> {
    let mut month = vec![0.0; states.len()];
    let mut placed = 0;
    for (slot, state) in month.iter_mut().zip(states) {
        if state.is_wet() && placed < amounts.len() {
            *slot = amounts[placed];
            placed += 1;
        }
    }

    if placed < amounts.len() {
        let mut leftover = amounts[placed..].to_vec();
        leftover.sort_by(|a, b| b.total_cmp(a));
        let dry: Vec<usize> = states
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_wet())
            .map(|(i, _)| i)
            .collect();
        let chosen = sample_without_replacement(&dry, leftover.len(), rng);
        for (i, amount) in chosen.into_iter().zip(leftover) {
            month[i] = amount;
        }
    }
    month
}

/// Worst relative error of the month's achieved pww and pwd.
fn sequence_error(probs: &TransitionProbs, month: &[f64]) -> f64 {
    let est = estimate_transitions(month);
    relative_error(probs.p_wet_wet(), est.p_wet_wet())
        .max(relative_error(probs.p_wet_dry(), est.p_wet_dry()))
}

struct RainMonth {
    values: Vec<f64>,
    amounts: Vec<f64>,
    error: f64,
    attempts: usize,
    converged: bool,
}

/// Number of wet days implied by the transition probabilities.
fn wet_day_count(probs: &TransitionProbs, days: usize, bias: f64) -> usize {
    let pw = (probs.unconditional_wet() + bias).clamp(0.0, 1.0);
    (days as f64 * pw).floor() as usize
}

fn calibrate_month<R: Rng>(
    total: f64,
    probs: &TransitionProbs,
    days: usize,
    previous: Option<WetState>,
    config: &CalibrationConfig,
    rng: &mut R,
) -> Result<RainMonth, CalibrateError> {
    let n_wet = wet_day_count(probs, days, config.wet_fraction_bias());
    if total <= 0.0 || n_wet == 0 {
        debug!(total, n_wet, "dry month");
        let values = vec![0.0; days];
        let total_error = relative_error(total, 0.0);
        let seq_error = sequence_error(probs, &values);
        return Ok(RainMonth {
            values,
            amounts: Vec::new(),
            error: total_error.max(seq_error),
            attempts: 0,
            converged: total_error <= config.good_fit_threshold()
                && seq_error <= config.sequence_threshold(),
        });
    }
    let mean_per_wet_day = total / n_wet as f64;

    // Amounts: the gamma shape is redrawn on every attempt.
    let amounts = try_best_of(
        config.rain_amount_attempts(),
        config.good_fit_threshold(),
        || {
            let dist = gamma_params_for_monthly_rain(mean_per_wet_day, rng)?.sampler()?;
            let draw: Vec<f64> = (0..n_wet).map(|_| dist.sample(rng)).collect();
            let err = relative_error(total, draw.iter().sum());
            Ok::<_, DistFitError>((draw, err))
        },
    )?;

    // Placement: only the wet/dry sequence changes between attempts.
    let placement = best_of(
        config.rain_sequence_attempts(),
        config.sequence_threshold(),
        || {
            let states = simulate_states(probs, days, previous, rng);
            let month = place_amounts(&states, &amounts.candidate, rng);
            let err = sequence_error(probs, &month);
            (month, err)
        },
    );

    Ok(RainMonth {
        values: placement.candidate,
        amounts: amounts.candidate,
        error: amounts.error.max(placement.error),
        attempts: amounts.attempts + placement.attempts,
        converged: amounts.converged && placement.converged,
    })
}

/// Generates one year of daily rainfall calibrated to `obs`.
///
/// Per month, in calendar order:
///
/// 1. The wet-day count is `floor(days * pw)` with
///    `pw = pwd / (1 - pww + pwd) + wet_fraction_bias`, clamped to `[0, 1]`.
/// 2. Wet-day amounts are drawn from a gamma whose shape is randomised per
///    attempt; the draw whose sum is closest to the target total is kept.
/// 3. A wet/dry chain is simulated from the previous month's last day
///    (unconditional start in January) and the amounts are placed on it;
///    the placement whose pww/pwd are closest to the targets is kept.
///
/// A month with a zero target total or no implied wet days is all zeros.
///
/// # Errors
///
/// Returns [`CalibrateError::InvalidConfig`] for an invalid `config`.
#[tracing::instrument(skip(obs, config, rng), fields(year = obs.year()))]
pub fn generate_rain<R: Rng>(
    obs: &Observed<RainStats>,
    config: &CalibrationConfig,
    rng: &mut R,
) -> Result<Calibrated<RainStats>, CalibrateError> {
    config.validate()?;
    let r = obs.obs();
    let mut values = Vec::with_capacity(days_in_year(obs.year()));
    let mut amounts = Vec::with_capacity(12);
    let mut months = Vec::with_capacity(12);
    let mut previous = None;

    for (&len, month) in month_lengths(obs.year()).iter().zip(1u8..) {
        let m = usize::from(month);
        let probs = TransitionProbs::new(r.p_wet_wet[m], r.p_wet_dry[m])?;
        let out = calibrate_month(r.total[m], &probs, usize::from(len), previous, config, rng)?;

        debug!(
            month,
            error = out.error,
            attempts = out.attempts,
            converged = out.converged,
            "month calibrated"
        );
        months.push(MonthOutcome {
            month,
            error: out.error,
            attempts: out.attempts,
            converged: out.converged,
        });

        previous = out.values.last().map(|&v| WetState::of(v));
        values.extend(out.values);
        amounts.push(out.amounts);
    }

    Calibrated::assemble(
        obs,
        values,
        months.try_into().expect("one outcome per month"),
        GenerationTrace::Rain { amounts },
        config,
    )
}
