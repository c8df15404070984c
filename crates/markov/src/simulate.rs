//! Markov chain state simulation.

use crate::error::MarkovError;
use crate::state::WetState;
use crate::transition::TransitionProbs;

/// Simulates a sequence of `n_days` wet/dry states.
///
/// # Arguments
///
/// * `probs` - Transition probabilities.
/// * `n_days` - Number of days to simulate.
/// * `initial` - State of the day before the first simulated day. When
///   `None`, the first day is drawn from the unconditional wet probability.
/// * `rng` - Random number generator.
pub fn simulate_states(
    probs: &TransitionProbs,
    n_days: usize,
    initial: Option<WetState>,
    rng: &mut impl rand::Rng,
) -> Vec<WetState> {
    let mut out = vec![WetState::Dry; n_days];
    // Delegate to _into; the buffer is sized to n_days.
    simulate_states_into(probs, n_days, initial, rng, &mut out)
        .expect("buffer length matches n_days");
    out
}

/// Simulates wet/dry states into a pre-allocated buffer.
///
/// # Errors
///
/// Returns [`MarkovError::BufferLengthMismatch`] if `out.len() != n_days`.
pub fn simulate_states_into(
    probs: &TransitionProbs,
    n_days: usize,
    initial: Option<WetState>,
    rng: &mut impl rand::Rng,
    out: &mut [WetState],
) -> Result<(), MarkovError> {
    if out.len() != n_days {
        return Err(MarkovError::BufferLengthMismatch {
            expected: n_days,
            got: out.len(),
        });
    }
    let mut prev = initial;
    for slot in out.iter_mut() {
        let next = step(probs, prev, rng);
        *slot = next;
        prev = Some(next);
    }
    Ok(())
}

fn step(probs: &TransitionProbs, prev: Option<WetState>, rng: &mut impl rand::Rng) -> WetState {
    match prev {
        Some(state) => probs.sample(state, rng),
        None => {
            if rng.random_bool(probs.unconditional_wet()) {
                WetState::Wet
            } else {
                WetState::Dry
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn length_correctness() {
        let probs = TransitionProbs::new(0.6, 0.3).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(simulate_states(&probs, 100, None, &mut rng).len(), 100);
    }

    #[test]
    fn empty() {
        let probs = TransitionProbs::new(0.6, 0.3).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(simulate_states(&probs, 0, Some(WetState::Wet), &mut rng).is_empty());
    }

    #[test]
    fn deterministic_with_seed() {
        let probs = TransitionProbs::new(0.55, 0.2).unwrap();
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        assert_eq!(
            simulate_states(&probs, 200, None, &mut rng1),
            simulate_states(&probs, 200, None, &mut rng2)
        );
    }

    #[test]
    fn absorbing_wet_keeps_wet() {
        let probs = TransitionProbs::new(1.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let states = simulate_states(&probs, 50, Some(WetState::Wet), &mut rng);
        assert!(states.iter().all(|s| s.is_wet()));
        let states = simulate_states(&probs, 50, Some(WetState::Dry), &mut rng);
        assert!(states.iter().all(|s| !s.is_wet()));
    }

    #[test]
    fn into_matches_allocating() {
        let probs = TransitionProbs::new(0.5, 0.25).unwrap();
        let mut rng1 = StdRng::seed_from_u64(999);
        let alloc = simulate_states(&probs, 31, Some(WetState::Dry), &mut rng1);

        let mut rng2 = StdRng::seed_from_u64(999);
        let mut buf = vec![WetState::Dry; 31];
        simulate_states_into(&probs, 31, Some(WetState::Dry), &mut rng2, &mut buf).unwrap();
        assert_eq!(alloc, buf);
    }

    #[test]
    fn buffer_mismatch_error() {
        let probs = TransitionProbs::new(0.5, 0.25).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut buf = vec![WetState::Dry; 5];
        let result = simulate_states_into(&probs, 10, None, &mut rng, &mut buf);
        assert!(matches!(
            result,
            Err(MarkovError::BufferLengthMismatch {
                expected: 10,
                got: 5
            })
        ));
    }

    #[test]
    fn wet_fraction_matches_stationary() {
        let probs = TransitionProbs::new(0.55, 0.20).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let states = simulate_states(&probs, n, None, &mut rng);
        let wet = states.iter().filter(|s| s.is_wet()).count() as f64 / n as f64;
        assert!(
            (wet - probs.unconditional_wet()).abs() < 0.02,
            "wet fraction {wet}, expected ~{}",
            probs.unconditional_wet()
        );
    }
}
