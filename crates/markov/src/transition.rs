//! Wet/dry transition probabilities.

use crate::error::MarkovError;
use crate::state::WetState;

/// First-order transition probabilities of the wet/dry chain.
///
/// `p_wet_wet` is P(wet tomorrow | wet today) and `p_wet_dry` is
/// P(wet tomorrow | dry today).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionProbs {
    p_wet_wet: f64,
    p_wet_dry: f64,
}

impl TransitionProbs {
    /// Creates validated transition probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidProbability`] if either value is
    /// non-finite or outside `[0, 1]`.
    pub fn new(p_wet_wet: f64, p_wet_dry: f64) -> Result<Self, MarkovError> {
        for (name, value) in [("p_wet_wet", p_wet_wet), ("p_wet_dry", p_wet_dry)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MarkovError::InvalidProbability { name, value });
            }
        }
        Ok(Self {
            p_wet_wet,
            p_wet_dry,
        })
    }

    /// P(wet | previous day wet).
    pub fn p_wet_wet(&self) -> f64 {
        self.p_wet_wet
    }

    /// P(wet | previous day dry).
    pub fn p_wet_dry(&self) -> f64 {
        self.p_wet_dry
    }

    /// Probability of a wet day given the previous day's state.
    pub fn p_wet_given(&self, prev: WetState) -> f64 {
        match prev {
            WetState::Wet => self.p_wet_wet,
            WetState::Dry => self.p_wet_dry,
        }
    }

    /// Stationary (unconditional) wet-day probability `pwd / (1 - pww + pwd)`.
    ///
    /// The chain with `pww = 1, pwd = 0` has no unique stationary
    /// distribution; 0.0 is returned for it.
    pub fn unconditional_wet(&self) -> f64 {
        let denom = 1.0 - self.p_wet_wet + self.p_wet_dry;
        if denom <= 0.0 {
            return 0.0;
        }
        self.p_wet_dry / denom
    }

    /// Samples the next state given the current state.
    pub fn sample(&self, from: WetState, rng: &mut impl rand::Rng) -> WetState {
        let u: f64 = rng.random();
        if u < self.p_wet_given(from) {
            WetState::Wet
        } else {
            WetState::Dry
        }
    }
}

/// Estimates transition probabilities from a daily precipitation series.
///
/// Counts consecutive-day pairs within `series`; a day is wet when its
/// value is `> 0`. A probability whose conditioning state never occurs
/// (e.g. no wet day followed by another day) is reported as 0.0.
pub fn estimate_transitions(series: &[f64]) -> TransitionProbs {
    // counts[from][to]
    let mut counts = [[0usize; 2]; 2];
    for pair in series.windows(2) {
        let from = WetState::of(pair[0]);
        let to = WetState::of(pair[1]);
        counts[from.as_index()][to.as_index()] += 1;
    }
    let ratio = |row: [usize; 2]| {
        let total = row[0] + row[1];
        if total == 0 {
            0.0
        } else {
            row[WetState::Wet.as_index()] as f64 / total as f64
        }
    };
    TransitionProbs {
        p_wet_wet: ratio(counts[WetState::Wet.as_index()]),
        p_wet_dry: ratio(counts[WetState::Dry.as_index()]),
    }
}
