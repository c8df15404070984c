//! Two-state Markov chain for daily precipitation occurrence.
//!
//! This crate models the wet/dry occurrence process as a first-order,
//! two-state Markov chain parameterised by the probability of a wet day
//! following a wet day (`p_wet_wet`) and following a dry day (`p_wet_dry`).
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   targets     │────▶│  transition    │────▶│    simulate      │
//!  │ (pww, pwd)    │     │  (validate)    │     │  (draw states)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//!                                                        │
//!                         estimate_transitions ◀─────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use aeolus_markov::{TransitionProbs, simulate_states};
//! use rand::SeedableRng;
//!
//! let probs = TransitionProbs::new(0.55, 0.20).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let states = simulate_states(&probs, 30, None, &mut rng);
//! assert_eq!(states.len(), 30);
//! ```

pub mod error;
pub mod simulate;
pub mod state;
pub mod transition;

pub use error::MarkovError;
pub use simulate::{simulate_states, simulate_states_into};
pub use state::WetState;
pub use transition::{TransitionProbs, estimate_transitions};
