//! Bounded best-of search.

use std::convert::Infallible;

/// Result of a bounded search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<C> {
    /// Lowest-error candidate seen.
    pub candidate: C,
    /// Its error.
    pub error: f64,
    /// Number of samples drawn.
    pub attempts: usize,
    /// Whether the search stopped on the early-exit threshold.
    pub converged: bool,
}

/// Draws up to `n_attempts` candidates and keeps the one with the lowest
/// error, stopping at the first error `<= early_exit`.
///
/// At least one candidate is always drawn, even when `n_attempts == 0`.
/// A NaN error never replaces a finite one.
pub fn best_of<C>(
    n_attempts: usize,
    early_exit: f64,
    mut sample: impl FnMut() -> (C, f64),
) -> SearchOutcome<C> {
    match try_best_of(n_attempts, early_exit, || Ok::<_, Infallible>(sample())) {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

/// Fallible variant of [`best_of`]; the first sampler error aborts the
/// search.
pub fn try_best_of<C, E>(
    n_attempts: usize,
    early_exit: f64,
    mut sample: impl FnMut() -> Result<(C, f64), E>,
) -> Result<SearchOutcome<C>, E> {
    let (candidate, error) = sample()?;
    let mut best = SearchOutcome {
        candidate,
        error,
        attempts: 1,
        converged: error <= early_exit,
    };
    while !best.converged && best.attempts < n_attempts {
        let (candidate, error) = sample()?;
        best.attempts += 1;
        if error < best.error || (best.error.is_nan() && !error.is_nan()) {
            best.candidate = candidate;
            best.error = error;
        }
        best.converged = best.error <= early_exit;
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausts_budget_keeping_best() {
        let errors = [9.0, 4.0, 7.0, 5.0];
        let mut i = 0;
        let out = best_of(4, 1.0, || {
            let e = errors[i];
            i += 1;
            (i, e)
        });
        assert_eq!(out.candidate, 2);
        assert_eq!(out.error, 4.0);
        assert_eq!(out.attempts, 4);
        assert!(!out.converged);
    }

    #[test]
    fn stops_early() {
        let errors = [9.0, 2.0, 0.5, 0.1];
        let mut i = 0;
        let out = best_of(100, 2.5, || {
            let e = errors[i];
            i += 1;
            (e, e)
        });
        assert_eq!(out.attempts, 2);
        assert_eq!(out.error, 2.0);
        assert!(out.converged);
    }

    #[test]
    fn zero_budget_draws_once() {
        let mut calls = 0;
        let out = best_of(0, 0.0, || {
            calls += 1;
            ((), 3.0)
        });
        assert_eq!(calls, 1);
        assert_eq!(out.attempts, 1);
    }

    #[test]
    fn nan_is_replaced() {
        let errors = [f64::NAN, 3.0, f64::NAN];
        let mut i = 0;
        let out = best_of(3, 1.0, || {
            let e = errors[i];
            i += 1;
            (i, e)
        });
        assert_eq!(out.candidate, 2);
        assert_eq!(out.error, 3.0);
    }

    #[test]
    fn error_aborts() {
        let mut i = 0;
        let out: Result<SearchOutcome<usize>, &str> = try_best_of(10, 0.0, || {
            i += 1;
            if i == 3 { Err("boom") } else { Ok((i, 5.0)) }
        });
        assert_eq!(out.unwrap_err(), "boom");
    }
}
