//! Relative-error evaluation against target statistics.

/// Fraction of statistics that must be within threshold for a fit to be
/// reported as acceptable.
pub const DEFAULT_PASS_QUOTA: f64 = 0.99;

/// Relative error in percent: `100 * |estimate - target| / |target|`.
///
/// A zero target has no scale; the error is `0.0` when the estimate is also
/// zero and `100.0` otherwise.
pub fn relative_error(target: f64, estimate: f64) -> f64 {
    if target == 0.0 {
        return if estimate == 0.0 { 0.0 } else { 100.0 };
    }
    100.0 * (estimate - target).abs() / target.abs()
}

/// Outcome of comparing a set of estimates against their targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    errors: Vec<f64>,
    excess: Vec<f64>,
    n_passed: usize,
    acceptable: bool,
}

impl ErrorReport {
    /// Relative errors (percent), one per statistic.
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Relative excess over each threshold, `max(0, (err - thr) / thr)`.
    pub fn excess(&self) -> &[f64] {
        &self.excess
    }

    /// Number of statistics at or below their threshold.
    pub fn n_passed(&self) -> usize {
        self.n_passed
    }

    /// Whether the pass quota was met.
    pub fn acceptable(&self) -> bool {
        self.acceptable
    }

    /// Largest relative error, or 0.0 when there are no statistics.
    pub fn worst(&self) -> f64 {
        self.errors.iter().copied().fold(0.0, f64::max)
    }
}

/// Evaluates per-statistic relative errors against per-statistic thresholds.
///
/// A statistic passes when its error is `<= threshold`. The report is
/// acceptable when at least `pass_quota` of the statistics pass, so a single
/// unstable statistic (e.g. skew of a near-symmetric month) may miss while
/// the set is still accepted. An empty set is acceptable.
///
/// # Panics
///
/// Panics if `thresholds`, `targets` and `estimates` differ in length.
pub fn evaluate_errors(
    thresholds: &[f64],
    targets: &[f64],
    estimates: &[f64],
    pass_quota: f64,
) -> ErrorReport {
    assert!(
        thresholds.len() == targets.len() && targets.len() == estimates.len(),
        "evaluate_errors: thresholds, targets and estimates must have equal length"
    );

    let mut errors = Vec::with_capacity(targets.len());
    let mut excess = Vec::with_capacity(targets.len());
    let mut n_passed = 0;
    for ((&thr, &target), &est) in thresholds.iter().zip(targets).zip(estimates) {
        let err = relative_error(target, est);
        if err <= thr {
            n_passed += 1;
        }
        let over = if thr > 0.0 {
            ((err - thr) / thr).max(0.0)
        } else if err > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };
        errors.push(err);
        excess.push(over);
    }

    let acceptable = if errors.is_empty() {
        true
    } else {
        n_passed as f64 / errors.len() as f64 >= pass_quota
    };

    ErrorReport {
        errors,
        excess,
        n_passed,
        acceptable,
    }
}
