//! Parameter sets: validated targets in, calibrated series out.

use aeolus_calendar::days_in_year;
use aeolus_stats::{ErrorReport, evaluate_errors};
use tracing::{info, warn};

use crate::config::CalibrationConfig;
use crate::error::CalibrateError;
use crate::stats::Statistics;

/// Target statistics for one (variable, year).
#[derive(Debug, Clone, PartialEq)]
pub struct Observed<T> {
    year: i32,
    obs: T,
}

impl<T: Statistics> Observed<T> {
    /// Wraps validated targets.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrateError::InvalidTarget`] if any target is out of range.
    pub fn new(year: i32, obs: T) -> Result<Self, CalibrateError> {
        obs.validate()?;
        Ok(Self { year, obs })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn obs(&self) -> &T {
        &self.obs
    }
}

/// Search summary for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthOutcome {
    /// Calendar month, 1..=12.
    pub month: u8,
    /// Worst relative error (percent) of the accepted draw.
    ///
    /// For rain this is the larger of the total error and the pww/pwd
    /// error, which are held to different thresholds (`good_fit_threshold`
    /// and `sequence_threshold`). A converged rain month may therefore show
    /// an error above `good_fit_threshold`.
    pub error: f64,
    /// Samples drawn.
    pub attempts: usize,
    /// Whether every statistic of the month reached its own threshold.
    pub converged: bool,
}

/// Random draws behind a calibrated series.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationTrace {
    /// Daily innovations `e` of `x[i] = c + lag1 * x[i-1] + e[i]`, one per day.
    Autoregressive {
        /// Innovations for the whole year.
        innovations: Vec<f64>,
    },
    /// Wet-day amounts accepted in the amount phase, per month.
    Rain {
        /// Twelve amount lists, January first.
        amounts: Vec<Vec<f64>>,
    },
}

/// A generated year with its achieved statistics and errors.
#[derive(Debug, Clone)]
pub struct Calibrated<T> {
    year: i32,
    obs: T,
    est: T,
    report: ErrorReport,
    values: Vec<f64>,
    months: [MonthOutcome; 12],
    trace: GenerationTrace,
}

impl<T: Statistics> Calibrated<T> {
    /// Measures `values`, evaluates errors against the targets and logs the
    /// year summary.
    pub(crate) fn assemble(
        observed: &Observed<T>,
        values: Vec<f64>,
        months: [MonthOutcome; 12],
        trace: GenerationTrace,
        config: &CalibrationConfig,
    ) -> Result<Self, CalibrateError> {
        let est = T::measure(&values, observed.year)?;
        let report = evaluate_errors(
            &T::thresholds(config),
            &observed.obs.values(),
            &est.values(),
            config.pass_quota(),
        );
        debug_assert_eq!(values.len(), days_in_year(observed.year));

        let converged = months.iter().filter(|m| m.converged).count();
        if report.acceptable() {
            info!(
                year = observed.year,
                converged_months = converged,
                passed = report.n_passed(),
                worst_error = report.worst(),
                "year calibrated"
            );
        } else {
            warn!(
                year = observed.year,
                converged_months = converged,
                passed = report.n_passed(),
                total = report.errors().len(),
                worst_error = report.worst(),
                "year below pass quota"
            );
        }

        Ok(Self {
            year: observed.year,
            obs: observed.obs.clone(),
            est,
            report,
            values,
            months,
            trace,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Target statistics.
    pub fn obs(&self) -> &T {
        &self.obs
    }

    /// Statistics recomputed from [`Calibrated::values`].
    pub fn est(&self) -> &T {
        &self.est
    }

    /// Relative errors in percent, field-major in `obs` field order.
    pub fn errors(&self) -> &[f64] {
        self.report.errors()
    }

    /// Whether the pass quota was met.
    pub fn acceptable(&self) -> bool {
        self.report.acceptable()
    }

    pub fn report(&self) -> &ErrorReport {
        &self.report
    }

    /// Daily values, one per day of the year.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn months(&self) -> &[MonthOutcome; 12] {
        &self.months
    }

    pub fn trace(&self) -> &GenerationTrace {
        &self.trace
    }
}
