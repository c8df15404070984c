//! Target and achieved statistic records.
//!
//! Each variable kind has one record type with an explicit field list.
//! Every field is a [`Monthly`] array: index 0 is the annual value and
//! indices 1..=12 are January..December.

use std::fmt;

use aeolus_calendar::annual_and_monthly;
use aeolus_markov::estimate_transitions;
use aeolus_stats::{lag1_autocorrelation, mean, sd, skewness};

use crate::config::CalibrationConfig;
use crate::error::CalibrateError;

/// Annual value followed by twelve monthly values.
pub type Monthly = [f64; 13];

/// Common interface over the statistic records.
pub trait Statistics: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Field names, in field order.
    const NAMES: &'static [&'static str];

    /// Borrow every field, in [`Self::NAMES`] order.
    fn fields(&self) -> Vec<&Monthly>;

    /// Builds a record from fields in [`Self::NAMES`] order.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrateError::FieldCount`] if `fields.len()` differs
    /// from `NAMES.len()`.
    fn from_fields(fields: &[Monthly]) -> Result<Self, CalibrateError>;

    /// Computes the statistics of a full-year daily series.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrateError::Calendar`] if the series length does not
    /// match the year.
    fn measure(series: &[f64], year: i32) -> Result<Self, CalibrateError>;

    /// Checks that every target lies in its admissible range.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrateError::InvalidTarget`] for the first offending value.
    fn validate(&self) -> Result<(), CalibrateError>;

    /// Early-exit threshold for the field at `field_index`.
    fn threshold(_field_index: usize, config: &CalibrationConfig) -> f64 {
        config.good_fit_threshold()
    }

    /// All values, field-major (13 per field).
    fn values(&self) -> Vec<f64> {
        self.fields().into_iter().flat_map(|f| f.iter().copied()).collect()
    }

    /// Thresholds aligned with [`Statistics::values`].
    fn thresholds(config: &CalibrationConfig) -> Vec<f64> {
        (0..Self::NAMES.len())
            .flat_map(|i| std::iter::repeat_n(Self::threshold(i, config), 13))
            .collect()
    }

    /// Looks up a field by name.
    fn field(&self, name: &str) -> Option<&Monthly> {
        let i = Self::NAMES.iter().position(|n| *n == name)?;
        self.fields().get(i).copied()
    }
}

fn monthly(slices: &[&[f64]; 13], f: impl Fn(&[f64]) -> f64) -> Monthly {
    let mut out = [0.0; 13];
    for (o, s) in out.iter_mut().zip(slices) {
        *o = f(*s);
    }
    out
}

fn check(
    statistic: &'static str,
    field: &Monthly,
    reason: &'static str,
    ok: impl Fn(f64) -> bool,
) -> Result<(), CalibrateError> {
    for (period, &value) in field.iter().enumerate() {
        if !value.is_finite() || !ok(value) {
            return Err(CalibrateError::InvalidTarget {
                statistic,
                period,
                value,
                reason,
            });
        }
    }
    Ok(())
}

fn expect_fields<const N: usize>(fields: &[Monthly]) -> Result<[Monthly; N], CalibrateError> {
    <[Monthly; N]>::try_from(fields).map_err(|_| CalibrateError::FieldCount {
        expected: N,
        got: fields.len(),
    })
}

/// Temperature statistics (used for both tmin and tmax).
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureStats {
    pub mean: Monthly,
    pub sd: Monthly,
    pub lag1: Monthly,
    pub skew: Monthly,
}

impl Statistics for TemperatureStats {
    const NAMES: &'static [&'static str] = &["mean", "sd", "lag1", "skew"];

    fn fields(&self) -> Vec<&Monthly> {
        vec![&self.mean, &self.sd, &self.lag1, &self.skew]
    }

    fn from_fields(fields: &[Monthly]) -> Result<Self, CalibrateError> {
        let [mean, sd, lag1, skew] = expect_fields::<4>(fields)?;
        Ok(Self {
            mean,
            sd,
            lag1,
            skew,
        })
    }

    fn measure(series: &[f64], year: i32) -> Result<Self, CalibrateError> {
        let slices = annual_and_monthly(series, year)?;
        Ok(Self {
            mean: monthly(&slices, mean),
            sd: monthly(&slices, sd),
            lag1: monthly(&slices, lag1_autocorrelation),
            skew: monthly(&slices, skewness),
        })
    }

    fn validate(&self) -> Result<(), CalibrateError> {
        check("mean", &self.mean, "must be finite", |_| true)?;
        check("sd", &self.sd, "must be finite and >= 0", |v| v >= 0.0)?;
        check("lag1", &self.lag1, "must lie in (-1, 1)", |v| v.abs() < 1.0)?;
        check("skew", &self.skew, "must be finite", |_| true)
    }
}

/// Wind speed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct WindStats {
    pub mean: Monthly,
    pub sd: Monthly,
    pub lag1: Monthly,
}

impl Statistics for WindStats {
    const NAMES: &'static [&'static str] = &["mean", "sd", "lag1"];

    fn fields(&self) -> Vec<&Monthly> {
        vec![&self.mean, &self.sd, &self.lag1]
    }

    fn from_fields(fields: &[Monthly]) -> Result<Self, CalibrateError> {
        let [mean, sd, lag1] = expect_fields::<3>(fields)?;
        Ok(Self { mean, sd, lag1 })
    }

    fn measure(series: &[f64], year: i32) -> Result<Self, CalibrateError> {
        let slices = annual_and_monthly(series, year)?;
        Ok(Self {
            mean: monthly(&slices, mean),
            sd: monthly(&slices, sd),
            lag1: monthly(&slices, lag1_autocorrelation),
        })
    }

    fn validate(&self) -> Result<(), CalibrateError> {
        check("mean", &self.mean, "must be finite and >= 0", |v| v >= 0.0)?;
        check("sd", &self.sd, "must be finite and >= 0", |v| v >= 0.0)?;
        check("lag1", &self.lag1, "must lie in (-1, 1)", |v| v.abs() < 1.0)
    }
}

/// Rainfall statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RainStats {
    pub total: Monthly,
    pub p_wet_wet: Monthly,
    pub p_wet_dry: Monthly,
}

impl Statistics for RainStats {
    const NAMES: &'static [&'static str] = &["total", "pww", "pwd"];

    fn fields(&self) -> Vec<&Monthly> {
        vec![&self.total, &self.p_wet_wet, &self.p_wet_dry]
    }

    fn from_fields(fields: &[Monthly]) -> Result<Self, CalibrateError> {
        let [total, p_wet_wet, p_wet_dry] = expect_fields::<3>(fields)?;
        Ok(Self {
            total,
            p_wet_wet,
            p_wet_dry,
        })
    }

    fn measure(series: &[f64], year: i32) -> Result<Self, CalibrateError> {
        let slices = annual_and_monthly(series, year)?;
        Ok(Self {
            total: monthly(&slices, |s| s.iter().sum()),
            p_wet_wet: monthly(&slices, |s| estimate_transitions(s).p_wet_wet()),
            p_wet_dry: monthly(&slices, |s| estimate_transitions(s).p_wet_dry()),
        })
    }

    fn validate(&self) -> Result<(), CalibrateError> {
        check("total", &self.total, "must be finite and >= 0", |v| v >= 0.0)?;
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        check("pww", &self.p_wet_wet, "must lie in [0, 1]", unit)?;
        check("pwd", &self.p_wet_dry, "must lie in [0, 1]", unit)
    }

    /// Totals use the good-fit threshold, transition probabilities the
    /// sequencing threshold.
    fn threshold(field_index: usize, config: &CalibrationConfig) -> f64 {
        if field_index == 0 {
            config.good_fit_threshold()
        } else {
            config.sequence_threshold()
        }
    }
}

/// Weather variable generated by the engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    Tmin,
    Tmax,
    Wind,
    Rain,
}

impl Variable {
    /// All variables, in output column order.
    pub const ALL: [Variable; 4] = [Variable::Tmin, Variable::Tmax, Variable::Wind, Variable::Rain];

    /// Lower-case name used in files and logs.
    pub fn name(self) -> &'static str {
        match self {
            Variable::Tmin => "tmin",
            Variable::Tmax => "tmax",
            Variable::Wind => "wind",
            Variable::Rain => "rain",
        }
    }

    /// Parses a lower-case variable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Statistic names expected for this variable.
    pub fn statistic_names(self) -> &'static [&'static str] {
        match self {
            Variable::Tmin | Variable::Tmax => TemperatureStats::NAMES,
            Variable::Wind => WindStats::NAMES,
            Variable::Rain => RainStats::NAMES,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
