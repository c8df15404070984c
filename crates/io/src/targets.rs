//! Target statistics loader.
//!
//! One CSV row holds one statistic of one (variable, year):
//!
//! ```text
//! variable,year,statistic,annual,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec
//! tmin,2001,mean,8.1,0.4,1.2,3.9,6.8,10.5,13.9,15.8,15.2,12.4,8.7,4.3,1.1
//! ```
//!
//! Statistic names per variable are those of the calibration records:
//! `mean, sd, lag1, skew` for tmin/tmax, `mean, sd, lag1` for wind and
//! `total, pww, pwd` for rain. Lines starting with `#` are ignored.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use aeolus_calibrate::{
    Monthly, Observed, RainStats, Statistics, TemperatureStats, Variable, WindStats,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// Column names of the 13 periods, annual first.
pub const PERIOD_NAMES: [&str; 13] = [
    "annual", "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[derive(Debug, Deserialize)]
struct TargetRow {
    variable: String,
    year: i32,
    statistic: String,
    annual: f64,
    jan: f64,
    feb: f64,
    mar: f64,
    apr: f64,
    may: f64,
    jun: f64,
    jul: f64,
    aug: f64,
    sep: f64,
    oct: f64,
    nov: f64,
    dec: f64,
}

impl TargetRow {
    fn monthly(&self) -> Monthly {
        [
            self.annual,
            self.jan,
            self.feb,
            self.mar,
            self.apr,
            self.may,
            self.jun,
            self.jul,
            self.aug,
            self.sep,
            self.oct,
            self.nov,
            self.dec,
        ]
    }
}

/// Targets of one site, keyed by year per variable.
#[derive(Debug, Clone, Default)]
pub struct SiteTargets {
    pub tmin: BTreeMap<i32, Observed<TemperatureStats>>,
    pub tmax: BTreeMap<i32, Observed<TemperatureStats>>,
    pub wind: BTreeMap<i32, Observed<WindStats>>,
    pub rain: BTreeMap<i32, Observed<RainStats>>,
}

impl SiteTargets {
    /// Every year with at least one variable.
    pub fn years(&self) -> BTreeSet<i32> {
        self.tmin
            .keys()
            .chain(self.tmax.keys())
            .chain(self.wind.keys())
            .chain(self.rain.keys())
            .copied()
            .collect()
    }

    /// Number of years with targets for `variable`.
    pub fn count(&self, variable: Variable) -> usize {
        match variable {
            Variable::Tmin => self.tmin.len(),
            Variable::Tmax => self.tmax.len(),
            Variable::Wind => self.wind.len(),
            Variable::Rain => self.rain.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Variable::ALL.into_iter().all(|v| self.count(v) == 0)
    }
}

type Grouped = BTreeMap<(Variable, i32), BTreeMap<&'static str, Monthly>>;

fn build<T: Statistics>(
    grouped: &Grouped,
    variable: Variable,
) -> Result<BTreeMap<i32, Observed<T>>, IoError> {
    let mut out = BTreeMap::new();
    for (&(v, year), stats) in grouped.range((variable, i32::MIN)..=(variable, i32::MAX)) {
        debug_assert_eq!(v, variable);
        let mut fields = Vec::with_capacity(T::NAMES.len());
        for &name in T::NAMES {
            let field = stats.get(name).ok_or(IoError::MissingStatistic {
                variable: variable.name(),
                year,
                statistic: name,
            })?;
            fields.push(*field);
        }
        let invalid = |e: aeolus_calibrate::CalibrateError| IoError::InvalidTarget {
            variable: variable.name(),
            year,
            reason: e.to_string(),
        };
        let obs = T::from_fields(&fields).map_err(invalid)?;
        out.insert(year, Observed::new(year, obs).map_err(invalid)?);
    }
    Ok(out)
}

/// Reads targets from any CSV source.
///
/// # Errors
///
/// - [`IoError::Csv`] for malformed rows.
/// - [`IoError::Validation`] listing every unknown variable, unknown
///   statistic and duplicated row.
/// - [`IoError::MissingStatistic`] when a (variable, year) lacks a statistic.
/// - [`IoError::InvalidTarget`] when a value is out of range.
pub fn read_targets_from_reader<R: Read>(reader: R) -> Result<SiteTargets, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut grouped: Grouped = BTreeMap::new();
    let mut problems = ValidationCollector::new();
    let mut n_rows = 0usize;

    for result in rdr.deserialize::<TargetRow>() {
        let row = result?;
        n_rows += 1;
        let Some(variable) = Variable::from_name(&row.variable) else {
            problems.push(format!("row {n_rows}: unknown variable '{}'", row.variable));
            continue;
        };
        let Some(&statistic) = variable
            .statistic_names()
            .iter()
            .find(|&&s| s == row.statistic)
        else {
            problems.push(format!(
                "row {n_rows}: unknown statistic '{}' for {variable}",
                row.statistic
            ));
            continue;
        };
        let previous = grouped
            .entry((variable, row.year))
            .or_default()
            .insert(statistic, row.monthly());
        if previous.is_some() {
            problems.push(format!(
                "row {n_rows}: duplicate {variable} {} {statistic}",
                row.year
            ));
        }
    }
    problems.finish()?;
    debug!(rows = n_rows, groups = grouped.len(), "target rows grouped");

    let targets = SiteTargets {
        tmin: build(&grouped, Variable::Tmin)?,
        tmax: build(&grouped, Variable::Tmax)?,
        wind: build(&grouped, Variable::Wind)?,
        rain: build(&grouped, Variable::Rain)?,
    };
    info!(
        years = targets.years().len(),
        tmin = targets.tmin.len(),
        tmax = targets.tmax.len(),
        wind = targets.wind.len(),
        rain = targets.rain.len(),
        "targets loaded"
    );
    Ok(targets)
}

/// Reads targets from a CSV file. See [`read_targets_from_reader`].
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, plus every
/// error of [`read_targets_from_reader`].
pub fn read_targets(path: &Path) -> Result<SiteTargets, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path)?;
    read_targets_from_reader(std::io::BufReader::new(file))
}
