//! Multi-year daily table.

use std::collections::BTreeSet;

use aeolus_calendar::{days_in_year, year_dates};
use aeolus_calibrate::{Calibrated, RainStats, Statistics, TemperatureStats, Variable, WindStats};
use tracing::{debug, info};

use crate::error::CollateError;
use crate::repair::repair_diurnal_range;

/// Calibrated series generated for one year. Absent variables are `None`.
#[derive(Debug, Clone)]
pub struct YearOutputs {
    pub year: i32,
    pub tmin: Option<Calibrated<TemperatureStats>>,
    pub tmax: Option<Calibrated<TemperatureStats>>,
    pub wind: Option<Calibrated<WindStats>>,
    pub rain: Option<Calibrated<RainStats>>,
}

impl YearOutputs {
    /// An empty entry for `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            tmin: None,
            tmax: None,
            wind: None,
            rain: None,
        }
    }

    /// Variables present in this entry, in column order.
    pub fn variables(&self) -> Vec<Variable> {
        Variable::ALL
            .into_iter()
            .filter(|v| self.series(*v).is_some())
            .collect()
    }

    /// Daily values of `variable`, if generated.
    pub fn series(&self, variable: Variable) -> Option<&[f64]> {
        match variable {
            Variable::Tmin => self.tmin.as_ref().map(Calibrated::values),
            Variable::Tmax => self.tmax.as_ref().map(Calibrated::values),
            Variable::Wind => self.wind.as_ref().map(Calibrated::values),
            Variable::Rain => self.rain.as_ref().map(Calibrated::values),
        }
    }
}

/// One row of the daily table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub year: i32,
    pub doy: u16,
    pub month: u8,
    pub day: u8,
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub wind: Option<f64>,
    pub rain: Option<f64>,
}

impl DailyRecord {
    /// Value of `variable` on this day.
    pub fn get(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::Tmin => self.tmin,
            Variable::Tmax => self.tmax,
            Variable::Wind => self.wind,
            Variable::Rain => self.rain,
        }
    }
}

/// Daily records of every year, in (year, day-of-year) order.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTable {
    records: Vec<DailyRecord>,
    variables: Vec<Variable>,
    repaired_days: usize,
}

impl DailyTable {
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Variables present in at least one year, in column order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Days on which tmin/tmax were swapped or widened.
    pub fn repaired_days(&self) -> usize {
        self.repaired_days
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn checked<T: Statistics>(
    set: &Option<Calibrated<T>>,
    year: i32,
    variable: Variable,
) -> Result<Option<Vec<f64>>, CollateError> {
    let Some(set) = set else {
        return Ok(None);
    };
    let expected = days_in_year(year);
    if set.values().len() != expected || set.year() != year {
        return Err(CollateError::SeriesLength {
            year,
            variable: variable.name(),
            expected,
            got: set.values().len(),
        });
    }
    Ok(Some(set.values().to_vec()))
}

/// Merges per-year outputs into one daily table.
///
/// Years are sorted ascending. When both tmin and tmax are present their
/// diurnal range is repaired so that `tmax > tmin` on every day.
///
/// # Errors
///
/// Returns [`CollateError::DuplicateYear`] if a year appears twice and
/// [`CollateError::SeriesLength`] if a series does not cover its year.
#[tracing::instrument(skip(years), fields(n_years = years.len()))]
pub fn collate(years: &[YearOutputs]) -> Result<DailyTable, CollateError> {
    let mut seen = BTreeSet::new();
    for y in years {
        if !seen.insert(y.year) {
            return Err(CollateError::DuplicateYear { year: y.year });
        }
    }
    let mut order: Vec<&YearOutputs> = years.iter().collect();
    order.sort_by_key(|y| y.year);

    let variables: Vec<Variable> = Variable::ALL
        .into_iter()
        .filter(|v| years.iter().any(|y| y.series(*v).is_some()))
        .collect();

    let total_days = order.iter().map(|y| days_in_year(y.year)).sum();
    let mut records = Vec::with_capacity(total_days);
    let mut repaired_days = 0;

    for entry in order {
        let year = entry.year;
        let mut tmin = checked(&entry.tmin, year, Variable::Tmin)?;
        let mut tmax = checked(&entry.tmax, year, Variable::Tmax)?;
        let wind = checked(&entry.wind, year, Variable::Wind)?;
        let rain = checked(&entry.rain, year, Variable::Rain)?;

        if let (Some(lo), Some(hi)) = (tmin.as_mut(), tmax.as_mut()) {
            let n = repair_diurnal_range(lo, hi)?;
            debug!(year, repaired = n, "diurnal range repaired");
            repaired_days += n;
        }

        let at = |s: &Option<Vec<f64>>, i: usize| s.as_ref().map(|v| v[i]);
        for (i, date) in year_dates(year).into_iter().enumerate() {
            records.push(DailyRecord {
                year,
                doy: date.doy(),
                month: date.month(),
                day: date.day(),
                tmin: at(&tmin, i),
                tmax: at(&tmax, i),
                wind: at(&wind, i),
                rain: at(&rain, i),
            });
        }
    }

    info!(
        days = records.len(),
        repaired_days,
        variables = variables.len(),
        "daily table collated"
    );
    Ok(DailyTable {
        records,
        variables,
        repaired_days,
    })
}
