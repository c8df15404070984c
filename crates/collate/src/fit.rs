//! Aggregate goodness-of-fit across calibrated years.

use aeolus_calibrate::{Calibrated, Statistics, Variable};

use crate::table::YearOutputs;

/// Error summary of one statistic over all periods and years.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticSummary {
    pub name: &'static str,
    /// Mean relative error, percent.
    pub mean_error: f64,
    /// Largest relative error, percent.
    pub max_error: f64,
}

/// Fit quality of one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary {
    pub variable: Variable,
    pub years: usize,
    pub acceptable_years: usize,
    pub statistics: Vec<StatisticSummary>,
    /// Mean of every relative error of every year.
    pub mean_error: f64,
}

/// Summarises the relative errors of `sets`, which must all belong to
/// `variable`.
pub fn goodness_of_fit<'a, T: Statistics>(
    variable: Variable,
    sets: impl IntoIterator<Item = &'a Calibrated<T>>,
) -> FitSummary {
    let n_fields = T::NAMES.len();
    let mut sums = vec![0.0; n_fields];
    let mut maxima = vec![0.0f64; n_fields];
    let mut count = 0usize;
    let mut years = 0;
    let mut acceptable_years = 0;

    for set in sets {
        years += 1;
        if set.acceptable() {
            acceptable_years += 1;
        }
        for (field, chunk) in set.errors().chunks(13).enumerate().take(n_fields) {
            sums[field] += chunk.iter().sum::<f64>();
            maxima[field] = chunk.iter().copied().fold(maxima[field], f64::max);
        }
        count += 13;
    }

    let statistics: Vec<StatisticSummary> = T::NAMES
        .iter()
        .zip(sums.iter().zip(&maxima))
        .map(|(&name, (&sum, &max_error))| StatisticSummary {
            name,
            mean_error: if count == 0 { 0.0 } else { sum / count as f64 },
            max_error,
        })
        .collect();
    let mean_error = if statistics.is_empty() {
        0.0
    } else {
        statistics.iter().map(|s| s.mean_error).sum::<f64>() / statistics.len() as f64
    };

    FitSummary {
        variable,
        years,
        acceptable_years,
        statistics,
        mean_error,
    }
}

/// One [`FitSummary`] per variable present in `years`.
pub fn summarize(years: &[YearOutputs]) -> Vec<FitSummary> {
    let mut out = Vec::new();
    for variable in Variable::ALL {
        let sets = years.iter();
        let summary = match variable {
            Variable::Tmin => goodness_of_fit(variable, sets.filter_map(|y| y.tmin.as_ref())),
            Variable::Tmax => goodness_of_fit(variable, sets.filter_map(|y| y.tmax.as_ref())),
            Variable::Wind => goodness_of_fit(variable, sets.filter_map(|y| y.wind.as_ref())),
            Variable::Rain => goodness_of_fit(variable, sets.filter_map(|y| y.rain.as_ref())),
        };
        if summary.years > 0 {
            out.push(summary);
        }
    }
    out
}
