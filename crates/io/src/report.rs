//! Per-statistic fit report.

use std::io::Write;
use std::path::Path;

use aeolus_calibrate::{Calibrated, Statistics, Variable};
use aeolus_collate::YearOutputs;
use serde::Serialize;
use tracing::info;

use crate::error::IoError;
use crate::targets::PERIOD_NAMES;

/// One statistic of one period of one (variable, year).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub variable: &'static str,
    pub year: i32,
    pub statistic: &'static str,
    /// `annual` or a lower-case month abbreviation.
    pub period: &'static str,
    pub observed: f64,
    pub estimated: f64,
    /// Relative error, percent.
    pub error: f64,
}

fn rows_for<T: Statistics>(variable: Variable, set: &Calibrated<T>, out: &mut Vec<ReportRow>) {
    let obs = set.obs().values();
    let est = set.est().values();
    for (i, &error) in set.errors().iter().enumerate() {
        out.push(ReportRow {
            variable: variable.name(),
            year: set.year(),
            statistic: T::NAMES[i / 13],
            period: PERIOD_NAMES[i % 13],
            observed: obs[i],
            estimated: est[i],
            error,
        });
    }
}

/// Flattens every calibrated set into report rows, ordered by year then
/// variable.
///
/// Estimates are those of the calibrated sets. Days whose tmin/tmax were
/// repaired by `collate` differ in the daily table, so on those days the
/// report describes the values before repair.
pub fn report_rows(years: &[YearOutputs]) -> Vec<ReportRow> {
    let mut sorted: Vec<&YearOutputs> = years.iter().collect();
    sorted.sort_by_key(|y| y.year);

    let mut out = Vec::new();
    for y in sorted {
        if let Some(set) = &y.tmin {
            rows_for(Variable::Tmin, set, &mut out);
        }
        if let Some(set) = &y.tmax {
            rows_for(Variable::Tmax, set, &mut out);
        }
        if let Some(set) = &y.wind {
            rows_for(Variable::Wind, set, &mut out);
        }
        if let Some(set) = &y.rain {
            rows_for(Variable::Rain, set, &mut out);
        }
    }
    out
}

/// Writes report rows as CSV with header
/// `variable,year,statistic,period,observed,estimated,error`.
///
/// # Errors
///
/// Returns [`IoError::Csv`] on write failure.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes report rows to `path`. See [`write_report`].
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_report_csv(path: &Path, rows: &[ReportRow]) -> Result<(), IoError> {
    let file = std::fs::File::create(path)?;
    write_report(std::io::BufWriter::new(file), rows)?;
    info!(path = %path.display(), rows = rows.len(), "fit report written");
    Ok(())
}
