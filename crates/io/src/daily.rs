//! Daily table writer.

use std::io::Write;
use std::path::Path;

use aeolus_collate::DailyTable;
use tracing::info;

use crate::error::IoError;

/// Writes the daily table as CSV.
///
/// Columns are `year,doy,month,day` followed by one column per variable
/// present in the table. Days without a value for a present variable are
/// written as empty fields.
///
/// # Errors
///
/// Returns [`IoError::Csv`] on write failure.
pub fn write_daily<W: Write>(writer: W, table: &DailyTable) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["year", "doy", "month", "day"];
    header.extend(table.variables().iter().map(|v| v.name()));
    wtr.write_record(&header)?;

    let mut row: Vec<String> = Vec::with_capacity(header.len());
    for r in table.records() {
        row.clear();
        row.push(r.year.to_string());
        row.push(r.doy.to_string());
        row.push(r.month.to_string());
        row.push(r.day.to_string());
        for &v in table.variables() {
            row.push(r.get(v).map(|x| x.to_string()).unwrap_or_default());
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the daily table to `path`. See [`write_daily`].
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_daily_csv(path: &Path, table: &DailyTable) -> Result<(), IoError> {
    let file = std::fs::File::create(path)?;
    write_daily(std::io::BufWriter::new(file), table)?;
    info!(path = %path.display(), rows = table.len(), "daily table written");
    Ok(())
}
