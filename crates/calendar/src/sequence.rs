//! Date sequence generation.

use crate::date::Date;
use crate::month::days_in_year;

/// Generates `n_days` consecutive dates starting at `start`.
///
/// Year boundaries are handled automatically (Dec 31 wraps to Jan 1 of the
/// following year).
pub fn date_sequence(start: Date, n_days: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next();
        dates.push(current);
    }
    dates
}

/// Every date of `year`, January 1 through December 31.
pub fn year_dates(year: i32) -> Vec<Date> {
    let start = Date::from_year_doy(year, 1).expect("day 1 exists in every year");
    date_sequence(start, days_in_year(year))
}
