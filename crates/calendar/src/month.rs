//! Leap-year rule, month lengths and month partitioning of daily series.

use crate::error::CalendarError;

/// Days per month in a common year (index 0 = January).
const COMMON_MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Month lengths for `year`, January first.
pub fn month_lengths(year: i32) -> [u8; 12] {
    let mut lengths = COMMON_MONTH_LENGTHS;
    if is_leap_year(year) {
        lengths[1] = 29;
    }
    lengths
}

/// Number of days in `month` (1..=12) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_lengths(year)[(month - 1) as usize])
}

/// Splits a full-year daily series into 12 contiguous monthly slices.
///
/// # Errors
///
/// Returns [`CalendarError::LengthMismatch`] if `series.len()` is not
/// `days_in_year(year)`.
pub fn partition_by_month(series: &[f64], year: i32) -> Result<[&[f64]; 12], CalendarError> {
    let expected = days_in_year(year);
    if series.len() != expected {
        return Err(CalendarError::LengthMismatch {
            year,
            expected,
            got: series.len(),
        });
    }
    let mut out: [&[f64]; 12] = [&[]; 12];
    let mut start = 0;
    for (slot, &len) in out.iter_mut().zip(month_lengths(year).iter()) {
        let end = start + len as usize;
        *slot = &series[start..end];
        start = end;
    }
    Ok(out)
}

/// Like [`partition_by_month`] with the whole year prepended at index 0, so
/// that index `m` is calendar month `m`.
///
/// # Errors
///
/// Returns [`CalendarError::LengthMismatch`] on a wrong series length.
pub fn annual_and_monthly(series: &[f64], year: i32) -> Result<[&[f64]; 13], CalendarError> {
    let months = partition_by_month(series, year)?;
    let mut out: [&[f64]; 13] = [series; 13];
    out[1..].copy_from_slice(&months);
    Ok(out)
}
