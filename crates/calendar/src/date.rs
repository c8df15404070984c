//! Gregorian date with year context and day-of-year.

use crate::error::CalendarError;
use crate::month::{days_in_month, days_in_year, month_lengths};

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
    doy: u16,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.doy).cmp(&(other.year, other.doy))
    }
}

impl Date {
    /// Creates a `Date` from a year and a 1-based day-of-year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is outside the year.
    pub fn from_year_doy(year: i32, doy: u16) -> Result<Self, CalendarError> {
        let max_doy = days_in_year(year) as u16;
        if !(1..=max_doy).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy, year, max_doy });
        }
        let mut remaining = doy;
        for (i, &len) in month_lengths(year).iter().enumerate() {
            let len = len as u16;
            if remaining <= len {
                return Ok(Self {
                    year,
                    month: i as u8 + 1,
                    day: remaining as u8,
                    doy,
                });
            }
            remaining -= len;
        }
        unreachable!("doy validated against the year length")
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day-of-year (1..=366).
    pub fn doy(self) -> u16 {
        self.doy
    }

    /// Returns the next calendar date, wrapping Dec 31 to Jan 1 of the
    /// following year.
    pub fn next(self) -> Self {
        let month_len = days_in_month(self.year, self.month).expect("date month is 1..=12");
        let (year, month, day) = if self.day < month_len {
            (self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            (self.year, self.month + 1, 1)
        } else {
            (self.year + 1, 1, 1)
        };
        let doy = if year == self.year { self.doy + 1 } else { 1 };
        Self {
            year,
            month,
            day,
            doy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, doy: u16) -> Date {
        Date::from_year_doy(year, doy).unwrap()
    }

    #[test]
    fn from_year_doy_mid_march() {
        let d = date(2023, 74);
        assert_eq!(d.year(), 2023);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day(), 15);
        assert_eq!(d.doy(), 74);
    }

    #[test]
    fn from_year_doy_leap_day() {
        let d = date(2024, 60);
        assert_eq!((d.month(), d.day()), (2, 29));
        let after = date(2024, 61);
        assert_eq!((after.month(), after.day()), (3, 1));
        let common = date(2023, 60);
        assert_eq!((common.month(), common.day()), (3, 1));
    }

    #[test]
    fn from_year_doy_month_days_are_contiguous() {
        for year in [2023, 2024] {
            let mut expected = (1u8, 1u8);
            for doy in 1..=days_in_year(year) as u16 {
                let d = date(year, doy);
                assert_eq!((d.month(), d.day()), expected, "{year} doy {doy}");
                expected = if d.day() == month_lengths(year)[usize::from(d.month()) - 1] {
                    (d.month() + 1, 1)
                } else {
                    (d.month(), d.day() + 1)
                };
            }
        }
    }

    #[test]
    fn from_year_doy_out_of_range() {
        assert_eq!(
            Date::from_year_doy(2023, 366).unwrap_err(),
            CalendarError::InvalidDoy {
                doy: 366,
                year: 2023,
                max_doy: 365,
            }
        );
        assert!(Date::from_year_doy(2024, 366).is_ok());
        assert!(Date::from_year_doy(2024, 0).is_err());
    }

    #[test]
    fn next_feb_28_leap_and_common() {
        let common = date(2023, 59).next();
        assert_eq!((common.month(), common.day()), (3, 1));
        let leap = date(2024, 59).next();
        assert_eq!((leap.month(), leap.day()), (2, 29));
    }

    #[test]
    fn next_matches_from_year_doy() {
        for doy in 1..366 {
            assert_eq!(date(2024, doy).next(), date(2024, doy + 1));
        }
    }

    #[test]
    fn next_dec_31_year_wrap() {
        let next = date(2024, 366).next();
        assert_eq!(next.year(), 2025);
        assert_eq!(next.month(), 1);
        assert_eq!(next.day(), 1);
        assert_eq!(next.doy(), 1);
    }

    #[test]
    fn ord_different_years() {
        assert!(date(1999, 365) < date(2000, 1));
    }
}
