use aeolus_calendar::{Date, days_in_month, year_dates};

#[test]
fn leap_year_month_boundaries() {
    let dates = year_dates(2024);
    assert_eq!(dates.len(), 366);

    assert_eq!((dates[0].month(), dates[0].day()), (1, 1));
    assert_eq!((dates[30].month(), dates[30].day()), (1, 31));
    assert_eq!((dates[59].month(), dates[59].day()), (2, 29));
    assert_eq!((dates[60].month(), dates[60].day()), (3, 1));
    assert_eq!((dates[365].month(), dates[365].day()), (12, 31));
}

#[test]
fn common_year_month_boundaries() {
    let dates = year_dates(2023);
    assert_eq!(dates.len(), 365);
    assert_eq!((dates[58].month(), dates[58].day()), (2, 28));
    assert_eq!((dates[59].month(), dates[59].day()), (3, 1));
}

#[test]
fn doy_is_index_plus_one() {
    for year in [1900, 2000, 2023] {
        for (i, d) in year_dates(year).iter().enumerate() {
            assert_eq!(d.doy() as usize, i + 1);
            assert_eq!(d.year(), year);
        }
    }
}

#[test]
fn days_never_exceed_month_length() {
    let year = 2000;
    for d in year_dates(year) {
        assert!(d.day() <= days_in_month(year, d.month()).unwrap());
    }
}

#[test]
fn sequence_is_strictly_increasing() {
    let dates = year_dates(2024);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(dates.last().copied().map(Date::next), Date::from_year_doy(2025, 1).ok());
}
