//! Integration tests for the target statistics loader.

use std::io::Write;
use std::path::Path;

use aeolus_calibrate::Variable;
use aeolus_io::{IoError, read_targets, read_targets_from_reader};

const HEADER: &str = "variable,year,statistic,annual,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec";

fn row(variable: &str, year: i32, statistic: &str, value: f64) -> String {
    let values: Vec<String> = (0..13).map(|_| value.to_string()).collect();
    format!("{variable},{year},{statistic},{}", values.join(","))
}

fn temperature_rows(variable: &str, year: i32) -> Vec<String> {
    vec![
        row(variable, year, "mean", 10.0),
        row(variable, year, "sd", 2.0),
        row(variable, year, "lag1", 0.5),
        row(variable, year, "skew", 0.2),
    ]
}

fn rain_rows(year: i32) -> Vec<String> {
    let mut total = format!("rain,{year},total,600");
    for _ in 0..12 {
        total.push_str(",50");
    }
    vec![total, row("rain", year, "pww", 0.5), row("rain", year, "pwd", 0.2)]
}

fn csv_text(rows: &[String]) -> String {
    let mut s = String::from(HEADER);
    for r in rows {
        s.push('\n');
        s.push_str(r);
    }
    s.push('\n');
    s
}

// -----------------------------------------------------------------------
// Happy path
// -----------------------------------------------------------------------

#[test]
fn loads_variables_and_years() {
    let mut rows = temperature_rows("tmin", 2001);
    rows.extend(temperature_rows("tmax", 2002));
    rows.extend(rain_rows(2001));
    rows.push(row("wind", 2003, "mean", 3.0));
    rows.push(row("wind", 2003, "sd", 1.0));
    rows.push(row("wind", 2003, "lag1", 0.4));

    let targets = read_targets_from_reader(csv_text(&rows).as_bytes()).unwrap();

    assert_eq!(
        targets.years().into_iter().collect::<Vec<_>>(),
        vec![2001, 2002, 2003]
    );
    assert_eq!(targets.count(Variable::Tmin), 1);
    assert_eq!(targets.count(Variable::Tmax), 1);
    assert_eq!(targets.count(Variable::Wind), 1);
    assert_eq!(targets.count(Variable::Rain), 1);
    assert!(!targets.is_empty());

    let tmin = &targets.tmin[&2001];
    assert_eq!(tmin.year(), 2001);
    assert_eq!(tmin.obs().mean[3], 10.0);
    assert_eq!(tmin.obs().skew[12], 0.2);

    let rain = targets.rain[&2001].obs();
    assert_eq!(rain.total[0], 600.0);
    assert_eq!(rain.total[7], 50.0);
    assert_eq!(rain.p_wet_dry[1], 0.2);
}

#[test]
fn comments_and_padding_are_ignored() {
    let rows = temperature_rows("tmin", 1999);
    let mut text = String::from("# site 42\n");
    text.push_str(&csv_text(&rows).replace(",", " , "));

    let targets = read_targets_from_reader(text.as_bytes()).unwrap();
    assert_eq!(targets.tmin[&1999].obs().lag1[5], 0.5);
}

#[test]
fn header_only_is_empty() {
    let targets = read_targets_from_reader(csv_text(&[]).as_bytes()).unwrap();
    assert!(targets.is_empty());
    assert!(targets.years().is_empty());
}

#[test]
fn reads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(csv_text(&rain_rows(2010)).as_bytes()).unwrap();
    file.flush().unwrap();

    let targets = read_targets(file.path()).unwrap();
    assert_eq!(targets.count(Variable::Rain), 1);
    assert_eq!(targets.rain[&2010].obs().p_wet_wet[0], 0.5);
}

// -----------------------------------------------------------------------
// Errors
// -----------------------------------------------------------------------

#[test]
fn file_not_found() {
    let err = read_targets(Path::new("/tmp/aeolus_test_nonexistent_targets.csv")).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn missing_statistic_is_named() {
    let mut rows = temperature_rows("tmax", 2005);
    rows.pop();

    let err = read_targets_from_reader(csv_text(&rows).as_bytes()).unwrap_err();
    match err {
        IoError::MissingStatistic {
            variable,
            year,
            statistic,
        } => {
            assert_eq!(variable, "tmax");
            assert_eq!(year, 2005);
            assert_eq!(statistic, "skew");
        }
        other => panic!("expected MissingStatistic, got {other:?}"),
    }
}

#[test]
fn unknown_names_are_collected() {
    let mut rows = temperature_rows("tmin", 2001);
    rows.push(row("humidity", 2001, "mean", 60.0));
    rows.push(row("rain", 2001, "skew", 1.0));

    let err = read_targets_from_reader(csv_text(&rows).as_bytes()).unwrap_err();
    match err {
        IoError::Validation { count, details } => {
            assert_eq!(count, 2);
            assert!(details.contains("humidity"), "{details}");
            assert!(details.contains("skew"), "{details}");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn duplicate_row_is_rejected() {
    let mut rows = temperature_rows("tmin", 2001);
    rows.push(row("tmin", 2001, "sd", 3.0));

    let err = read_targets_from_reader(csv_text(&rows).as_bytes()).unwrap_err();
    assert!(
        matches!(err, IoError::Validation { count: 1, .. }),
        "expected Validation, got {err:?}",
    );
}

#[test]
fn out_of_range_target_is_rejected() {
    let rows = vec![
        row("wind", 2001, "mean", 3.0),
        row("wind", 2001, "sd", 1.0),
        row("wind", 2001, "lag1", 1.2),
    ];

    let err = read_targets_from_reader(csv_text(&rows).as_bytes()).unwrap_err();
    match err {
        IoError::InvalidTarget { variable, year, .. } => {
            assert_eq!(variable, "wind");
            assert_eq!(year, 2001);
        }
        other => panic!("expected InvalidTarget, got {other:?}"),
    }
}

#[test]
fn malformed_number_is_csv_error() {
    let mut rows = temperature_rows("tmin", 2001);
    rows[0] = rows[0].replacen("10", "ten", 1);

    let err = read_targets_from_reader(csv_text(&rows).as_bytes()).unwrap_err();
    assert!(matches!(err, IoError::Csv { .. }), "expected Csv, got {err:?}");
}
