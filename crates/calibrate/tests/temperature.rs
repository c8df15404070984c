//! Integration tests for temperature generation.

use aeolus_calendar::{days_in_year, month_lengths, partition_by_month};
use aeolus_calibrate::{
    CalibrateError, CalibrationConfig, GenerationTrace, Observed, Statistics, TemperatureStats,
    generate_temperature,
};
use aeolus_stats::{lag1_autocorrelation, mean, relative_error, sd, skewness};
use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn uniform_targets(mean: f64, sd: f64, lag1: f64, skew: f64) -> TemperatureStats {
    TemperatureStats {
        mean: [mean; 13],
        sd: [sd; 13],
        lag1: [lag1; 13],
        skew: [skew; 13],
    }
}

fn seasonal_targets() -> TemperatureStats {
    let mut t = uniform_targets(12.0, 3.0, 0.7, -0.2);
    for m in 1..=12 {
        t.mean[m] = 12.0 + 8.0 * ((m as f64 - 7.0) * std::f64::consts::PI / 6.0).cos();
        t.sd[m] = 2.0 + 0.1 * m as f64;
    }
    t
}

fn quick_config() -> CalibrationConfig {
    CalibrationConfig::new().with_ar_attempts(200)
}

// ---------------------------------------------------------------------------
// 1. Reference scenario: 25 degC, sd 1.5, lag1 0.6, skew 0.1
// ---------------------------------------------------------------------------

#[test]
fn reference_month_within_threshold_or_flagged() {
    let obs = Observed::new(2023, uniform_targets(25.0, 1.5, 0.6, 0.1)).unwrap();
    let config = CalibrationConfig::new();
    let mut rng = StdRng::seed_from_u64(2023);
    let out = generate_temperature(&obs, &config, &mut rng).unwrap();

    let january = &out.values()[..31];
    let errors = [
        relative_error(25.0, mean(january)),
        relative_error(1.5, sd(january)),
        relative_error(0.6, lag1_autocorrelation(january)),
        relative_error(0.1, skewness(january)),
    ];
    let worst = errors.iter().copied().fold(0.0, f64::max);
    let outcome = out.months()[0];
    assert_eq!(outcome.month, 1);
    assert_relative_eq!(outcome.error, worst, epsilon = 1e-9);

    if outcome.converged {
        assert!(errors.iter().all(|&e| e <= 2.5), "errors {errors:?}");
        assert!(outcome.attempts <= 5000);
    } else {
        assert!(outcome.error > 2.5);
        assert_eq!(outcome.attempts, 5000);
    }
}

// ---------------------------------------------------------------------------
// 2. Structural invariants
// ---------------------------------------------------------------------------

#[test]
fn length_follows_leap_years() {
    let config = quick_config().with_ar_attempts(5);
    let mut rng = StdRng::seed_from_u64(1);
    for year in [1900, 2000, 2023, 2024] {
        let obs = Observed::new(year, seasonal_targets()).unwrap();
        let out = generate_temperature(&obs, &config, &mut rng).unwrap();
        assert_eq!(out.values().len(), days_in_year(year), "year {year}");
        assert_eq!(out.year(), year);
    }
}

#[test]
fn recurrence_reproduced_from_trace() {
    let obs = Observed::new(2024, seasonal_targets()).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let out = generate_temperature(&obs, &quick_config(), &mut rng).unwrap();

    let GenerationTrace::Autoregressive { innovations } = out.trace() else {
        panic!("expected an autoregressive trace");
    };
    assert_eq!(innovations.len(), out.values().len());

    let t = obs.obs();
    let mut prev = t.mean[0];
    let mut day = 0;
    for (m, &len) in month_lengths(2024).iter().enumerate() {
        let (mu, rho) = (t.mean[m + 1], t.lag1[m + 1]);
        let c = mu * (1.0 - rho);
        for _ in 0..len {
            let x = c + rho * prev + innovations[day];
            assert_eq!(x.to_bits(), out.values()[day].to_bits(), "day {day}");
            prev = x;
            day += 1;
        }
    }
}

#[test]
fn est_matches_recomputed_statistics() {
    let obs = Observed::new(2023, seasonal_targets()).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let out = generate_temperature(&obs, &quick_config(), &mut rng).unwrap();

    let months = partition_by_month(out.values(), 2023).unwrap();
    for (m, slice) in months.iter().enumerate() {
        assert_relative_eq!(out.est().mean[m + 1], mean(slice), epsilon = 1e-12);
        assert_relative_eq!(out.est().lag1[m + 1], lag1_autocorrelation(slice), epsilon = 1e-12);
        assert_relative_eq!(out.est().skew[m + 1], skewness(slice), epsilon = 1e-12);
    }
    assert_relative_eq!(out.est().sd[0], sd(out.values()), epsilon = 1e-12);
}

#[test]
fn errors_are_field_major_against_obs() {
    let obs = Observed::new(2023, seasonal_targets()).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let out = generate_temperature(&obs, &quick_config(), &mut rng).unwrap();

    let targets = out.obs().values();
    let estimates = out.est().values();
    assert_eq!(out.errors().len(), 4 * 13);
    for i in 0..targets.len() {
        assert_eq!(out.errors()[i], relative_error(targets[i], estimates[i]));
    }
}

#[test]
fn seeded_runs_are_identical() {
    let obs = Observed::new(2023, seasonal_targets()).unwrap();
    let config = quick_config();
    let a = generate_temperature(&obs, &config, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_temperature(&obs, &config, &mut StdRng::seed_from_u64(42)).unwrap();
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(a.values()), bits(b.values()));
}

// ---------------------------------------------------------------------------
// 3. Degenerate and extreme targets
// ---------------------------------------------------------------------------

#[test]
fn zero_spread_holds_the_mean() {
    let obs = Observed::new(2023, uniform_targets(18.0, 0.0, 0.4, 0.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(10);
    let out = generate_temperature(&obs, &quick_config(), &mut rng).unwrap();
    for &v in out.values() {
        assert_relative_eq!(v, 18.0, epsilon = 1e-9);
    }
    assert!(out.months().iter().all(|m| m.attempts == 1));
}

#[test]
fn strong_skew_uses_resampled_innovations() {
    let obs = Observed::new(2023, uniform_targets(5.0, 2.0, 0.3, -1.8)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let out = generate_temperature(&obs, &quick_config().with_ar_attempts(20), &mut rng).unwrap();
    assert!(out.values().iter().all(|v| v.is_finite()));
    assert!(skewness(out.values()) < 0.0);
}

#[test]
fn invalid_targets_rejected() {
    let mut t = seasonal_targets();
    t.sd[2] = -1.0;
    assert!(matches!(
        Observed::new(2023, t),
        Err(CalibrateError::InvalidTarget {
            statistic: "sd",
            period: 2,
            ..
        })
    ));

    let mut t = seasonal_targets();
    t.mean[0] = f64::NAN;
    assert!(Observed::new(2023, t).is_err());
}

#[test]
fn invalid_config_rejected() {
    let obs = Observed::new(2023, seasonal_targets()).unwrap();
    let config = CalibrationConfig::new().with_ar_attempts(0);
    let mut rng = StdRng::seed_from_u64(12);
    assert!(matches!(
        generate_temperature(&obs, &config, &mut rng),
        Err(CalibrateError::InvalidConfig { .. })
    ));
}

#[test]
fn measure_round_trips_est() {
    let obs = Observed::new(2024, seasonal_targets()).unwrap();
    let mut rng = StdRng::seed_from_u64(13);
    let out = generate_temperature(&obs, &quick_config(), &mut rng).unwrap();
    let again = TemperatureStats::measure(out.values(), 2024).unwrap();
    assert_eq!(&again, out.est());
}
