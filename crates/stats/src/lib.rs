//! Statistical helper functions for the aeolus weather generator.
//!
//! Everything here is total: degenerate inputs (too short, constant) yield
//! `0.0` rather than an error so that the calibration loops never have to
//! branch on failure.

mod fit_error;

pub use fit_error::{DEFAULT_PASS_QUOTA, ErrorReport, evaluate_errors, relative_error};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 3 finite pairs or if the denominator is zero
/// (constant input).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 3 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(sum_xy / denom)
}

/// Lag-1 autocorrelation: Pearson correlation between `series[i]` and
/// `series[i - 1]`.
///
/// Returns 0.0 when the correlation is undefined (fewer than 4 values or a
/// constant series).
pub fn lag1_autocorrelation(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    pearson_correlation(&series[1..], &series[..series.len() - 1]).unwrap_or(0.0)
}

/// Skewness as the population third standardised moment `m3 / m2^1.5`.
///
/// Returns 0.0 for fewer than 3 values or zero variance.
pub fn skewness(series: &[f64]) -> f64 {
    let n = series.len();
    if n < 3 {
        return 0.0;
    }
    let m = mean(series);
    let nf = n as f64;
    let (mut m2, mut m3) = (0.0, 0.0);
    for &x in series {
        let d = x - m;
        m2 += d * d;
        m3 += d * d * d;
    }
    m2 /= nf;
    m3 /= nf;
    if m2 <= f64::EPSILON * m * m {
        return 0.0;
    }
    m3 / m2.powf(1.5)
}
