//! Moment conversions between an AR(1) series and its innovations.
//!
//! For `x[t] = c + rho * x[t-1] + e[t]` with i.i.d. innovations:
//!
//! - `var(x) = var(e) / (1 - rho^2)`
//! - `skew(x) = skew(e) * (1 - rho^2)^1.5 / (1 - rho^3)`

/// Innovation standard deviation that yields series standard deviation `sd`
/// under lag-1 autocorrelation `lag1`: `sqrt(sd^2 * (1 - lag1^2))`.
///
/// Returns 0.0 when `|lag1| >= 1`.
pub fn innovation_sd(sd: f64, lag1: f64) -> f64 {
    let factor = 1.0 - lag1 * lag1;
    if factor <= 0.0 {
        return 0.0;
    }
    (sd * sd * factor).sqrt()
}

/// Innovation skewness that yields series skewness `skew` under lag-1
/// autocorrelation `lag1`.
///
/// Returns `skew` unchanged when `|lag1| >= 1`.
pub fn innovation_skew(skew: f64, lag1: f64) -> f64 {
    let factor = 1.0 - lag1 * lag1;
    if factor <= 0.0 {
        return skew;
    }
    skew * (1.0 - lag1.powi(3)) / factor.powf(1.5)
}
