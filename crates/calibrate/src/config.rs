//! Configuration for the calibration engines.

use crate::error::CalibrateError;

/// Iteration caps, error thresholds and tuning constants shared by the
/// temperature, wind and rain generators.
///
/// Thresholds are relative errors in percent.
///
/// # Example
///
/// ```
/// use aeolus_calibrate::CalibrationConfig;
///
/// let config = CalibrationConfig::new()
///     .with_ar_attempts(500)
///     .with_good_fit_threshold(5.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CalibrationConfig {
    ar_attempts: usize,
    good_fit_threshold: f64,
    rain_amount_attempts: usize,
    rain_sequence_attempts: usize,
    sequence_threshold: f64,
    pass_quota: f64,
    wet_fraction_bias: f64,
    wind_floor: f64,
}

impl CalibrationConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `ar_attempts = 5000`, `good_fit_threshold = 2.5`,
    /// `rain_amount_attempts = 1000`, `rain_sequence_attempts = 1000`,
    /// `sequence_threshold = 5.0`, `pass_quota = 0.99`,
    /// `wet_fraction_bias = 0.033`, `wind_floor = 0.1`.
    pub fn new() -> Self {
        Self {
            ar_attempts: 5000,
            good_fit_threshold: 2.5,
            rain_amount_attempts: 1000,
            rain_sequence_attempts: 1000,
            sequence_threshold: 5.0,
            pass_quota: aeolus_stats::DEFAULT_PASS_QUOTA,
            wet_fraction_bias: 0.033,
            wind_floor: 0.1,
        }
    }

    // --- Builder methods ---

    /// Sets the attempt cap for temperature and wind months.
    pub fn with_ar_attempts(mut self, n: usize) -> Self {
        self.ar_attempts = n;
        self
    }

    /// Sets the early-exit threshold for AR months and rain totals.
    pub fn with_good_fit_threshold(mut self, v: f64) -> Self {
        self.good_fit_threshold = v;
        self
    }

    /// Sets the attempt cap for rain amount draws (phase A).
    pub fn with_rain_amount_attempts(mut self, n: usize) -> Self {
        self.rain_amount_attempts = n;
        self
    }

    /// Sets the attempt cap for rain day placement (phase B).
    pub fn with_rain_sequence_attempts(mut self, n: usize) -> Self {
        self.rain_sequence_attempts = n;
        self
    }

    /// Sets the early-exit threshold for rain transition probabilities.
    pub fn with_sequence_threshold(mut self, v: f64) -> Self {
        self.sequence_threshold = v;
        self
    }

    /// Sets the fraction of statistics that must meet their threshold for
    /// a year to be acceptable.
    pub fn with_pass_quota(mut self, v: f64) -> Self {
        self.pass_quota = v;
        self
    }

    /// Sets the additive correction to the implied wet-day fraction.
    pub fn with_wet_fraction_bias(mut self, v: f64) -> Self {
        self.wet_fraction_bias = v;
        self
    }

    /// Sets the lower bound applied to wind values.
    pub fn with_wind_floor(mut self, v: f64) -> Self {
        self.wind_floor = v;
        self
    }

    // --- Accessors ---

    pub fn ar_attempts(&self) -> usize {
        self.ar_attempts
    }

    pub fn good_fit_threshold(&self) -> f64 {
        self.good_fit_threshold
    }

    pub fn rain_amount_attempts(&self) -> usize {
        self.rain_amount_attempts
    }

    pub fn rain_sequence_attempts(&self) -> usize {
        self.rain_sequence_attempts
    }

    pub fn sequence_threshold(&self) -> f64 {
        self.sequence_threshold
    }

    pub fn pass_quota(&self) -> f64 {
        self.pass_quota
    }

    pub fn wet_fraction_bias(&self) -> f64 {
        self.wet_fraction_bias
    }

    pub fn wind_floor(&self) -> f64 {
        self.wind_floor
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrateError::InvalidConfig`] for zero attempt caps,
    /// non-positive thresholds, a pass quota outside `(0, 1]` or a
    /// non-finite bias or floor.
    pub fn validate(&self) -> Result<(), CalibrateError> {
        for (name, n) in [
            ("ar_attempts", self.ar_attempts),
            ("rain_amount_attempts", self.rain_amount_attempts),
            ("rain_sequence_attempts", self.rain_sequence_attempts),
        ] {
            if n == 0 {
                return Err(CalibrateError::InvalidConfig {
                    reason: format!("{name} must be > 0"),
                });
            }
        }
        for (name, v) in [
            ("good_fit_threshold", self.good_fit_threshold),
            ("sequence_threshold", self.sequence_threshold),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CalibrateError::InvalidConfig {
                    reason: format!("{name} must be finite and > 0, got {v}"),
                });
            }
        }
        if !self.pass_quota.is_finite() || self.pass_quota <= 0.0 || self.pass_quota > 1.0 {
            return Err(CalibrateError::InvalidConfig {
                reason: format!("pass_quota must be in (0, 1], got {}", self.pass_quota),
            });
        }
        for (name, v) in [
            ("wet_fraction_bias", self.wet_fraction_bias),
            ("wind_floor", self.wind_floor),
        ] {
            if !v.is_finite() {
                return Err(CalibrateError::InvalidConfig {
                    reason: format!("{name} must be finite, got {v}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self::new()
    }
}
