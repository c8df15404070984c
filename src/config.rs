use std::path::PathBuf;

use serde::Deserialize;

/// Top-level aeolus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AeolusConfig {
    /// Global RNG seed. Absent or negative draws from OS entropy.
    #[serde(default)]
    pub seed: Option<i64>,

    /// Raise default log level to `info`.
    #[serde(default)]
    pub verbose: bool,

    /// Generate years on the rayon thread pool.
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Autoregressive calibration settings.
    #[serde(default)]
    pub calibration: CalibrationToml,

    /// Rainfall settings.
    #[serde(default)]
    pub rain: RainToml,
}

impl Default for AeolusConfig {
    fn default() -> Self {
        Self {
            seed: None,
            verbose: false,
            parallel: default_true(),
            io: IoToml::default(),
            calibration: CalibrationToml::default(),
            rain: RainToml::default(),
        }
    }
}

impl AeolusConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub targets: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    /// Variables to generate; all four when absent.
    #[serde(default)]
    pub variables: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    #[serde(default = "default_ar_attempts")]
    pub ar_attempts: usize,
    #[serde(default = "default_good_fit_threshold")]
    pub good_fit_threshold: f64,
    #[serde(default = "default_pass_quota")]
    pub pass_quota: f64,
    #[serde(default = "default_wind_floor")]
    pub wind_floor: f64,
}

impl Default for CalibrationToml {
    fn default() -> Self {
        Self {
            ar_attempts: default_ar_attempts(),
            good_fit_threshold: default_good_fit_threshold(),
            pass_quota: default_pass_quota(),
            wind_floor: default_wind_floor(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_ar_attempts() -> usize {
    5000
}
fn default_good_fit_threshold() -> f64 {
    2.5
}
fn default_pass_quota() -> f64 {
    0.99
}
fn default_wind_floor() -> f64 {
    0.1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RainToml {
    #[serde(default = "default_rain_attempts")]
    pub amount_attempts: usize,
    #[serde(default = "default_rain_attempts")]
    pub sequence_attempts: usize,
    #[serde(default = "default_sequence_threshold")]
    pub sequence_threshold: f64,
    #[serde(default = "default_wet_fraction_bias")]
    pub wet_fraction_bias: f64,
}

impl Default for RainToml {
    fn default() -> Self {
        Self {
            amount_attempts: default_rain_attempts(),
            sequence_attempts: default_rain_attempts(),
            sequence_threshold: default_sequence_threshold(),
            wet_fraction_bias: default_wet_fraction_bias(),
        }
    }
}

fn default_rain_attempts() -> usize {
    1000
}
fn default_sequence_threshold() -> f64 {
    5.0
}
fn default_wet_fraction_bias() -> f64 {
    0.033
}
