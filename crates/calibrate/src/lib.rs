//! Stochastic calibration engines for daily weather synthesis.
//!
//! Each engine turns one year of monthly target statistics into a daily
//! series by repeated sampling and best-of selection:
//!
//! | Engine | Model | Innovations |
//! |--------|-------|-------------|
//! | [`generate_temperature`] | AR(1) per month | skew-normal / F-resampled |
//! | [`generate_wind`] | AR(1) per month, floored | centred Weibull |
//! | [`generate_rain`] | gamma amounts on a wet/dry Markov chain | GEV-randomised gamma |
//!
//! Months are calibrated in calendar order because each month starts from
//! the last day of the previous one. Different years are independent and
//! can run in parallel given one RNG per year.
//!
//! # Example
//!
//! ```
//! use aeolus_calibrate::{CalibrationConfig, Observed, RainStats, generate_rain};
//! use rand::SeedableRng;
//!
//! let mut total = [50.0; 13];
//! total[0] = 600.0;
//! let targets = RainStats {
//!     total,
//!     p_wet_wet: [0.5; 13],
//!     p_wet_dry: [0.2; 13],
//! };
//! let obs = Observed::new(2024, targets).unwrap();
//! let config = CalibrationConfig::new().with_rain_amount_attempts(50);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let year = generate_rain(&obs, &config, &mut rng).unwrap();
//! assert_eq!(year.values().len(), 366);
//! ```

mod autoregressive;
mod config;
mod error;
mod params;
mod rain;
mod search;
mod stats;
mod temperature;
mod wind;

pub use autoregressive::autoregress;
pub use config::CalibrationConfig;
pub use error::CalibrateError;
pub use params::{Calibrated, GenerationTrace, MonthOutcome, Observed};
pub use rain::generate_rain;
pub use search::{SearchOutcome, best_of, try_best_of};
pub use stats::{Monthly, RainStats, Statistics, TemperatureStats, Variable, WindStats};
pub use temperature::generate_temperature;
pub use wind::generate_wind;
