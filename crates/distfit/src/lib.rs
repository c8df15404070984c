//! Distribution parameter inversion for the aeolus calibration engines.
//!
//! Each fitter turns target moments (mean, sd, lag-1 autocorrelation, skew)
//! into a concrete sampler implementing [`rand_distr::Distribution<f64>`]:
//!
//! | Fitter | Sampler | Used for |
//! |--------|---------|----------|
//! | [`skew_normal_params`] | [`SkewedInnovations`] | temperature innovations |
//! | [`weibull_params`] | [`WeibullParams::sampler`] | wind innovations |
//! | [`gamma_params_for_monthly_rain`] | [`GammaParams::sampler`] | wet-day rainfall amounts |
//!
//! Skew magnitudes beyond [`SKEW_NORMAL_CUTOFF`] have no skew-normal
//! solution; those are served by an F-distribution sample smoothed into a
//! [`KernelDensity`].

mod error;
mod gamma;
mod gev;
mod innovation;
mod kde;
mod skew_normal;
mod weibull;

pub use error::DistFitError;
pub use gamma::{GammaParams, gamma_params_for_monthly_rain};
pub use gev::{GevParams, RAIN_SHAPE_GEV};
pub use innovation::{innovation_sd, innovation_skew};
pub use kde::{F_FIXED_DOF, KDE_SAMPLE_SIZE, KernelDensity, f_dof_for_skew, f_resampled_density};
pub use skew_normal::{SKEW_NORMAL_CUTOFF, SkewNormalParams, SkewedInnovations, skew_normal_params};
pub use weibull::{WeibullParams, weibull_params};
