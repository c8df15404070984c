//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use aeolus_calibrate::{CalibrationConfig, Variable};

use crate::config::*;

/// Builds a validated [`CalibrationConfig`] from the `[calibration]` and
/// `[rain]` sections.
pub fn build_calibration_config(
    calibration: &CalibrationToml,
    rain: &RainToml,
) -> Result<CalibrationConfig> {
    let cfg = CalibrationConfig::new()
        .with_ar_attempts(calibration.ar_attempts)
        .with_good_fit_threshold(calibration.good_fit_threshold)
        .with_pass_quota(calibration.pass_quota)
        .with_wind_floor(calibration.wind_floor)
        .with_rain_amount_attempts(rain.amount_attempts)
        .with_rain_sequence_attempts(rain.sequence_attempts)
        .with_sequence_threshold(rain.sequence_threshold)
        .with_wet_fraction_bias(rain.wet_fraction_bias);
    cfg.validate()?;
    Ok(cfg)
}

/// Parses the `[io].variables` list. All variables when absent.
pub fn parse_variables(names: Option<&[String]>) -> Result<Vec<Variable>> {
    let Some(names) = names else {
        return Ok(Variable::ALL.to_vec());
    };
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let Some(v) = Variable::from_name(&name.to_lowercase()) else {
            bail!("unknown variable: {name:?}");
        };
        if out.contains(&v) {
            bail!("variable listed twice: {name:?}");
        }
        out.push(v);
    }
    if out.is_empty() {
        bail!("[io].variables must name at least one variable");
    }
    Ok(out)
}

/// Resolves the base seed. Negative values behave as absent.
pub fn resolve_seed(seed: Option<i64>) -> Option<u64> {
    seed.and_then(|s| u64::try_from(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_config_carries_every_field() {
        let calibration = CalibrationToml {
            ar_attempts: 10,
            good_fit_threshold: 4.0,
            pass_quota: 0.5,
            wind_floor: 0.2,
        };
        let rain = RainToml {
            amount_attempts: 20,
            sequence_attempts: 30,
            sequence_threshold: 6.0,
            wet_fraction_bias: 0.01,
        };
        let cfg = build_calibration_config(&calibration, &rain).unwrap();
        assert_eq!(cfg.ar_attempts(), 10);
        assert_eq!(cfg.good_fit_threshold(), 4.0);
        assert_eq!(cfg.pass_quota(), 0.5);
        assert_eq!(cfg.wind_floor(), 0.2);
        assert_eq!(cfg.rain_amount_attempts(), 20);
        assert_eq!(cfg.rain_sequence_attempts(), 30);
        assert_eq!(cfg.sequence_threshold(), 6.0);
        assert_eq!(cfg.wet_fraction_bias(), 0.01);
    }

    #[test]
    fn invalid_calibration_is_rejected() {
        let calibration = CalibrationToml {
            pass_quota: 1.5,
            ..CalibrationToml::default()
        };
        assert!(build_calibration_config(&calibration, &RainToml::default()).is_err());
    }

    #[test]
    fn variables_default_to_all() {
        assert_eq!(parse_variables(None).unwrap(), Variable::ALL.to_vec());
    }

    #[test]
    fn variables_parse_case_insensitively() {
        let names = vec!["Rain".to_string(), "tmin".to_string()];
        assert_eq!(
            parse_variables(Some(names.as_slice())).unwrap(),
            vec![Variable::Rain, Variable::Tmin]
        );
    }

    #[test]
    fn bad_variable_lists_are_rejected() {
        let unknown = vec!["humidity".to_string()];
        let twice = vec!["wind".to_string(), "wind".to_string()];
        assert!(parse_variables(Some(unknown.as_slice())).is_err());
        assert!(parse_variables(Some(twice.as_slice())).is_err());
        assert!(parse_variables(Some(&[][..])).is_err());
    }

    #[test]
    fn negative_seed_means_entropy() {
        assert_eq!(resolve_seed(None), None);
        assert_eq!(resolve_seed(Some(-3)), None);
        assert_eq!(resolve_seed(Some(0)), Some(0));
        assert_eq!(resolve_seed(Some(42)), Some(42));
    }
}
