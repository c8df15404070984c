use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{info, warn};

use aeolus_calibrate::{
    CalibrationConfig, Variable, generate_rain, generate_temperature, generate_wind,
};
use aeolus_collate::{YearOutputs, collate, summarize};
use aeolus_io::{SiteTargets, read_targets, report_rows, write_daily_csv, write_report_csv};

use crate::cli::GenerateArgs;
use crate::config::AeolusConfig;
use crate::convert;

/// Run the full generation pipeline.
pub fn run(args: &GenerateArgs, config: AeolusConfig) -> Result<()> {
    // Step 1: Resolve paths, CLI over config
    let targets_path = resolve(&args.targets, &config.io.targets).ok_or_else(|| {
        anyhow!("no targets path: set [io].targets in config or use --targets")
    })?;
    let output = resolve(&args.output, &config.io.output)
        .ok_or_else(|| anyhow!("no output path: set [io].output in config or use --output"))?;
    let report = resolve(&args.report, &config.io.report);

    // Step 2: Build configs from TOML
    let calibration = convert::build_calibration_config(&config.calibration, &config.rain)?;
    let variables = convert::parse_variables(config.io.variables.as_deref())?;
    let base_seed = match convert::resolve_seed(args.seed.or(config.seed)) {
        Some(s) => s,
        None => {
            let s: u64 = rand::rng().random();
            info!(seed = s, "seed drawn from entropy");
            s
        }
    };

    // Step 3: Read targets
    info!(path = %targets_path.display(), "reading targets");
    let targets = read_targets(&targets_path)
        .with_context(|| format!("failed to read targets: {}", targets_path.display()))?;
    if targets.is_empty() {
        bail!("no targets in {}", targets_path.display());
    }
    let years: Vec<i32> = targets.years().into_iter().collect();

    // Step 4: Generate every year
    info!(
        n_years = years.len(),
        parallel = config.parallel,
        "generating daily series"
    );
    let one_year =
        |&year: &i32| generate_year(year, &targets, &variables, &calibration, base_seed);
    let outputs: Vec<YearOutputs> = if config.parallel {
        years.par_iter().map(one_year).collect::<Result<_>>()?
    } else {
        years.iter().map(one_year).collect::<Result<_>>()?
    };

    // Step 5: Collate and write
    let table = collate(&outputs).context("failed to collate generated years")?;
    write_daily_csv(&output, &table)
        .with_context(|| format!("failed to write daily table: {}", output.display()))?;

    if let Some(path) = report {
        let rows = report_rows(&outputs);
        write_report_csv(&path, &rows)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
    }

    // Step 6: Goodness of fit, measured before the diurnal range repair
    if table.repaired_days() > 0 {
        info!(
            repaired_days = table.repaired_days(),
            "fit statistics exclude diurnal range repairs"
        );
    }
    for s in summarize(&outputs) {
        info!(
            variable = %s.variable,
            years = s.years,
            acceptable_years = s.acceptable_years,
            mean_error = s.mean_error,
            "goodness of fit"
        );
        if s.acceptable_years < s.years {
            warn!(
                variable = %s.variable,
                failed = s.years - s.acceptable_years,
                "years below pass quota"
            );
        }
    }
    Ok(())
}

fn resolve(cli: &Option<PathBuf>, file: &Option<PathBuf>) -> Option<PathBuf> {
    cli.as_ref().or(file.as_ref()).cloned()
}

/// Generates every requested variable that has targets for `year`.
fn generate_year(
    year: i32,
    targets: &SiteTargets,
    variables: &[Variable],
    config: &CalibrationConfig,
    base_seed: u64,
) -> Result<YearOutputs> {
    let mut out = YearOutputs::new(year);
    for &variable in variables {
        let mut rng = StdRng::seed_from_u64(stream_seed(base_seed, variable, year));
        let context = || format!("{variable} generation failed for {year}");
        match variable {
            Variable::Tmin => {
                out.tmin = targets
                    .tmin
                    .get(&year)
                    .map(|obs| generate_temperature(obs, config, &mut rng))
                    .transpose()
                    .with_context(context)?;
            }
            Variable::Tmax => {
                out.tmax = targets
                    .tmax
                    .get(&year)
                    .map(|obs| generate_temperature(obs, config, &mut rng))
                    .transpose()
                    .with_context(context)?;
            }
            Variable::Wind => {
                out.wind = targets
                    .wind
                    .get(&year)
                    .map(|obs| generate_wind(obs, config, &mut rng))
                    .transpose()
                    .with_context(context)?;
            }
            Variable::Rain => {
                out.rain = targets
                    .rain
                    .get(&year)
                    .map(|obs| generate_rain(obs, config, &mut rng))
                    .transpose()
                    .with_context(context)?;
            }
        }
    }
    Ok(out)
}

/// Seed of the RNG stream of one (variable, year), a SplitMix64 finaliser
/// over the base seed, the variable and the year.
fn stream_seed(base: u64, variable: Variable, year: i32) -> u64 {
    let tag = ((variable as u64) << 32) | u64::from(year as u32);
    let mut z = base ^ tag.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
