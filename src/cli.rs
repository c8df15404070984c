use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aeolus stochastic daily weather generator.
#[derive(Parser)]
#[command(
    name = "aeolus",
    version,
    about = "Stochastic daily weather synthesis from monthly target statistics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate daily series for every year of a target file.
    Generate(GenerateArgs),
    /// Validate a target file without generating.
    Check(CheckArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Override target statistics CSV path from config.
    #[arg(short, long)]
    pub targets: Option<PathBuf>,

    /// Override daily output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override fit report CSV path from config.
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Override global RNG seed from config. Negative draws from entropy.
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to target statistics CSV.
    #[arg(short, long)]
    pub targets: PathBuf,
}
