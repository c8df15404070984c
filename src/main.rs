mod check;
mod cli;
mod config;
mod convert;
mod generate;
mod logging;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AeolusConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => {
            let config = load_config(&args.config)?;
            let verbosity = if config.verbose {
                cli.verbose.max(1)
            } else {
                cli.verbose
            };
            logging::init(verbosity);
            generate::run(&args, config)
        }
        Command::Check(args) => {
            logging::init(cli.verbose);
            check::run(&args)
        }
    }
}

/// Reads the TOML configuration. A missing default file yields defaults.
fn load_config(path: &Path) -> Result<AeolusConfig> {
    if !path.exists() && path == Path::new("aeolus.toml") {
        return Ok(AeolusConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    AeolusConfig::from_toml(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}
