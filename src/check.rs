use anyhow::{Context, Result};

use aeolus_calibrate::Variable;
use aeolus_io::read_targets;

use crate::cli::CheckArgs;

/// Validates a target file and prints per-variable year counts.
pub fn run(args: &CheckArgs) -> Result<()> {
    let targets = read_targets(&args.targets)
        .with_context(|| format!("invalid targets: {}", args.targets.display()))?;

    let years = targets.years();
    match (years.first(), years.last()) {
        (Some(first), Some(last)) => {
            println!("{}: {} years ({first}..={last})", args.targets.display(), years.len());
        }
        _ => println!("{}: no targets", args.targets.display()),
    }
    for v in Variable::ALL {
        println!("  {:<5} {}", v.name(), targets.count(v));
    }
    Ok(())
}
