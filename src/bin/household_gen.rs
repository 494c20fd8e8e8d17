//! Household Generator
//!
//! Samples a population from an age distribution, partitions it into
//! households and writes the households and network statistics as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use household_synth::core::error::Result;
use household_synth::{generate, GeneratorConfig};

/// Household Generator - synthetic households from age distributions
#[derive(Parser, Debug)]
#[command(name = "household_gen")]
#[command(about = "Generate synthetic households and their contact network")]
struct Args {
    /// TOML config file (defaults are used for missing keys)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of households (overrides config)
    #[arg(long)]
    households: Option<usize>,

    /// Adults per household (overrides config)
    #[arg(long)]
    adults: Option<usize>,

    /// Where to write the JSON output
    #[arg(long, default_value = "households.json")]
    output: PathBuf,

    /// Only log warnings and errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.quiet { tracing::Level::WARN } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(households) = args.households {
        config.num_households = households;
    }
    if let Some(adults) = args.adults {
        config.adults_per_household = adults;
    }

    config.validate()?;

    tracing::info!(
        "Generating {} households ({} adults each), seed {}",
        config.num_households,
        config.adults_per_household,
        config.seed
    );

    let output = generate(&config)?;

    println!("{}", output.summary());

    std::fs::write(&args.output, output.to_json()?)?;
    tracing::info!("Output written to {}", args.output.display());

    Ok(())
}
