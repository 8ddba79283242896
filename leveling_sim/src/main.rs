//! leveling_sim - Seeded command-line driver for leveling sessions

mod simulation;

use anyhow::{Context, Result};
use clap::Parser;
use leveling_core::{default_config, load_config};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::SessionSimulation;
use std::path::PathBuf;

/// Simulate a play session and report item levels and event penalties
#[derive(Parser, Debug)]
#[command(name = "leveling_sim")]
#[command(about = "Simulate item leveling under recurring world events", long_about = None)]
#[command(version)]
struct Cli {
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of 60 Hz simulation ticks to run
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,

    /// Leveling config TOML, the bundled config when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => default_config(),
    };

    tracing::info!(seed = cli.seed, ticks = cli.ticks, "starting simulation");
    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let report = SessionSimulation::new(&config).run(&config, cli.ticks, &mut rng);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}
