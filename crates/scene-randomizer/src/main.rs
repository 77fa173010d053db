//! `scene-randomizer` binary: fixed input, fixed output, default-seeded RNG

use anyhow::Context;
use clap::Command;
use scene_randomizer::{run, RandomizerConfig};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout carries only the report line
const LOG_FILTER: &str = "warn";

fn main() -> anyhow::Result<()> {
    Command::new("scene-randomizer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Randomize tallBox height and albedo in DXRMilestone.yaml, writing data.yaml")
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_writer(std::io::stderr)
        .init();

    let config = RandomizerConfig::default();
    let mut rng = rand::thread_rng();

    let report = run(&config, &mut rng)
        .with_context(|| format!("failed to randomize {}", config.input.display()))?;

    println!("{report}");
    Ok(())
}
