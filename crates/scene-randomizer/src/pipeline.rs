//! Read → randomize → write

use crate::config::RandomizerConfig;
use crate::error::RandomizeResult;
use crate::randomize::{randomize_scene, RandomizeReport};
use rand::Rng;
use scene_doc::{load_scene, save_scene};

/// Run one randomization over `config.input`, writing `config.output`
///
/// The output file is only opened after the whole pass succeeded; on any
/// error nothing is written and the input is never modified.
///
/// # Errors
/// - `RandomizeError::OutputIsInput` if the config would overwrite the input
/// - `RandomizeError::Scene` for read, parse, field or write failures
pub fn run<R: Rng>(config: &RandomizerConfig, rng: &mut R) -> RandomizeResult<RandomizeReport> {
    config.validate()?;

    let mut doc = load_scene(&config.input)?;
    match doc.summary() {
        Ok(summary) => tracing::info!("Loaded {}: {}", config.input.display(), summary),
        Err(e) => tracing::debug!("No summary for {}: {}", config.input.display(), e),
    }

    let report = randomize_scene(&mut doc, &config.rule, rng)?;

    save_scene(&doc, &config.output)?;
    tracing::info!(
        "Wrote {} ({} objects randomized)",
        config.output.display(),
        report.count
    );

    Ok(report)
}
