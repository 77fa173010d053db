//! The randomization pass over `SceneGraph`

use crate::config::TargetRule;
use rand::Rng;
use scene_doc::{FieldError, SceneDocument, ALBEDO_FIELD, POSITION_FIELD};
use std::fmt;

/// Index of the vertical axis in `Position`
pub const HEIGHT_INDEX: usize = 1;
/// Number of albedo channels overwritten (r, g, b)
pub const ALBEDO_CHANNELS: usize = 3;

/// Outcome of one randomization pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomizeReport {
    /// Short asset name, e.g. `tallBox`
    pub label: String,
    /// Number of entries randomized
    pub count: usize,
    /// Identifiers of the randomized entries, in scan order
    pub touched: Vec<String>,
}

impl RandomizeReport {
    fn new(label: String) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }
}

impl fmt::Display for RandomizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} count: {}", self.label, self.count)
    }
}

/// Randomize every entry of `doc` matched by `rule`
///
/// Per matching entry one draw sets `Position[1]` through the rule's
/// [`HeightJitter`](crate::config::HeightJitter), then three fresh draws set
/// `Material.Albedo[0..3]`. All draws are uniform in `[0, 1)`. Entries that
/// do not match are not touched.
///
/// Both fields are checked before anything is written, so a failing entry is
/// never half-updated.
///
/// # Errors
/// - `FieldError::MissingKey` / `NotAMapping` if `SceneGraph` is unusable
/// - `FieldError::MissingField`, `NotASequence` or `SequenceTooShort` if a
///   matching entry lacks a usable `Position` or `Material.Albedo`
pub fn randomize_scene<R: Rng>(
    doc: &mut SceneDocument,
    rule: &TargetRule,
    rng: &mut R,
) -> Result<RandomizeReport, FieldError> {
    let mut report = RandomizeReport::new(rule.label());

    for mut entry in doc.objects_mut()? {
        let view = entry.as_entry();
        if view.kind().is_none() {
            tracing::warn!("Object '{}' has no string Type, left unchanged", view.name());
            continue;
        }
        if !rule.matches(&view) {
            continue;
        }

        entry.require_sequence(POSITION_FIELD, HEIGHT_INDEX + 1)?;
        entry.require_sequence(ALBEDO_FIELD, ALBEDO_CHANNELS)?;

        let height = rule.height.sample(rng.gen::<f64>());
        entry.set_component(POSITION_FIELD, HEIGHT_INDEX, height)?;
        for channel in 0..ALBEDO_CHANNELS {
            entry.set_component(ALBEDO_FIELD, channel, rng.gen::<f64>())?;
        }

        tracing::debug!("Randomized '{}': height {:.4}", entry.name(), height);
        report.touched.push(entry.name().to_string());
        report.count += 1;
    }

    tracing::info!("Randomized {} {} objects", report.count, report.label);
    Ok(report)
}
