//! Randomizer configuration
//!
//! Every value here is a fixed constant for the shipped binary. The struct
//! exists so tests can point the pipeline at scratch directories.

use crate::error::RandomizeError;
use scene_doc::{ObjectEntry, ObjectKind};
use std::path::{Path, PathBuf};

/// Scene file read by the binary
pub const DEFAULT_INPUT: &str = "DXRMilestone.yaml";
/// Scene file written by the binary
pub const DEFAULT_OUTPUT: &str = "data.yaml";
/// Asset whose meshes get randomized
pub const DEFAULT_TARGET_ASSET: &str = "tallBox.gltf";

/// Vertical placement of a randomized mesh: `base + U + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightJitter {
    /// Resting height
    pub base: f64,
    /// Shift applied after adding the unit draw
    pub offset: f64,
}

impl HeightJitter {
    /// Height for a unit draw `u` in `[0, 1)`
    #[inline]
    #[must_use]
    pub fn sample(&self, u: f64) -> f64 {
        self.base + u + self.offset
    }
}

impl Default for HeightJitter {
    fn default() -> Self {
        Self {
            base: -4.0,
            offset: -0.5,
        }
    }
}

/// Which entries get randomized and how
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRule {
    /// Required `Type`
    pub kind: ObjectKind,
    /// Required `AssetPath`
    pub asset_path: String,
    /// Height applied to `Position[1]`
    pub height: HeightJitter,
}

impl TargetRule {
    /// Eligibility: `Type` matches and `AssetPath` is present and equal
    #[must_use]
    pub fn matches(&self, entry: &ObjectEntry<'_>) -> bool {
        entry.kind().as_ref() == Some(&self.kind)
            && entry.asset_path() == Some(self.asset_path.as_str())
    }

    /// Short name used in the report line (`tallBox` for `tallBox.gltf`)
    #[must_use]
    pub fn label(&self) -> String {
        Path::new(&self.asset_path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.asset_path)
            .to_string()
    }
}

impl Default for TargetRule {
    fn default() -> Self {
        Self {
            kind: ObjectKind::StaticMesh,
            asset_path: DEFAULT_TARGET_ASSET.to_string(),
            height: HeightJitter::default(),
        }
    }
}

/// Input, output and rule for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RandomizerConfig {
    /// Scene to read
    pub input: PathBuf,
    /// Scene to write
    pub output: PathBuf,
    /// Target selection and jitter
    pub rule: TargetRule,
}

impl RandomizerConfig {
    /// Default file names resolved inside `dir`
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join(DEFAULT_INPUT),
            output: dir.join(DEFAULT_OUTPUT),
            rule: TargetRule::default(),
        }
    }

    /// Reject configurations that would overwrite the input scene
    ///
    /// # Errors
    /// `RandomizeError::OutputIsInput` if both paths are the same.
    pub fn validate(&self) -> Result<(), RandomizeError> {
        if self.input == self.output {
            return Err(RandomizeError::OutputIsInput(self.output.clone()));
        }
        Ok(())
    }
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            rule: TargetRule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let config = RandomizerConfig::default();
        assert_eq!(config.input, Path::new("DXRMilestone.yaml"));
        assert_eq!(config.output, Path::new("data.yaml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn in_dir_joins_defaults() {
        let config = RandomizerConfig::in_dir("/tmp/scene");
        assert_eq!(config.input, Path::new("/tmp/scene/DXRMilestone.yaml"));
        assert_eq!(config.output, Path::new("/tmp/scene/data.yaml"));
    }

    #[test]
    fn same_input_and_output_rejected() {
        let config = RandomizerConfig {
            output: PathBuf::from(DEFAULT_INPUT),
            ..RandomizerConfig::default()
        };
        assert!(matches!(config.validate(), Err(RandomizeError::OutputIsInput(_))));
    }

    #[test]
    fn height_bounds() {
        let jitter = HeightJitter::default();
        assert_eq!(jitter.sample(0.0), -4.5);
        assert_eq!(jitter.sample(0.5), -4.0);
        assert!(jitter.sample(0.999_999) < -3.5);
    }

    #[test]
    fn label_is_asset_stem() {
        assert_eq!(TargetRule::default().label(), "tallBox");

        let rule = TargetRule {
            asset_path: "meshes/crate".to_string(),
            ..TargetRule::default()
        };
        assert_eq!(rule.label(), "crate");
    }
}
