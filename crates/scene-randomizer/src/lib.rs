//! Scene randomizer
//!
//! Jitters the height and base colour of every `tallBox.gltf` static mesh in
//! a YAML scene and writes the result to a new file.
//!
//! ```text
//! DXRMilestone.yaml → load_scene → randomize_scene(rng) → save_scene → data.yaml
//! ```
//!
//! Randomness is always injected, so runs are reproducible with a seeded
//! generator:
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scene_randomizer::{run, RandomizerConfig};
//!
//! # fn example() -> Result<(), scene_randomizer::RandomizeError> {
//! let mut rng = StdRng::seed_from_u64(42);
//! let report = run(&RandomizerConfig::default(), &mut rng)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod randomize;

pub use config::{HeightJitter, RandomizerConfig, TargetRule};
pub use error::{RandomizeError, RandomizeResult};
pub use pipeline::run;
pub use randomize::{randomize_scene, RandomizeReport};
