//! Error types for randomizer runs

use scene_doc::{FieldError, ParseError, SceneError, SerializeError};
use std::path::PathBuf;

/// Errors from a randomizer run
#[derive(Debug, thiserror::Error)]
pub enum RandomizeError {
    /// Output path equals the input path
    #[error("output {0} would overwrite the input scene")]
    OutputIsInput(PathBuf),

    /// Scene ingress, access or egress failed
    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl From<ParseError> for RandomizeError {
    fn from(error: ParseError) -> Self {
        Self::Scene(error.into())
    }
}

impl From<FieldError> for RandomizeError {
    fn from(error: FieldError) -> Self {
        Self::Scene(error.into())
    }
}

impl From<SerializeError> for RandomizeError {
    fn from(error: SerializeError) -> Self {
        Self::Scene(error.into())
    }
}

/// Result type alias for randomizer operations
pub type RandomizeResult<T> = Result<T, RandomizeError>;
