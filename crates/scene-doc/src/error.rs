//! Error types for scene documents
//!
//! Provides error handling for:
//! - Parse operations (file → `SceneDocument`)
//! - Field access on `SceneGraph` entries
//! - Serialize operations (`SceneDocument` → file)

use std::path::PathBuf;

/// Errors during scene parsing (ingress)
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Malformed or empty YAML
    #[error("syntax error in {path}: {message}")]
    Syntax {
        /// Origin of the YAML text
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

impl ParseError {
    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while looking up or writing fields of the scene tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Required top-level key is absent
    #[error("missing top-level key: '{key}'")]
    MissingKey {
        /// Key name, e.g. `SceneGraph`
        key: String,
    },

    /// Value at path exists but is not a mapping
    #[error("'{path}' is not a mapping")]
    NotAMapping {
        /// Dotted path of the offending value
        path: String,
    },

    /// Object entry lacks a required field
    #[error("object '{object}' is missing field '{field}'")]
    MissingField {
        /// Object identifier inside `SceneGraph`
        object: String,
        /// Dotted field path, e.g. `Material.Albedo`
        field: String,
    },

    /// Field exists but is not a sequence
    #[error("field '{field}' of object '{object}' is not a sequence")]
    NotASequence {
        /// Object identifier inside `SceneGraph`
        object: String,
        /// Dotted field path
        field: String,
    },

    /// Sequence is shorter than the index being written
    #[error("field '{field}' of object '{object}' has {len} elements, needs at least {required}")]
    SequenceTooShort {
        /// Object identifier inside `SceneGraph`
        object: String,
        /// Dotted field path
        field: String,
        /// Actual length
        len: usize,
        /// Minimum length required
        required: usize,
    },
}

impl FieldError {
    /// Create missing-field error
    pub fn missing_field(object: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            object: object.into(),
            field: field.into(),
        }
    }
}

/// Errors during scene serialization (egress)
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// YAML emitter failed
    #[error("format error: {0}")]
    Format(String),

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        /// Destination file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl SerializeError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined scene error
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Ingress failure
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Field lookup or write failure
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Egress failure
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_display() {
        let err = FieldError::MissingKey {
            key: "SceneGraph".to_string(),
        };
        assert_eq!(err.to_string(), "missing top-level key: 'SceneGraph'");
    }

    #[test]
    fn sequence_too_short_display() {
        let err = FieldError::SequenceTooShort {
            object: "box_0".to_string(),
            field: "Material.Albedo".to_string(),
            len: 2,
            required: 3,
        };
        assert_eq!(
            err.to_string(),
            "field 'Material.Albedo' of object 'box_0' has 2 elements, needs at least 3"
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::syntax_error("scene.yaml", "empty YAML document");
        assert_eq!(err.to_string(), "syntax error in scene.yaml: empty YAML document");
    }

    #[test]
    fn error_conversions() {
        let field_err = FieldError::missing_field("box_0", "Position");
        let scene_err: SceneError = field_err.into();
        assert!(matches!(scene_err, SceneError::Field(_)));

        let ser_err = SerializeError::Format("bad".to_string());
        let scene_err: SceneError = ser_err.into();
        assert!(matches!(scene_err, SceneError::Serialize(_)));
    }

    #[test]
    fn umbrella_shows_inner_message_once() {
        use std::error::Error as _;

        let inner = FieldError::missing_field("box_0", "Position");
        let err: SceneError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.source().is_none());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SceneError = ParseError::io_error("scene.yaml", io).into();
        assert_eq!(err.to_string(), "io error reading scene.yaml: gone");
        assert_eq!(err.source().map(ToString::to_string), Some("gone".to_string()));
    }
}
