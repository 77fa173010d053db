//! YAML ingress and egress for scene documents
//!
//! Uses serde_yaml, which builds a plain data tree and never instantiates
//! arbitrary tagged types. Anchors and aliases are resolved on load.

use crate::document::SceneDocument;
use crate::error::{ParseError, SerializeError};
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

/// Parse YAML text into a scene document
///
/// `origin` is only used in error messages.
///
/// # Errors
/// `ParseError::Syntax` if the text is malformed, empty, or holds more than
/// one YAML document.
pub fn parse_scene(content: &str, origin: impl AsRef<Path>) -> Result<SceneDocument, ParseError> {
    let origin = origin.as_ref();
    let mut documents = Vec::new();

    for doc in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(doc)
            .map_err(|e| ParseError::syntax_error(origin, format!("YAML parse error: {e}")))?;
        documents.push(value);
    }

    if documents.len() > 1 {
        return Err(ParseError::syntax_error(
            origin,
            format!("expected one YAML document, found {}", documents.len()),
        ));
    }

    match documents.pop() {
        None | Some(Value::Null) => Err(ParseError::syntax_error(origin, "empty YAML document")),
        Some(root) => Ok(SceneDocument::new(root)),
    }
}

/// Read and parse a scene file
///
/// # Errors
/// - `ParseError::Io` if the file cannot be read
/// - `ParseError::Syntax` as for [`parse_scene`]
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneDocument, ParseError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::io_error(path, e))?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    parse_scene(&content, path)
}

/// Serialize a scene document to YAML text
///
/// # Errors
/// `SerializeError::Format` if the emitter rejects the tree.
pub fn to_yaml_string(doc: &SceneDocument) -> Result<String, SerializeError> {
    serde_yaml::to_string(doc.root()).map_err(|e| SerializeError::Format(e.to_string()))
}

/// Serialize and write a scene document, replacing any existing file
///
/// The whole document is rendered before the file is opened, so a format
/// failure leaves the destination untouched.
///
/// # Errors
/// - `SerializeError::Format` if the emitter rejects the tree
/// - `SerializeError::Io` if the file cannot be written
pub fn save_scene(doc: &SceneDocument, path: impl AsRef<Path>) -> Result<(), SerializeError> {
    let path = path.as_ref();
    let yaml = to_yaml_string(doc)?;
    std::fs::write(path, yaml.as_bytes()).map_err(|e| SerializeError::io_error(path, e))?;
    tracing::debug!("Wrote {} bytes to {}", yaml.len(), path.display());
    Ok(())
}
