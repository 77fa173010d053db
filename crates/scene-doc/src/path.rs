//! Dotted-path lookups into a YAML tree (`Material.Albedo`)

use serde_yaml::Value;
use std::borrow::Cow;

/// Get value at dotted path, descending through mappings only
pub(crate) fn get_path<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_mapping()?.get(segment)?;
    }
    Some(current)
}

/// Mutable variant of [`get_path`]; never creates missing segments
pub(crate) fn get_path_mut<'v>(root: &'v mut Value, path: &str) -> Option<&'v mut Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_mapping_mut()?.get_mut(segment)?;
    }
    Some(current)
}

/// Render a mapping key as an object identifier
pub(crate) fn key_name(key: &Value) -> Cow<'_, str> {
    match key {
        Value::String(s) => Cow::Borrowed(s),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Null => Cow::Borrowed("~"),
        other => Cow::Owned(format!("{other:?}")),
    }
}
