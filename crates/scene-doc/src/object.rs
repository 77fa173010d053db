//! Object entries of the `SceneGraph` mapping
//!
//! Entries stay generic YAML so that fields this crate does not know about
//! survive a load/save cycle untouched. The views below give typed access to
//! the handful of fields the scene tools read or write.

use crate::error::FieldError;
use crate::path::{get_path, get_path_mut};
use serde_yaml::Value;
use std::borrow::Cow;
use std::fmt;

/// Key holding the object type tag
pub const TYPE_KEY: &str = "Type";
/// Key holding the geometry asset of a static mesh
pub const ASSET_PATH_KEY: &str = "AssetPath";
/// Field path of the object position (x, y, z)
pub const POSITION_FIELD: &str = "Position";
/// Field path of the material base colour (r, g, b)
pub const ALBEDO_FIELD: &str = "Material.Albedo";

/// Object type tag
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectKind {
    /// Fixed mesh referencing a geometry asset
    StaticMesh,
    /// Scene-wide ambient light
    AmbientLight,
    /// Camera
    Camera,
    /// Any other tag, kept verbatim
    Other(String),
}

impl ObjectKind {
    /// Tag as written in the scene file
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::StaticMesh => "StaticMesh",
            Self::AmbientLight => "AmbientLight",
            Self::Camera => "Camera",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for ObjectKind {
    fn from(tag: &str) -> Self {
        match tag {
            "StaticMesh" => Self::StaticMesh,
            "AmbientLight" => Self::AmbientLight,
            "Camera" => Self::Camera,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of one `SceneGraph` entry
#[derive(Debug, Clone)]
pub struct ObjectEntry<'a> {
    name: Cow<'a, str>,
    body: &'a Value,
}

impl<'a> ObjectEntry<'a> {
    pub(crate) fn new(name: impl Into<Cow<'a, str>>, body: &'a Value) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Object identifier (the `SceneGraph` key)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw YAML body of the entry
    #[inline]
    #[must_use]
    pub fn body(&self) -> &'a Value {
        self.body
    }

    /// Type tag, `None` when absent or not a string
    #[must_use]
    pub fn kind(&self) -> Option<ObjectKind> {
        self.body
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .map(ObjectKind::from)
    }

    /// `AssetPath`, `None` when absent or not a string
    #[must_use]
    pub fn asset_path(&self) -> Option<&'a str> {
        self.body.get(ASSET_PATH_KEY).and_then(Value::as_str)
    }

    /// Value at dotted field path
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&'a Value> {
        get_path(self.body, path)
    }

    /// Numeric element `index` of the sequence at `field`
    #[must_use]
    pub fn component(&self, field: &str, index: usize) -> Option<f64> {
        self.field(field)?.as_sequence()?.get(index)?.as_f64()
    }

    /// `Position` as numbers, `None` if any element is not numeric
    #[must_use]
    pub fn position(&self) -> Option<Vec<f64>> {
        self.numbers(POSITION_FIELD)
    }

    /// `Material.Albedo` as numbers, `None` if any element is not numeric
    #[must_use]
    pub fn albedo(&self) -> Option<Vec<f64>> {
        self.numbers(ALBEDO_FIELD)
    }

    fn numbers(&self, field: &str) -> Option<Vec<f64>> {
        self.field(field)?
            .as_sequence()?
            .iter()
            .map(Value::as_f64)
            .collect()
    }
}

/// Mutable view of one `SceneGraph` entry
#[derive(Debug)]
pub struct ObjectEntryMut<'a> {
    name: String,
    body: &'a mut Value,
}

impl<'a> ObjectEntryMut<'a> {
    pub(crate) fn new(name: String, body: &'a mut Value) -> Self {
        Self { name, body }
    }

    /// Object identifier (the `SceneGraph` key)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow as a read-only view
    #[inline]
    #[must_use]
    pub fn as_entry(&self) -> ObjectEntry<'_> {
        ObjectEntry::new(self.name.as_str(), &*self.body)
    }

    /// Check that `field` is a sequence with at least `min_len` elements
    ///
    /// # Errors
    /// - `FieldError::MissingField` if any path segment is absent
    /// - `FieldError::NotASequence` if the value is not a sequence
    /// - `FieldError::SequenceTooShort` if it has fewer than `min_len` elements
    pub fn require_sequence(&mut self, field: &str, min_len: usize) -> Result<(), FieldError> {
        let len = self.sequence_mut(field)?.len();
        if len < min_len {
            return Err(FieldError::SequenceTooShort {
                object: self.name.clone(),
                field: field.to_string(),
                len,
                required: min_len,
            });
        }
        Ok(())
    }

    /// Overwrite element `index` of the sequence at `field` with a float
    ///
    /// # Errors
    /// Same conditions as [`require_sequence`](Self::require_sequence) with
    /// `min_len = index + 1`.
    pub fn set_component(&mut self, field: &str, index: usize, value: f64) -> Result<(), FieldError> {
        self.require_sequence(field, index + 1)?;
        let seq = self.sequence_mut(field)?;
        seq[index] = Value::from(value);
        Ok(())
    }

    fn sequence_mut(&mut self, field: &str) -> Result<&mut Vec<Value>, FieldError> {
        match get_path_mut(self.body, field) {
            None => Err(FieldError::missing_field(&self.name, field)),
            Some(Value::Sequence(seq)) => Ok(seq),
            Some(_) => Err(FieldError::NotASequence {
                object: self.name.clone(),
                field: field.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> Value {
        serde_yaml::from_str(
            r#"
Type: StaticMesh
AssetPath: tallBox.gltf
Position: [1.0, 2.0, 3.0]
Material:
  Albedo: [0.5, 0.5, 0.5]
"#,
        )
        .unwrap()
    }

    #[test]
    fn kind_round_trips_known_tags() {
        for tag in ["StaticMesh", "AmbientLight", "Camera"] {
            assert_eq!(ObjectKind::from(tag).as_str(), tag);
        }
        assert_eq!(ObjectKind::from("PointLight"), ObjectKind::Other("PointLight".into()));
        assert_eq!(ObjectKind::Other("PointLight".into()).to_string(), "PointLight");
    }

    #[test]
    fn entry_reads_fields() {
        let body = mesh();
        let entry = ObjectEntry::new("box_0", &body);

        assert_eq!(entry.name(), "box_0");
        assert_eq!(entry.kind(), Some(ObjectKind::StaticMesh));
        assert_eq!(entry.asset_path(), Some("tallBox.gltf"));
        assert_eq!(entry.position(), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(entry.component(ALBEDO_FIELD, 2), Some(0.5));
        assert_eq!(entry.component(ALBEDO_FIELD, 3), None);
    }

    #[test]
    fn non_string_type_has_no_kind() {
        let body: Value = serde_yaml::from_str("Type: 3").unwrap();
        assert_eq!(ObjectEntry::new("x", &body).kind(), None);
    }

    #[test]
    fn set_component_overwrites_in_place() {
        let mut body = mesh();
        let mut entry = ObjectEntryMut::new("box_0".into(), &mut body);

        entry.set_component(POSITION_FIELD, 1, -4.25).unwrap();
        entry.set_component(ALBEDO_FIELD, 0, 0.75).unwrap();

        let view = entry.as_entry();
        assert_eq!(view.position(), Some(vec![1.0, -4.25, 3.0]));
        assert_eq!(view.albedo(), Some(vec![0.75, 0.5, 0.5]));
    }

    #[test]
    fn missing_material_is_named() {
        let mut body: Value = serde_yaml::from_str("Type: StaticMesh\nPosition: [0, 0, 0]").unwrap();
        let mut entry = ObjectEntryMut::new("box_1".into(), &mut body);

        let err = entry.set_component(ALBEDO_FIELD, 0, 0.1).unwrap_err();
        assert_eq!(err, FieldError::missing_field("box_1", ALBEDO_FIELD));
    }

    #[test]
    fn short_sequence_is_rejected() {
        let mut body: Value = serde_yaml::from_str("Position: [0, 0]").unwrap();
        let mut entry = ObjectEntryMut::new("box_2".into(), &mut body);

        assert!(entry.require_sequence(POSITION_FIELD, 2).is_ok());
        let err = entry.require_sequence(POSITION_FIELD, 3).unwrap_err();
        assert!(matches!(
            err,
            FieldError::SequenceTooShort { len: 2, required: 3, .. }
        ));
    }

    #[test]
    fn scalar_field_is_not_a_sequence() {
        let mut body: Value = serde_yaml::from_str("Position: 5").unwrap();
        let mut entry = ObjectEntryMut::new("box_3".into(), &mut body);

        let err = entry.set_component(POSITION_FIELD, 1, 0.0).unwrap_err();
        assert!(matches!(err, FieldError::NotASequence { .. }));
    }
}
