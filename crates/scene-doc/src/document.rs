//! In-memory scene document
//!
//! A `SceneDocument` owns the whole parsed YAML tree. Only the `SceneGraph`
//! mapping gets typed access; every other key is carried through verbatim.

use crate::error::FieldError;
use crate::object::{ObjectEntry, ObjectEntryMut, ObjectKind};
use crate::path::{get_path, key_name};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Top-level key holding the object mapping
pub const SCENE_GRAPH_KEY: &str = "SceneGraph";
/// Top-level key holding the scene type tag
pub const SCENE_TYPE_KEY: &str = "SceneType";

/// Parsed scene file
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDocument {
    root: Value,
}

impl SceneDocument {
    /// Wrap an already parsed YAML tree
    #[inline]
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Whole YAML tree
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Get value at dotted path (`SceneGraph.box_0.Position`)
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        get_path(&self.root, path)
    }

    /// `SceneType` tag, if present
    #[must_use]
    pub fn scene_type(&self) -> Option<&str> {
        self.root.get(SCENE_TYPE_KEY).and_then(Value::as_str)
    }

    /// The `SceneGraph` mapping
    ///
    /// # Errors
    /// - `FieldError::MissingKey` if the document has no `SceneGraph`
    /// - `FieldError::NotAMapping` if `SceneGraph` is not a mapping
    pub fn scene_graph(&self) -> Result<&Mapping, FieldError> {
        self.root
            .get(SCENE_GRAPH_KEY)
            .ok_or_else(missing_scene_graph)?
            .as_mapping()
            .ok_or_else(scene_graph_not_a_mapping)
    }

    /// The `SceneGraph` mapping, mutably
    ///
    /// # Errors
    /// Same as [`scene_graph`](Self::scene_graph).
    pub fn scene_graph_mut(&mut self) -> Result<&mut Mapping, FieldError> {
        self.root
            .get_mut(SCENE_GRAPH_KEY)
            .ok_or_else(missing_scene_graph)?
            .as_mapping_mut()
            .ok_or_else(scene_graph_not_a_mapping)
    }

    /// Object entries in stored order
    ///
    /// Entries whose key is not a string are named by their scalar text.
    ///
    /// # Errors
    /// Same as [`scene_graph`](Self::scene_graph).
    pub fn objects(&self) -> Result<Vec<ObjectEntry<'_>>, FieldError> {
        Ok(self
            .scene_graph()?
            .iter()
            .map(|(key, body)| ObjectEntry::new(key_name(key), body))
            .collect())
    }

    /// Mutable object entries in stored order
    ///
    /// # Errors
    /// Same as [`scene_graph`](Self::scene_graph).
    pub fn objects_mut(&mut self) -> Result<Vec<ObjectEntryMut<'_>>, FieldError> {
        Ok(self
            .scene_graph_mut()?
            .iter_mut()
            .map(|(key, body)| ObjectEntryMut::new(key_name(key).into_owned(), body))
            .collect())
    }

    /// Look up one object by identifier
    #[must_use]
    pub fn object(&self, name: &str) -> Option<ObjectEntry<'_>> {
        self.objects()
            .ok()?
            .into_iter()
            .find(|entry| entry.name() == name)
    }

    /// Object counts per type tag
    ///
    /// # Errors
    /// Same as [`scene_graph`](Self::scene_graph).
    pub fn summary(&self) -> Result<SceneSummary, FieldError> {
        let graph = self.scene_graph()?;
        let mut summary = SceneSummary {
            scene_type: self.scene_type().map(str::to_string),
            objects: graph.len(),
            ..SceneSummary::default()
        };

        for body in graph.values() {
            match body.get(crate::object::TYPE_KEY).and_then(Value::as_str) {
                Some(tag) => *summary.by_kind.entry(ObjectKind::from(tag)).or_insert(0) += 1,
                None => summary.untyped += 1,
            }
        }

        Ok(summary)
    }
}

fn missing_scene_graph() -> FieldError {
    FieldError::MissingKey {
        key: SCENE_GRAPH_KEY.to_string(),
    }
}

fn scene_graph_not_a_mapping() -> FieldError {
    FieldError::NotAMapping {
        path: SCENE_GRAPH_KEY.to_string(),
    }
}

/// Per-type object counts of a scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneSummary {
    /// `SceneType` tag, if present
    pub scene_type: Option<String>,
    /// Total entries in `SceneGraph`
    pub objects: usize,
    /// Entries per type tag
    pub by_kind: BTreeMap<ObjectKind, usize>,
    /// Entries with a missing or non-string `Type`
    pub untyped: usize,
}

impl SceneSummary {
    /// Number of entries tagged `kind`
    #[must_use]
    pub fn count(&self, kind: &ObjectKind) -> usize {
        self.by_kind.get(kind).copied().unwrap_or(0)
    }
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scene, {} objects",
            self.scene_type.as_deref().unwrap_or("untyped"),
            self.objects
        )?;
        for (kind, count) in &self.by_kind {
            write!(f, ", {kind}: {count}")?;
        }
        if self.untyped > 0 {
            write!(f, ", untyped: {}", self.untyped)?;
        }
        Ok(())
    }
}
