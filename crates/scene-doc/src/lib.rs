//! Scene documents
//!
//! The boundary between scene files on disk and the in-memory tree the
//! scene tools mutate.
//!
//! # Core Operations
//!
//! - **Ingress**: parse a YAML scene file into a `SceneDocument`
//! - **Access**: typed views over `SceneGraph` entries with named errors
//! - **Egress**: serialize the document back to YAML
//!
//! # Architecture
//!
//! ```text
//! File System → load_scene → SceneDocument → ObjectEntryMut edits → save_scene → File System
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use scene_doc::{load_scene, save_scene, POSITION_FIELD};
//!
//! # fn example() -> Result<(), scene_doc::SceneError> {
//! let mut doc = load_scene("DXRMilestone.yaml")?;
//! for mut entry in doc.objects_mut()? {
//!     entry.set_component(POSITION_FIELD, 1, 0.0)?;
//! }
//! save_scene(&doc, "data.yaml")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod document;
pub mod error;
pub mod object;
mod path;
pub mod yaml;

pub use document::{SceneDocument, SceneSummary, SCENE_GRAPH_KEY, SCENE_TYPE_KEY};
pub use error::{FieldError, ParseError, SceneError, SerializeError};
pub use object::{
    ObjectEntry, ObjectEntryMut, ObjectKind, ALBEDO_FIELD, ASSET_PATH_KEY, POSITION_FIELD, TYPE_KEY,
};
pub use yaml::{load_scene, parse_scene, save_scene, to_yaml_string};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with scene documents
    pub use crate::document::{SceneDocument, SceneSummary};
    pub use crate::error::{FieldError, ParseError, SceneError, SerializeError};
    pub use crate::object::{ObjectEntry, ObjectEntryMut, ObjectKind};
    pub use crate::yaml::{load_scene, parse_scene, save_scene};
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn untouched_entries_survive_edit_cycle() {
        let yaml = r#"
SceneGraph:
  cam:
    Type: Camera
    Position: [0, 1, -10]
    fov: 60
    isActive: true
  box:
    Type: StaticMesh
    AssetPath: tallBox.gltf
    Position: [1, 2, 3]
    Material:
      Albedo: [0, 0, 0]
"#;
        let mut doc = parse_scene(yaml, "scene.yaml").unwrap();
        let before = doc.object("cam").map(|e| e.body().clone());

        for mut entry in doc.objects_mut().unwrap() {
            if entry.as_entry().kind() == Some(ObjectKind::StaticMesh) {
                entry.set_component(POSITION_FIELD, 1, -4.0).unwrap();
            }
        }

        let text = to_yaml_string(&doc).unwrap();
        let reparsed = parse_scene(&text, "data.yaml").unwrap();
        assert_eq!(reparsed.object("cam").map(|e| e.body().clone()), before);
        assert_eq!(reparsed.object("box").and_then(|e| e.component(POSITION_FIELD, 1)), Some(-4.0));
    }

    #[test]
    fn scene_error_from_parts() {
        let err: SceneError = FieldError::MissingKey {
            key: SCENE_GRAPH_KEY.to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "missing top-level key: 'SceneGraph'");
    }
}
