//! Testing utilities for the scene randomizer workspace
//!
//! Shared fixtures, scene builders and assertions.

#![allow(missing_docs)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_doc::{parse_scene, SceneDocument};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// One eligible tallBox, one other static mesh, one camera
pub const THREE_ENTRY_SCENE: &str = r#"SceneType: Level
SceneGraph:
  tallBox_0:
    Type: StaticMesh
    AssetPath: tallBox.gltf
    Position: [1.5, 0.0, -2.0]
    Scale: [1.0, 3.0, 1.0]
    Rotation: [0.0, 15.0, 0.0]
    Material:
      Albedo: [0.2, 0.4, 0.6]
      Metallic: 0.0
      Roughness: 0.8
  floor:
    Type: StaticMesh
    AssetPath: floor.gltf
    Position: [0.0, -5.0, 0.0]
    Scale: [10.0, 1.0, 10.0]
    Rotation: [0.0, 0.0, 0.0]
    Material:
      Albedo: [0.9, 0.9, 0.9]
  mainCamera:
    Type: Camera
    Position: [0.0, 2.0, -12.0]
    View: [0.0, 0.0, 1.0]
    Up: [0.0, 1.0, 0.0]
    fov: 60.0
    near: 0.1
    far: 100.0
    isActive: true
"#;

/// Scene without a `SceneGraph` key
pub const NO_SCENE_GRAPH: &str = r#"SceneType: Level
Objects:
  box:
    Type: StaticMesh
"#;

/// Build a scene with `tall` eligible boxes followed by `other` meshes of a
/// different asset and one ambient light
#[must_use]
pub fn scene_with_boxes(tall: usize, other: usize) -> String {
    let mut yaml = String::from("SceneType: Level\nSceneGraph:\n");
    for i in 0..tall {
        let _ = write!(
            yaml,
            "  tallBox_{i}:\n    Type: StaticMesh\n    AssetPath: tallBox.gltf\n    Position: [{i}.0, 0.0, 0.0]\n    Material:\n      Albedo: [0.5, 0.5, 0.5]\n"
        );
    }
    for i in 0..other {
        let _ = write!(
            yaml,
            "  crate_{i}:\n    Type: StaticMesh\n    AssetPath: crate.gltf\n    Position: [0.0, {i}.0, 0.0]\n    Material:\n      Albedo: [0.1, 0.2, 0.3]\n"
        );
    }
    yaml.push_str("  ambient:\n    Type: AmbientLight\n    Radiance: [0.3, 0.3, 0.3]\n");
    yaml
}

/// Parse a fixture, panicking on malformed YAML
#[must_use]
pub fn doc(yaml: &str) -> SceneDocument {
    parse_scene(yaml, "fixture.yaml").unwrap()
}

/// Deterministic generator
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fresh scratch directory, removed on drop
#[must_use]
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Identifiers of entries that are tallBox static meshes
#[must_use]
pub fn tall_box_names(doc: &SceneDocument) -> Vec<String> {
    doc.objects()
        .unwrap()
        .iter()
        .filter(|e| {
            e.kind() == Some(scene_doc::ObjectKind::StaticMesh)
                && e.asset_path() == Some("tallBox.gltf")
        })
        .map(|e| e.name().to_string())
        .collect()
}

/// Assert every object not listed in `changed` is identical in both documents,
/// and that top-level keys other than `SceneGraph` are identical too
pub fn assert_only_changed(before: &SceneDocument, after: &SceneDocument, changed: &[String]) {
    let before_root = before.root().as_mapping().unwrap();
    let after_root = after.root().as_mapping().unwrap();
    assert_eq!(before_root.len(), after_root.len(), "top-level key count differs");
    for (key, value) in before_root {
        if key.as_str() == Some(scene_doc::SCENE_GRAPH_KEY) {
            continue;
        }
        assert_eq!(after_root.get(key), Some(value), "top-level key {key:?} changed");
    }

    let before_objects = before.objects().unwrap();
    let after_objects = after.objects().unwrap();
    assert_eq!(before_objects.len(), after_objects.len(), "object count differs");
    for (b, a) in before_objects.iter().zip(&after_objects) {
        assert_eq!(b.name(), a.name(), "object order differs");
        if changed.iter().any(|name| name == b.name()) {
            continue;
        }
        assert_eq!(b.body(), a.body(), "object '{}' changed", b.name());
    }
}

/// Assert the randomized fields of `name` are within their ranges
pub fn assert_randomized_in_range(doc: &SceneDocument, name: &str) {
    let entry = doc.object(name).unwrap();
    let y = entry.component(scene_doc::POSITION_FIELD, 1).unwrap();
    // Inclusive: -4.0 + (1 - 2^-53) - 0.5 rounds to exactly -3.5
    assert!((-4.5..=-3.5).contains(&y), "height {y} of '{name}' out of range");
    for channel in 0..3 {
        let c = entry.component(scene_doc::ALBEDO_FIELD, channel).unwrap();
        assert!((0.0..1.0).contains(&c), "albedo[{channel}] {c} of '{name}' out of range");
    }
}
