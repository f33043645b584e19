//! Scene codecs.
//!
//! History entries are MessagePack blobs of the whole scene; the storage
//! blob is JSON so it stays readable in the browser's devtools.

use crate::error::SceneError;
use crate::model::Scene;

/// One immutable, self-contained capture of a scene.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot(Vec<u8>);

impl Snapshot {
    pub fn capture(scene: &Scene) -> Result<Self, SceneError> {
        Ok(Self(rmp_serde::to_vec_named(scene)?))
    }

    pub fn restore(&self) -> Result<Scene, SceneError> {
        Ok(rmp_serde::from_slice(&self.0)?)
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Snapshot({} bytes)", self.0.len())
    }
}

/// Serialize a scene into the storage blob format.
pub fn scene_to_blob(scene: &Scene) -> Result<String, SceneError> {
    Ok(serde_json::to_string(scene)?)
}

/// Parse a storage blob back into a scene.
pub fn scene_from_blob(blob: &str) -> Result<Scene, SceneError> {
    Ok(serde_json::from_str(blob)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ElementId;
    use crate::model::*;
    use pretty_assertions::assert_eq;

    fn sample_scene() -> Scene {
        let mut scene = Scene::default();
        for ty in [ElementType::Text, ElementType::Shape, ElementType::Image] {
            let id = scene.mint_id(ty);
            scene.push(Element::with_defaults(id, ty));
        }
        scene
    }

    #[test]
    fn snapshot_restores_identical_scene() {
        let scene = sample_scene();
        let snap = Snapshot::capture(&scene).unwrap();
        assert!(!snap.is_empty());
        assert_eq!(snap.restore().unwrap(), scene);
    }

    #[test]
    fn snapshot_preserves_ids() {
        let scene = sample_scene();
        let restored = Snapshot::capture(&scene).unwrap().restore().unwrap();
        assert!(restored.contains(ElementId::intern("text_0")));
        assert!(restored.contains(ElementId::intern("image_2")));
        assert_eq!(restored.next_id, 3);
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let err = scene_from_blob("<div class=\"template-element\">").unwrap_err();
        assert!(matches!(err, SceneError::Blob(_)));
    }
}
