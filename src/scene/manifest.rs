use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Collider, Scene};
use crate::error::GalleriaError;

/// One object entry in a scene manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestObject {
    /// Name tag; selectable objects carry the configured prefix.
    pub name: String,
    /// Pick geometry.
    pub collider: Collider,
}

/// JSON scene manifest: the pick-geometry companion to the baked models the
/// host renderer loads.
///
/// ```json
/// {
///   "objects": [
///     { "name": "Painting_1",
///       "collider": { "type": "aabb",
///                     "min": [0.0, 1.0, -2.0], "max": [1.5, 2.0, -1.9] } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Objects in draw order.
    pub objects: Vec<ManifestObject>,
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GalleriaError> {
        serde_json::from_str(json)
            .map_err(|e| GalleriaError::ManifestParse(e.to_string()))
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, GalleriaError> {
        let content = std::fs::read_to_string(path).map_err(GalleriaError::Io)?;
        Self::from_json(&content)
    }

    /// Build a [`Scene`] from the manifest, assigning object ids in entry
    /// order.
    #[must_use]
    pub fn into_scene(self) -> Scene {
        let mut scene = Scene::new();
        for obj in self.objects {
            let _ = scene.add_object(obj.name, obj.collider);
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "objects": [
            { "name": "Painting_1",
              "collider": { "type": "aabb",
                            "min": [-1.0, 0.0, -2.0], "max": [1.0, 2.0, -1.9] } },
            { "name": "Bookshelf",
              "collider": { "type": "mesh",
                            "positions": [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]],
                            "indices": [0, 1, 2] } }
        ]
    }"#;

    #[test]
    fn parses_both_collider_kinds() {
        let manifest = SceneManifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.objects.len(), 2);

        let scene = manifest.into_scene();
        assert_eq!(scene.objects()[0].name, "Painting_1");
        assert!(matches!(scene.objects()[1].collider, Collider::Mesh { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SceneManifest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GalleriaError::ManifestParse(_)));
    }
}
