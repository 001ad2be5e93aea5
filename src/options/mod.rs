//! Centralized interaction options with TOML preset support.
//!
//! All tweakable settings (camera, outline highlight, scene interaction,
//! keybindings) are consolidated here. Options serialize to/from TOML for
//! view presets, and expose a JSON schema for schema-driven host UIs.

mod camera;
mod keybindings;
mod outline;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use outline::OutlineOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalleriaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[outline]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and orbit control parameters.
    pub camera: CameraOptions,
    /// Outline highlight parameters.
    pub outline: OutlineOptions,
    /// Scene interaction parameters.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GalleriaError> {
        let content = std::fs::read_to_string(path).map_err(GalleriaError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| GalleriaError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GalleriaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleriaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GalleriaError::Io)?;
        }
        std::fs::write(path, content).map_err(GalleriaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[outline]
edge_strength = 4.0

[scene]
selectable_prefix = "Sculpture"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.outline.edge_strength, 4.0);
        assert_eq!(opts.scene.selectable_prefix, "Sculpture");
        // Everything else should be default
        assert_eq!(opts.outline.pulse_period, 5.0);
        assert_eq!(opts.camera.fovy, 25.0);
        assert_eq!(opts.camera.max_distance, 20.0);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Cancel));
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(KeyAction::RecenterCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn outline_defaults_match_gallery_palette() {
        let outline = OutlineOptions::default();
        assert_eq!(outline.visible_edge_color, [1.0, 0.863, 0.451]);
        assert_eq!(outline.edge_strength, 2.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("outline"));
        assert!(props.contains_key("scene"));

        // Keybindings are not schema-driven
        assert!(!props.contains_key("keybindings"));

        // Camera should expose tunables but not the home pose
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("damping").is_some());
        assert!(camera.get("eye").is_none());
    }
}
