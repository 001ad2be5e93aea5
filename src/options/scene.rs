use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Scene-level interaction parameters.
pub struct SceneOptions {
    /// Name prefix marking an object as selectable. The pool of selectable
    /// objects is fixed once the scene loads.
    #[schemars(skip)]
    pub selectable_prefix: String,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            selectable_prefix: "Painting".to_owned(),
        }
    }
}
