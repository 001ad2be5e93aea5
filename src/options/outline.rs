use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Outline", inline)]
#[serde(default)]
/// Outline post-process parameters for the host renderer's highlight pass.
///
/// The interaction engine only decides *what* to outline; these values
/// describe *how*, and are forwarded verbatim to the renderer.
pub struct OutlineOptions {
    /// Edge intensity.
    #[schemars(title = "Edge Strength", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub edge_strength: f32,
    /// Glow amount around the edge.
    #[schemars(title = "Edge Glow", range(min = 0.0, max = 4.0), extend("step" = 0.1))]
    pub edge_glow: f32,
    /// Edge thickness in pixels.
    #[schemars(title = "Edge Thickness", range(min = 0.5, max = 8.0), extend("step" = 0.5))]
    pub edge_thickness: f32,
    /// Pulse period in seconds (0 disables pulsing).
    #[schemars(title = "Pulse Period", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub pulse_period: f32,
    /// RGB edge color where the outlined object is visible.
    #[schemars(skip)]
    pub visible_edge_color: [f32; 3],
    /// RGB edge color where the outlined object is occluded.
    #[schemars(skip)]
    pub hidden_edge_color: [f32; 3],
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            edge_strength: 2.0,
            edge_glow: 1.0,
            edge_thickness: 1.0,
            pulse_period: 5.0,
            // #ffdc73 / #9a6637, the gallery accent golds
            visible_edge_color: [1.0, 0.863, 0.451],
            hidden_edge_color: [0.604, 0.4, 0.216],
        }
    }
}
