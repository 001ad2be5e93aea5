use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Home eye position in world space.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Home look-at target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Rotation sensitivity (radians per pixel of drag).
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity (world units per pixel of drag).
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Damping rate for eased camera motion (higher = snappier).
    #[schemars(title = "Damping", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub damping: f32,
    /// Minimum polar angle in degrees (down from straight up).
    #[schemars(skip)]
    pub min_polar_deg: f32,
    /// Maximum polar angle in degrees. 90 keeps the camera above the floor.
    #[schemars(skip)]
    pub max_polar_deg: f32,
    /// Minimum azimuth angle in degrees.
    #[schemars(skip)]
    pub min_azimuth_deg: f32,
    /// Maximum azimuth angle in degrees. The [0, 90] default keeps the two
    /// open walls of the room behind the camera.
    #[schemars(skip)]
    pub max_azimuth_deg: f32,
    /// Minimum orbit distance from the target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Maximum orbit distance from the target.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 25.0,
            znear: 0.1,
            zfar: 100.0,
            eye: [8.0, 4.0, 8.0],
            target: [0.0, 1.0, 0.0],
            rotate_speed: 0.005,
            pan_speed: 0.005,
            zoom_speed: 0.1,
            damping: 10.0,
            min_polar_deg: 1.0,
            max_polar_deg: 90.0,
            min_azimuth_deg: 0.0,
            max_azimuth_deg: 90.0,
            min_distance: 1.0,
            max_distance: 20.0,
        }
    }
}
