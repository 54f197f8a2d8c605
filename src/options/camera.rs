use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orthographic view parameters.
pub struct CameraOptions {
    /// Rotation about the vertical axis, in degrees.
    #[schemars(title = "Azimuth")]
    pub azimuth: f32,
    /// Rotation about the horizontal axis, in degrees.
    #[schemars(title = "Elevation")]
    pub elevation: f32,
    /// Half-height of the orthographic box in world units.
    #[schemars(title = "View Size", range(min = 2.0, max = 400.0), extend("step" = 2.0))]
    pub dim: f32,
    /// Degrees per arrow-key press.
    #[schemars(skip)]
    pub angle_step: f32,
    /// World units per zoom key press.
    #[schemars(skip)]
    pub zoom_step: f32,
    /// Smallest allowed `dim`.
    #[schemars(skip)]
    pub min_dim: f32,
    /// Half-depth of the orthographic box.
    #[schemars(skip)]
    pub depth: f32,
    /// Degrees of rotation per pixel of mouse drag.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 15.0,
            dim: 60.0,
            angle_step: 5.0,
            zoom_step: 2.0,
            min_dim: 2.0,
            depth: 100.0,
            rotate_speed: 0.5,
        }
    }
}
