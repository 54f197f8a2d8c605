use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::ColorMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Coloring and scene decorations.
pub struct DisplayOptions {
    /// Trajectory coloring strategy.
    #[schemars(title = "Color Mode")]
    pub color_mode: ColorMode,
    /// Whether to draw the X/Y/Z axes.
    #[schemars(title = "Show Axes")]
    pub show_axes: bool,
    /// Clear color.
    #[schemars(skip)]
    pub background: [f32; 3],
    /// RGB color of the axis lines.
    #[schemars(skip)]
    pub axis_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Fade,
            show_axes: true,
            background: [0.0, 0.0, 0.0],
            axis_color: [0.8, 0.8, 0.8],
        }
    }
}
