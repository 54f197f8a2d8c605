use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Progressive-reveal settings.
pub struct AnimationOptions {
    /// Start with the reveal running.
    #[schemars(title = "Animate")]
    pub enabled: bool,
    /// Seconds to reveal the whole trajectory (never below 1).
    #[schemars(title = "Duration (s)", range(min = 1.0), extend("step" = 1.0))]
    pub speed_seconds: f64,
    /// Seconds added/removed by the speed keys.
    #[schemars(skip)]
    pub speed_step: f64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            speed_seconds: 20.0,
            speed_step: 1.0,
        }
    }
}
