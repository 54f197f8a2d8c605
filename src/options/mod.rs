//! Centralized simulation/display options with TOML preset support.
//!
//! All tweakable settings (Lorenz parameters, reveal animation, coloring,
//! camera, keybindings) are consolidated here. Options serialize to/from
//! TOML so a session's setup can be stored as a preset and reloaded.

mod animation;
mod camera;
mod display;
mod simulation;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use simulation::SimulationOptions;

use crate::error::LorenzError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[simulation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Lorenz parameters and integration settings.
    pub simulation: SimulationOptions,
    /// Progressive reveal settings.
    pub animation: AnimationOptions,
    /// Coloring and decorations.
    pub display: DisplayOptions,
    /// Orthographic view parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Write the JSON Schema to `path` (pretty-printed), for editors and
    /// form generators.
    ///
    /// # Errors
    ///
    /// Fails on serialization or I/O.
    pub fn write_schema(path: &Path) -> Result<(), LorenzError> {
        let content = serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| LorenzError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(LorenzError::Io)?;
        log::info!("wrote options schema to {}", path.display());
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails on I/O, TOML syntax, or a configuration that
    /// [`validate`](Self::validate) rejects.
    pub fn load(path: &Path) -> Result<Self, LorenzError> {
        let content = std::fs::read_to_string(path).map_err(LorenzError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse and validate options from a TOML string.
    ///
    /// # Errors
    ///
    /// Fails on TOML syntax or an invalid configuration.
    pub fn from_toml(content: &str) -> Result<Self, LorenzError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| LorenzError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails on serialization or I/O.
    pub fn save(&self, path: &Path) -> Result<(), LorenzError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LorenzError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LorenzError::Io)?;
        }
        std::fs::write(path, content).map_err(LorenzError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// Check preconditions the core relies on.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::InvalidConfig`] for a zero point count, a
    /// non-positive or non-finite step size, or a non-positive view size.
    pub fn validate(&self) -> Result<(), LorenzError> {
        let _ = self.simulation.integration()?;
        let positive = |v: f32| v > 0.0;
        if !positive(self.camera.dim) || !positive(self.camera.min_dim) {
            return Err(LorenzError::InvalidConfig(
                "camera dim and min_dim must be positive".to_owned(),
            ));
        }
        Ok(())
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
