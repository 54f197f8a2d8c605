//! Options methods for LorenzRenderEngine

use std::path::{Path, PathBuf};

use web_time::Instant;

use super::scene::LorenzScene;
use super::LorenzRenderEngine;
use crate::camera::core::OrthoCamera;
use crate::error::LorenzError;
use crate::options::Options;
use crate::renderer::axes;

/// Fold the live session state back into a copy of `base`.
///
/// Parameters, reveal speed and enablement, color mode and view angles are
/// the values the user changes interactively; everything else comes from
/// `base` unchanged.
#[must_use]
pub fn snapshot_options(
    base: &Options,
    scene: &LorenzScene,
    camera: &OrthoCamera,
) -> Options {
    let mut options = base.clone();
    let params = scene.params();
    options.simulation.sigma = params.sigma;
    options.simulation.beta = params.beta;
    options.simulation.rho = params.rho;
    options.animation.enabled = scene.reveal().is_enabled();
    options.animation.speed_seconds = scene.reveal().speed_seconds();
    options.display.color_mode = scene.color_mode();
    options.camera.azimuth = camera.azimuth;
    options.camera.elevation = camera.elevation;
    options.camera.dim = camera.dim;
    options
}

/// File backing the preset `name` in `presets_dir`.
#[must_use]
pub fn preset_path(presets_dir: &Path, name: &str) -> PathBuf {
    presets_dir.join(format!("{name}.toml"))
}

impl LorenzRenderEngine {
    /// Options the engine was started with or last had applied.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current session state expressed as options.
    pub fn current_options(&self) -> Options {
        snapshot_options(&self.options, &self.scene, &self.camera_controller.camera)
    }

    /// Replace options, rebuilding the scene and camera from them.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::InvalidConfig`] and leaves the engine
    /// untouched if the options fail validation.
    pub fn set_options(&mut self, new: Options) -> Result<(), LorenzError> {
        new.validate()?;
        self.scene = LorenzScene::new(
            &new.simulation,
            &new.animation,
            new.display.color_mode,
            Instant::now(),
        )?;
        self.uploaded = None;

        let width = self.context.config.width;
        let height = self.context.config.height;
        self.camera_controller.apply_options(&new.camera);
        self.camera_controller.resize(width, height);

        self.axes_renderer
            .upload(&self.context, &axes::axis_vertices(new.display.axis_color));
        *self.input.key_bindings_mut() = new.keybindings.clone();
        self.options = new;
        Ok(())
    }

    /// Load a named preset from `presets_dir`. Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = preset_path(presets_dir, name);
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("loaded preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current session state as a named preset. Returns true on
    /// success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = preset_path(presets_dir, name);
        match self.current_options().save(&path) {
            Ok(()) => {
                log::info!("saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("failed to save preset '{name}': {e}");
                false
            }
        }
    }

    /// Name of the preset most recently loaded or saved.
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Directory used by [`LorenzCommand::SavePreset`] and
    /// [`LorenzCommand::LoadPreset`].
    ///
    /// [`LorenzCommand::SavePreset`]: super::command::LorenzCommand::SavePreset
    /// [`LorenzCommand::LoadPreset`]: super::command::LorenzCommand::LoadPreset
    pub fn set_presets_dir(&mut self, dir: impl Into<PathBuf>) {
        self.presets_dir = dir.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply_scene_command;
    use crate::engine::command::LorenzCommand;
    use crate::lorenz::Parameter;
    use crate::util::color::ColorMode;

    #[test]
    fn snapshot_captures_interactive_changes() {
        let now = Instant::now();
        let mut base = Options::default();
        base.simulation.point_count = 300;
        let mut scene = LorenzScene::new(
            &base.simulation,
            &base.animation,
            base.display.color_mode,
            now,
        )
        .unwrap();
        let mut camera = OrthoCamera::new(&base.camera, 1.0);

        for command in [
            LorenzCommand::CycleColorModeBack,
            LorenzCommand::SlowDown,
            LorenzCommand::AdjustParameter {
                parameter: Parameter::Sigma,
                delta: 2.0,
            },
        ] {
            let _ = apply_scene_command(&mut scene, &command, now);
        }
        camera.rotate(10.0, 0.0);

        let snap = snapshot_options(&base, &scene, &camera);
        assert_eq!(snap.display.color_mode, ColorMode::Rainbow);
        assert_eq!(snap.animation.speed_seconds, 21.0);
        assert_eq!(snap.simulation.sigma, 12.0);
        assert_eq!(snap.simulation.point_count, 300);
        assert_eq!(snap.camera.azimuth, 10.0);
    }

    #[test]
    fn saved_snapshot_loads_back_as_a_preset() {
        let now = Instant::now();
        let base = Options::default();
        let mut scene = LorenzScene::new(
            &base.simulation,
            &base.animation,
            base.display.color_mode,
            now,
        )
        .unwrap();
        let mut camera = OrthoCamera::new(&base.camera, 1.0);
        let _ = apply_scene_command(
            &mut scene,
            &LorenzCommand::StepParameter {
                parameter: Parameter::Rho,
                increase: true,
            },
            now,
        );
        let _ = apply_scene_command(&mut scene, &LorenzCommand::ToggleAnimation, now);
        camera.rotate(0.0, -5.0);

        let dir = std::env::temp_dir()
            .join(format!("lorenz-viz-presets-{}", std::process::id()));
        let snap = snapshot_options(&base, &scene, &camera);
        let path = preset_path(&dir, "quicksave");
        snap.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, snap);
        assert_eq!(loaded.simulation.rho, 29.0);
        assert!(!loaded.animation.enabled);
        assert_eq!(loaded.camera.elevation, 10.0);
        assert_eq!(Options::list_presets(&dir), vec!["quicksave".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
