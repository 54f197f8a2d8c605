//! Command dispatch for LorenzRenderEngine

use web_time::Instant;

use super::command::LorenzCommand;
use super::scene::LorenzScene;
use super::LorenzRenderEngine;
use crate::input::InputEvent;

/// Apply the GPU-free part of a command to the scene.
///
/// Returns `false` for view and application commands, which the scene
/// does not own.
pub fn apply_scene_command(
    scene: &mut LorenzScene,
    command: &LorenzCommand,
    now: Instant,
) -> bool {
    match *command {
        LorenzCommand::ToggleAnimation => scene.toggle_animation(now),
        LorenzCommand::SpeedUp => scene.speed_up(),
        LorenzCommand::SlowDown => scene.slow_down(),
        LorenzCommand::SetSpeed { seconds } => scene.set_speed(seconds),
        LorenzCommand::CycleColorMode => scene.cycle_color_mode(true),
        LorenzCommand::CycleColorModeBack => scene.cycle_color_mode(false),
        LorenzCommand::SetColorMode { mode } => scene.set_color_mode(mode),
        LorenzCommand::AdjustParameter { parameter, delta } => {
            scene.set_param(parameter, delta);
        }
        LorenzCommand::StepParameter {
            parameter,
            increase,
        } => scene.step_param(parameter, increase),
        LorenzCommand::RotateView { .. }
        | LorenzCommand::DragView { .. }
        | LorenzCommand::ResetView
        | LorenzCommand::Zoom { .. }
        | LorenzCommand::SavePreset { .. }
        | LorenzCommand::LoadPreset { .. }
        | LorenzCommand::Quit => return false,
    }
    true
}

impl LorenzRenderEngine {
    /// Execute a command against the scene, the camera, or the presets
    /// directory.
    ///
    /// [`LorenzCommand::Quit`] is left to the platform layer and ignored
    /// here.
    pub fn execute(&mut self, command: &LorenzCommand) {
        log::debug!("execute {command:?}");
        if apply_scene_command(&mut self.scene, command, Instant::now()) {
            return;
        }
        match *command {
            LorenzCommand::RotateView { azimuth, elevation } => {
                self.camera_controller.rotate_steps(azimuth, elevation);
            }
            LorenzCommand::DragView { delta } => {
                self.camera_controller.drag(delta);
            }
            LorenzCommand::ResetView => self.camera_controller.reset(),
            LorenzCommand::Zoom { delta } => self.camera_controller.zoom(delta),
            LorenzCommand::SavePreset { ref name } => {
                let dir = self.presets_dir.clone();
                let _ = self.save_preset(name, &dir);
            }
            LorenzCommand::LoadPreset { ref name } => {
                let dir = self.presets_dir.clone();
                let _ = self.load_preset(name, &dir);
            }
            _ => {}
        }
    }

    /// Translate a pointer event and execute the resulting command.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<LorenzCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(&command);
        Some(command)
    }

    /// Look up a key in the bindings and execute the bound command.
    ///
    /// Returns the command so the caller can react to
    /// [`LorenzCommand::Quit`].
    pub fn handle_key_press(&mut self, key: &str) -> Option<LorenzCommand> {
        let command = self.input.handle_key_press(key)?;
        self.execute(&command);
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RevealPhase;
    use crate::lorenz::Parameter;
    use crate::options::{AnimationOptions, SimulationOptions};
    use crate::util::color::ColorMode;

    fn scene(now: Instant) -> LorenzScene {
        let simulation = SimulationOptions {
            point_count: 500,
            ..SimulationOptions::default()
        };
        LorenzScene::new(
            &simulation,
            &AnimationOptions::default(),
            ColorMode::Fade,
            now,
        )
        .unwrap()
    }

    #[test]
    fn scene_commands_are_applied() {
        let now = Instant::now();
        let mut s = scene(now);

        assert!(apply_scene_command(&mut s, &LorenzCommand::CycleColorMode, now));
        assert_eq!(s.color_mode(), ColorMode::Single);

        assert!(apply_scene_command(&mut s, &LorenzCommand::ToggleAnimation, now));
        assert_eq!(s.reveal().phase(), RevealPhase::Idle);

        let rho = s.params().rho;
        assert!(apply_scene_command(
            &mut s,
            &LorenzCommand::StepParameter {
                parameter: Parameter::Rho,
                increase: true,
            },
            now,
        ));
        assert_eq!(s.params().rho, rho + 1.0);
    }

    #[test]
    fn view_commands_are_left_to_the_camera() {
        let now = Instant::now();
        let mut s = scene(now);
        for command in [
            LorenzCommand::ResetView,
            LorenzCommand::Zoom { delta: 1.0 },
            LorenzCommand::RotateView {
                azimuth: 1.0,
                elevation: 0.0,
            },
            LorenzCommand::SavePreset {
                name: "quicksave".into(),
            },
            LorenzCommand::Quit,
        ] {
            assert!(!apply_scene_command(&mut s, &command, now));
        }
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn set_speed_is_clamped() {
        let now = Instant::now();
        let mut s = scene(now);
        assert!(apply_scene_command(
            &mut s,
            &LorenzCommand::SetSpeed { seconds: 0.1 },
            now,
        ));
        assert_eq!(s.reveal().speed_seconds(), 1.0);
    }
}
