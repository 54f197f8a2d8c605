//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::engine::LorenzRenderEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::command::LorenzCommand;
use crate::lorenz::Parameter;

/// Preset name used by the save/load preset keys.
pub const QUICK_PRESET: &str = "quicksave";

/// Maps logical key strings to [`LorenzCommand`] variants.
///
/// Character keys use the produced text (`"s"`, `"S"`, `"+"`), so shifted
/// and unshifted letters bind separately. Named keys use the
/// `winit::keyboard::NamedKey` debug format: `"Space"`, `"Escape"`,
/// `"ArrowLeft"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`LorenzCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Toggle the progressive reveal.
    ToggleAnimation,
    /// Cycle color mode forward.
    CycleColorMode,
    /// Cycle color mode backward.
    CycleColorModeBack,
    /// Shorter reveal.
    SpeedUp,
    /// Longer reveal.
    SlowDown,
    /// σ + step.
    IncreaseSigma,
    /// σ − step.
    DecreaseSigma,
    /// β + step.
    IncreaseBeta,
    /// β − step.
    DecreaseBeta,
    /// ρ + step.
    IncreaseRho,
    /// ρ − step.
    DecreaseRho,
    /// Azimuth − angle step.
    TurnLeft,
    /// Azimuth + angle step.
    TurnRight,
    /// Elevation + angle step.
    TiltUp,
    /// Elevation − angle step.
    TiltDown,
    /// Reset view angles.
    ResetView,
    /// Shrink the view box.
    ZoomIn,
    /// Grow the view box.
    ZoomOut,
    /// Save the session as the quick preset.
    SavePreset,
    /// Load the quick preset.
    LoadPreset,
    /// Close the viewer.
    Quit,
}

impl KeyCommandTag {
    /// Convert to the corresponding [`LorenzCommand`].
    ///
    /// View rotations are expressed in angle steps; the engine scales them.
    fn to_command(self) -> LorenzCommand {
        let step = |parameter, increase| LorenzCommand::StepParameter {
            parameter,
            increase,
        };
        let rotate = |azimuth, elevation| LorenzCommand::RotateView {
            azimuth,
            elevation,
        };
        match self {
            Self::ToggleAnimation => LorenzCommand::ToggleAnimation,
            Self::CycleColorMode => LorenzCommand::CycleColorMode,
            Self::CycleColorModeBack => LorenzCommand::CycleColorModeBack,
            Self::SpeedUp => LorenzCommand::SpeedUp,
            Self::SlowDown => LorenzCommand::SlowDown,
            Self::IncreaseSigma => step(Parameter::Sigma, true),
            Self::DecreaseSigma => step(Parameter::Sigma, false),
            Self::IncreaseBeta => step(Parameter::Beta, true),
            Self::DecreaseBeta => step(Parameter::Beta, false),
            Self::IncreaseRho => step(Parameter::Rho, true),
            Self::DecreaseRho => step(Parameter::Rho, false),
            Self::TurnLeft => rotate(-1.0, 0.0),
            Self::TurnRight => rotate(1.0, 0.0),
            Self::TiltUp => rotate(0.0, 1.0),
            Self::TiltDown => rotate(0.0, -1.0),
            Self::ResetView => LorenzCommand::ResetView,
            Self::ZoomIn => LorenzCommand::Zoom { delta: 1.0 },
            Self::ZoomOut => LorenzCommand::Zoom { delta: -1.0 },
            Self::SavePreset => LorenzCommand::SavePreset {
                name: QUICK_PRESET.to_owned(),
            },
            Self::LoadPreset => LorenzCommand::LoadPreset {
                name: QUICK_PRESET.to_owned(),
            },
            Self::Quit => LorenzCommand::Quit,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Space".into(), KeyCommandTag::ToggleAnimation),
            ("c".into(), KeyCommandTag::CycleColorMode),
            ("C".into(), KeyCommandTag::CycleColorModeBack),
            ("+".into(), KeyCommandTag::SpeedUp),
            ("=".into(), KeyCommandTag::SpeedUp),
            ("-".into(), KeyCommandTag::SlowDown),
            ("_".into(), KeyCommandTag::SlowDown),
            ("s".into(), KeyCommandTag::IncreaseSigma),
            ("S".into(), KeyCommandTag::DecreaseSigma),
            ("b".into(), KeyCommandTag::IncreaseBeta),
            ("B".into(), KeyCommandTag::DecreaseBeta),
            ("r".into(), KeyCommandTag::IncreaseRho),
            ("R".into(), KeyCommandTag::DecreaseRho),
            ("ArrowLeft".into(), KeyCommandTag::TurnLeft),
            ("ArrowRight".into(), KeyCommandTag::TurnRight),
            ("ArrowUp".into(), KeyCommandTag::TiltUp),
            ("ArrowDown".into(), KeyCommandTag::TiltDown),
            ("0".into(), KeyCommandTag::ResetView),
            ("z".into(), KeyCommandTag::ZoomIn),
            ("Z".into(), KeyCommandTag::ZoomOut),
            ("F5".into(), KeyCommandTag::SavePreset),
            ("F9".into(), KeyCommandTag::LoadPreset),
            ("Escape".into(), KeyCommandTag::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<LorenzCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }

    /// Remove the binding for `key`, if any.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`LorenzCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Space") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            mouse_pos: None,
            mouse_pressed: false,
            key_bindings,
        }
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<LorenzCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw pointer event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<LorenzCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.mouse_pressed = pressed;
                None
            }
            InputEvent::MouseButton { .. } => None,
            InputEvent::Scroll { delta } => Some(LorenzCommand::Zoom { delta }),
        }
    }

    /// Cursor moved — rotate the view while dragging.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<LorenzCommand> {
        let pos = Vec2::new(x, y);
        let previous = self.mouse_pos.replace(pos)?;
        if !self.mouse_pressed {
            return None;
        }
        let delta = pos - previous;
        (delta != Vec2::ZERO).then_some(LorenzCommand::DragView { delta })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_case_selects_direction() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.lookup("r"),
            Some(LorenzCommand::StepParameter {
                parameter: Parameter::Rho,
                increase: true
            })
        );
        assert_eq!(
            keys.lookup("S"),
            Some(LorenzCommand::StepParameter {
                parameter: Parameter::Sigma,
                increase: false
            })
        );
    }

    #[test]
    fn speed_keys_have_aliases() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup("+"), Some(LorenzCommand::SpeedUp));
        assert_eq!(keys.lookup("="), Some(LorenzCommand::SpeedUp));
        assert_eq!(keys.lookup("-"), Some(LorenzCommand::SlowDown));
        assert_eq!(keys.lookup("_"), Some(LorenzCommand::SlowDown));
    }

    #[test]
    fn arrows_rotate_in_single_steps() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.lookup("ArrowUp"),
            Some(LorenzCommand::RotateView {
                azimuth: 0.0,
                elevation: 1.0
            })
        );
        assert_eq!(
            keys.lookup("ArrowLeft"),
            Some(LorenzCommand::RotateView {
                azimuth: -1.0,
                elevation: 0.0
            })
        );
    }

    #[test]
    fn function_keys_save_and_load_the_quick_preset() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.lookup("F5"),
            Some(LorenzCommand::SavePreset {
                name: QUICK_PRESET.to_owned()
            })
        );
        assert_eq!(
            keys.lookup("F9"),
            Some(LorenzCommand::LoadPreset {
                name: QUICK_PRESET.to_owned()
            })
        );
    }

    #[test]
    fn rebinding_replaces_the_old_action() {
        let mut input = InputProcessor::new();
        input.key_bindings_mut().bind("p", KeyCommandTag::ToggleAnimation);
        input.key_bindings_mut().unbind("Space");
        assert_eq!(
            input.handle_key_press("p"),
            Some(LorenzCommand::ToggleAnimation)
        );
        assert_eq!(input.handle_key_press("Space"), None);
    }

    #[test]
    fn drag_produces_view_rotation() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 }),
            Some(LorenzCommand::DragView {
                delta: Vec2::new(4.0, -3.0)
            })
        );
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 20.0, y: 7.0 }),
            None
        );
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(LorenzCommand::Zoom { delta: 2.0 })
        );
    }

    #[test]
    fn bindings_round_trip_through_toml() {
        let keys = KeyBindings::default();
        let text = toml::to_string(&keys).unwrap();
        let parsed: KeyBindings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, keys);
    }
}
