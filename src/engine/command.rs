//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, or a programmatic call, is a `LorenzCommand`. Consumers build
//! commands and pass them to
//! [`LorenzRenderEngine::execute`](super::LorenzRenderEngine::execute) or
//! apply the non-GPU subset directly to a
//! [`LorenzScene`](super::scene::LorenzScene).

use glam::Vec2;

use crate::lorenz::Parameter;
use crate::util::color::ColorMode;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(LorenzCommand::ToggleAnimation);
/// engine.execute(LorenzCommand::AdjustParameter {
///     parameter: Parameter::Rho,
///     delta: 1.0,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LorenzCommand {
    // ── Animation ───────────────────────────────────────────────────
    /// Turn the progressive reveal on (restarting it) or off.
    ToggleAnimation,

    /// Shorten the reveal by one speed step (never below one second).
    SpeedUp,

    /// Lengthen the reveal by one speed step.
    SlowDown,

    /// Set the reveal duration directly.
    SetSpeed {
        /// Seconds for a full reveal; clamped to at least one.
        seconds: f64,
    },

    // ── Coloring ────────────────────────────────────────────────────
    /// Single → Rainbow → Fade → Single.
    CycleColorMode,

    /// Fade → Rainbow → Single → Fade.
    CycleColorModeBack,

    /// Select a color mode.
    SetColorMode {
        /// The mode to use.
        mode: ColorMode,
    },

    // ── Simulation ──────────────────────────────────────────────────
    /// Add `delta` to one parameter and recompute the trajectory.
    AdjustParameter {
        /// Which of σ, β, ρ.
        parameter: Parameter,
        /// Signed change.
        delta: f64,
    },

    /// Nudge one parameter by its configured key step and recompute.
    StepParameter {
        /// Which of σ, β, ρ.
        parameter: Parameter,
        /// Add the step when true, subtract it otherwise.
        increase: bool,
    },

    // ── View ────────────────────────────────────────────────────────
    /// Rotate the view by a number of angle steps.
    RotateView {
        /// Change in azimuth, in steps.
        azimuth: f32,
        /// Change in elevation, in steps.
        elevation: f32,
    },

    /// Rotate the view by a mouse drag.
    DragView {
        /// Horizontal and vertical drag delta in pixels.
        delta: Vec2,
    },

    /// Back to azimuth 0, elevation 15.
    ResetView,

    /// Shrink (positive) or grow (negative) the orthographic box.
    Zoom {
        /// Scroll amount in zoom steps.
        delta: f32,
    },

    // ── Presets ─────────────────────────────────────────────────────
    /// Save the live session as a named preset in the presets directory.
    SavePreset {
        /// File stem of the preset.
        name: String,
    },

    /// Replace the session with a named preset from the presets directory.
    LoadPreset {
        /// File stem of the preset.
        name: String,
    },

    // ── Application ─────────────────────────────────────────────────
    /// Close the viewer.
    Quit,
}
