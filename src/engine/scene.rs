//! GPU-free visualization state.
//!
//! [`LorenzScene`] is the single context object the frame loop mutates:
//! the parameters, the trajectory computed from them, the reveal
//! animation, and the color mode. Every mutation that touches the
//! parameters recomputes the whole trajectory before returning, so a
//! render never sees new parameters paired with stale points.

use glam::DVec3;
use web_time::Instant;

use crate::animation::{RevealAnimation, RevealPhase};
use crate::error::LorenzError;
use crate::lorenz::{Parameter, SimulationParameters, Trajectory};
use crate::options::{AnimationOptions, SimulationOptions};
use crate::util::color::{self, ColorMode};

/// Parameters, trajectory, reveal, and coloring for one session.
#[derive(Debug, Clone)]
pub struct LorenzScene {
    trajectory: Trajectory,
    reveal: RevealAnimation,
    color_mode: ColorMode,
    simulation: SimulationOptions,
    speed_step: f64,
    /// Bumped on every recompute so renderers know to re-upload.
    generation: u64,
}

impl LorenzScene {
    /// Integrate the initial trajectory and start the reveal at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::InvalidConfig`] for an unusable point count or
    /// step size.
    pub fn new(
        simulation: &SimulationOptions,
        animation: &AnimationOptions,
        color_mode: ColorMode,
        now: Instant,
    ) -> Result<Self, LorenzError> {
        let config = simulation.integration()?;
        let trajectory = Trajectory::compute(simulation.params(), config);
        log::info!(
            "computed {} points (s={} b={} r={})",
            trajectory.len(),
            simulation.sigma,
            simulation.beta,
            simulation.rho
        );
        Ok(Self {
            trajectory,
            reveal: RevealAnimation::new(
                animation.enabled,
                animation.speed_seconds,
                now,
            ),
            color_mode,
            simulation: simulation.clone(),
            speed_step: animation.speed_step,
            generation: 0,
        })
    }

    // ── Trajectory ──────────────────────────────────────────────────────

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> SimulationParameters {
        self.trajectory.params()
    }

    /// The computed trajectory.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// N.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.trajectory.len()
    }

    /// Increments whenever the trajectory is recomputed.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the parameters and synchronously recompute every point.
    pub fn recompute(&mut self, params: SimulationParameters) -> &Trajectory {
        let started = Instant::now();
        self.trajectory.recompute(params);
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "recomputed {} points in {:.2?}",
            self.trajectory.len(),
            started.elapsed()
        );
        &self.trajectory
    }

    /// Add `delta` to one parameter and recompute.
    pub fn set_param(&mut self, parameter: Parameter, delta: f64) {
        let mut params = self.params();
        params.adjust(parameter, delta);
        let _ = self.recompute(params);
        log::info!(
            "{} = {:.4} (s={:.2} b={:.4} r={:.2})",
            parameter.label(),
            params.get(parameter),
            params.sigma,
            params.beta,
            params.rho
        );
    }

    /// Move one parameter by its configured key step and recompute.
    pub fn step_param(&mut self, parameter: Parameter, increase: bool) {
        let step = self.simulation.step(parameter);
        self.set_param(parameter, if increase { step } else { -step });
    }

    // ── Animation ───────────────────────────────────────────────────────

    /// The reveal controller.
    #[must_use]
    pub fn reveal(&self) -> &RevealAnimation {
        &self.reveal
    }

    /// Advance the reveal to `now`; returns the visible count.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.reveal.tick(now, self.trajectory.len())
    }

    /// Enable (restarting from zero) or disable the reveal.
    pub fn toggle_animation(&mut self, now: Instant) {
        self.reveal.toggle(now);
        log::info!(
            "animation {}",
            if self.reveal.is_enabled() { "on" } else { "off" }
        );
    }

    /// Set the reveal duration (clamped to at least one second).
    pub fn set_speed(&mut self, seconds: f64) {
        self.reveal.set_speed(seconds);
    }

    /// Shorter reveal by one step.
    pub fn speed_up(&mut self) {
        self.set_speed(self.reveal.speed_seconds() - self.speed_step);
    }

    /// Longer reveal by one step.
    pub fn slow_down(&mut self) {
        self.set_speed(self.reveal.speed_seconds() + self.speed_step);
    }

    /// Points the renderer should draw this frame.
    #[must_use]
    pub fn visible_points(&self) -> &[DVec3] {
        let n = self.reveal.points_to_draw(self.trajectory.len());
        &self.trajectory.points()[..n]
    }

    // ── Color ───────────────────────────────────────────────────────────

    /// Active color mode.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Select a color mode.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    /// Step through the color modes.
    pub fn cycle_color_mode(&mut self, forward: bool) {
        self.color_mode = if forward {
            self.color_mode.next()
        } else {
            self.color_mode.previous()
        };
    }

    /// Color of the segment starting at `index`, relative to the full
    /// trajectory length.
    #[must_use]
    pub fn color_for(&self, index: usize) -> [f32; 3] {
        color::color_for(index, self.trajectory.len(), self.color_mode)
    }

    // ── Status ──────────────────────────────────────────────────────────

    /// One-line summary of animation, coloring, and parameters.
    #[must_use]
    pub fn status_line(&self) -> String {
        let n = self.trajectory.len();
        let params = self.params();
        let progress = match self.reveal.phase() {
            RevealPhase::Idle => String::new(),
            RevealPhase::Running | RevealPhase::Complete => format!(
                " | Progress: {}/{n} points ({:.0}%)",
                self.reveal.visible_count(),
                self.reveal.progress(n) * 100.0
            ),
        };
        format!(
            "Animation: {} | Speed: {:.1}s | Color: {}{progress} | Params: s={:.1} b={:.2} r={:.1}",
            if self.reveal.is_enabled() { "ON" } else { "OFF" },
            self.reveal.speed_seconds(),
            self.color_mode,
            params.sigma,
            params.beta,
            params.rho,
        )
    }
}
