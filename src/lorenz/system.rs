//! The Lorenz ODE system and its forward-Euler stepper.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One of the three control parameters of the Lorenz system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Prandtl number (σ).
    Sigma,
    /// Geometric factor (β).
    Beta,
    /// Rayleigh number (ρ).
    Rho,
}

impl Parameter {
    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sigma => "s",
            Self::Beta => "b",
            Self::Rho => "r",
        }
    }
}

/// The (σ, β, ρ) triple governing the ODEs.
///
/// Values are unconstrained: parameters that make the trajectory diverge
/// produce non-finite points rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// σ
    pub sigma: f64,
    /// β
    pub beta: f64,
    /// ρ
    pub rho: f64,
}

impl Default for SimulationParameters {
    /// The classic chaotic regime: σ = 10, β = 8/3, ρ = 28.
    fn default() -> Self {
        Self {
            sigma: 10.0,
            beta: 8.0 / 3.0,
            rho: 28.0,
        }
    }
}

impl SimulationParameters {
    /// Read a single parameter.
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Sigma => self.sigma,
            Parameter::Beta => self.beta,
            Parameter::Rho => self.rho,
        }
    }

    /// Add `delta` to a single parameter.
    pub fn adjust(&mut self, parameter: Parameter, delta: f64) {
        match parameter {
            Parameter::Sigma => self.sigma += delta,
            Parameter::Beta => self.beta += delta,
            Parameter::Rho => self.rho += delta,
        }
    }
}

/// The Lorenz vector field for a fixed parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzSystem {
    params: SimulationParameters,
}

impl LorenzSystem {
    /// Vector field for `params`.
    #[must_use]
    pub fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    /// Parameters this field was built from.
    #[must_use]
    pub fn params(&self) -> SimulationParameters {
        self.params
    }

    /// (dx/dt, dy/dt, dz/dt) at `state`.
    #[inline]
    #[must_use]
    pub fn derivative(&self, state: DVec3) -> DVec3 {
        let SimulationParameters { sigma, beta, rho } = self.params;
        DVec3::new(
            sigma * (state.y - state.x),
            state.x * (rho - state.z) - state.y,
            state.x * state.y - beta * state.z,
        )
    }

    /// One forward-Euler step of size `dt`.
    ///
    /// All three derivatives are taken from the pre-step `state`.
    #[inline]
    #[must_use]
    pub fn euler_step(&self, state: DVec3, dt: f64) -> DVec3 {
        let d = self.derivative(state);
        DVec3::new(
            state.x + dt * d.x,
            state.y + dt * d.y,
            state.z + dt * d.z,
        )
    }

    /// Iterator over successive Euler states, starting one step after
    /// `initial`.
    #[must_use]
    pub fn steps(&self, initial: DVec3, dt: f64) -> EulerSteps {
        EulerSteps {
            system: *self,
            state: initial,
            dt,
        }
    }
}

/// Endless iterator of forward-Euler states.
///
/// The initial condition itself is never yielded.
#[derive(Debug, Clone)]
pub struct EulerSteps {
    system: LorenzSystem,
    state: DVec3,
    dt: f64,
}

impl Iterator for EulerSteps {
    type Item = DVec3;

    #[inline]
    fn next(&mut self) -> Option<DVec3> {
        self.state = self.system.euler_step(self.state, self.dt);
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
