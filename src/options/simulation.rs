use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LorenzError;
use crate::lorenz::trajectory::{DEFAULT_POINT_COUNT, DEFAULT_STEP_SIZE};
use crate::lorenz::{IntegrationConfig, Parameter, SimulationParameters};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Simulation", inline)]
#[serde(default)]
/// Lorenz parameters, integration settings, and per-keypress deltas.
pub struct SimulationOptions {
    /// σ
    #[schemars(title = "Sigma", extend("step" = 0.5))]
    pub sigma: f64,
    /// β
    #[schemars(title = "Beta", extend("step" = 0.1))]
    pub beta: f64,
    /// ρ
    #[schemars(title = "Rho", extend("step" = 1.0))]
    pub rho: f64,
    /// Starting state; not part of the stored trajectory.
    #[schemars(skip)]
    pub initial_state: [f64; 3],
    /// Number of integrated points (N).
    #[schemars(title = "Points", range(min = 1))]
    pub point_count: usize,
    /// Euler step (Δt).
    #[schemars(skip)]
    pub step_size: f64,
    /// Amount σ changes per key press.
    #[schemars(skip)]
    pub sigma_step: f64,
    /// Amount β changes per key press.
    #[schemars(skip)]
    pub beta_step: f64,
    /// Amount ρ changes per key press.
    #[schemars(skip)]
    pub rho_step: f64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            beta: 2.6666,
            rho: 28.0,
            initial_state: [1.0, 1.0, 1.0],
            point_count: DEFAULT_POINT_COUNT,
            step_size: DEFAULT_STEP_SIZE,
            sigma_step: 0.5,
            beta_step: 0.1,
            rho_step: 1.0,
        }
    }
}

impl SimulationOptions {
    /// The configured (σ, β, ρ).
    #[must_use]
    pub fn params(&self) -> SimulationParameters {
        SimulationParameters {
            sigma: self.sigma,
            beta: self.beta,
            rho: self.rho,
        }
    }

    /// Validated integration settings.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::InvalidConfig`] for a zero point count or a
    /// non-positive step.
    pub fn integration(&self) -> Result<IntegrationConfig, LorenzError> {
        Ok(IntegrationConfig::new(self.point_count, self.step_size)?
            .with_initial_state(DVec3::from_array(self.initial_state)))
    }

    /// Key-press delta for `parameter`.
    #[must_use]
    pub fn step(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Sigma => self.sigma_step,
            Parameter::Beta => self.beta_step,
            Parameter::Rho => self.rho_step,
        }
    }
}
