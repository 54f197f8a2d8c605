//! Lorenz system integration.
//!
//! [`LorenzSystem`] evaluates the vector field and takes forward-Euler
//! steps; [`Trajectory`] owns the fixed-length point buffer that the
//! renderer draws from.

pub mod system;
pub mod trajectory;

pub use system::{EulerSteps, LorenzSystem, Parameter, SimulationParameters};
pub use trajectory::{IntegrationConfig, Trajectory};
