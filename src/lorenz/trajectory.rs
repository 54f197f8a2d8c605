//! Fixed-length trajectory buffer filled by forward-Euler integration.

use glam::DVec3;

use super::system::{LorenzSystem, SimulationParameters};
use crate::error::LorenzError;

/// Default number of stored points.
pub const DEFAULT_POINT_COUNT: usize = 50_000;
/// Default integration step.
pub const DEFAULT_STEP_SIZE: f64 = 0.001;

/// Step count, step size and initial condition for one integration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationConfig {
    point_count: usize,
    step_size: f64,
    initial_state: DVec3,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            step_size: DEFAULT_STEP_SIZE,
            initial_state: DVec3::ONE,
        }
    }
}

impl IntegrationConfig {
    /// Validated configuration starting from (1, 1, 1).
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::InvalidConfig`] if `point_count` is zero or
    /// `step_size` is not a positive finite number.
    pub fn new(point_count: usize, step_size: f64) -> Result<Self, LorenzError> {
        if point_count == 0 {
            return Err(LorenzError::InvalidConfig(
                "point count must be at least 1".to_owned(),
            ));
        }
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(LorenzError::InvalidConfig(format!(
                "step size must be positive and finite, got {step_size}"
            )));
        }
        Ok(Self {
            point_count,
            step_size,
            initial_state: DVec3::ONE,
        })
    }

    /// Replace the initial condition.
    #[must_use]
    pub fn with_initial_state(mut self, initial_state: DVec3) -> Self {
        self.initial_state = initial_state;
        self
    }

    /// N.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Δt.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Initial condition (never stored in the trajectory).
    #[must_use]
    pub fn initial_state(&self) -> DVec3 {
        self.initial_state
    }
}

/// The integrated path of the attractor.
///
/// Always holds exactly `config.point_count()` points once computed. Point
/// `i` is the state after `i + 1` Euler steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<DVec3>,
    params: SimulationParameters,
    config: IntegrationConfig,
}

impl Trajectory {
    /// Integrate a fresh trajectory.
    #[must_use]
    pub fn compute(params: SimulationParameters, config: IntegrationConfig) -> Self {
        let mut trajectory = Self {
            points: Vec::with_capacity(config.point_count),
            params,
            config,
        };
        trajectory.fill();
        trajectory
    }

    /// Overwrite every point using new parameters.
    ///
    /// Blocks for O(N); the buffer is reused when N is unchanged.
    pub fn recompute(&mut self, params: SimulationParameters) {
        self.params = params;
        self.fill();
    }

    /// Change N or Δt and recompute with the current parameters.
    pub fn reconfigure(&mut self, config: IntegrationConfig) {
        self.config = config;
        self.fill();
    }

    fn fill(&mut self) {
        let system = LorenzSystem::new(self.params);
        self.points.clear();
        self.points.extend(
            system
                .steps(self.config.initial_state, self.config.step_size)
                .take(self.config.point_count),
        );
    }

    /// All points, index 0 first.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// N.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Parameters the stored points were integrated with.
    #[must_use]
    pub fn params(&self) -> SimulationParameters {
        self.params
    }

    /// Integration settings the stored points were produced with.
    #[must_use]
    pub fn config(&self) -> IntegrationConfig {
        self.config
    }

    /// Axis-aligned bounds of the finite points, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        self.points
            .iter()
            .filter(|p| p.is_finite())
            .fold(None, |acc, &p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> SimulationParameters {
        SimulationParameters {
            sigma: 10.0,
            beta: 8.0 / 3.0,
            rho: 28.0,
        }
    }

    #[test]
    fn first_point_is_one_step_from_initial_condition() {
        let config = IntegrationConfig::new(10, 0.001).unwrap();
        let trajectory = Trajectory::compute(classic(), config);
        let p = trajectory.points()[0];
        assert_eq!(p.x, 1.0);
        assert!((p.y - 1.026).abs() < 1e-12);
        assert!((p.z - (1.0 + 0.001 * (1.0 - 8.0 / 3.0))).abs() < 1e-12);
        assert!((p.z - 0.998_333_333).abs() < 1e-8);
    }

    #[test]
    fn length_is_exactly_point_count() {
        for n in [1, 2, 17, 1000] {
            let config = IntegrationConfig::new(n, 0.001).unwrap();
            assert_eq!(Trajectory::compute(classic(), config).len(), n);
        }
    }

    #[test]
    fn identical_inputs_are_bitwise_identical() {
        let config = IntegrationConfig::default();
        let a = Trajectory::compute(classic(), config);
        let b = Trajectory::compute(classic(), config);
        assert!(a
            .points()
            .iter()
            .zip(b.points())
            .all(|(p, q)| p.to_array().map(f64::to_bits)
                == q.to_array().map(f64::to_bits)));
    }

    #[test]
    fn recompute_replaces_every_point() {
        let config = IntegrationConfig::new(500, 0.001).unwrap();
        let mut trajectory = Trajectory::compute(classic(), config);
        let mut params = classic();
        params.rho = 15.0;
        trajectory.recompute(params);

        let fresh = Trajectory::compute(params, config);
        assert_eq!(trajectory, fresh);
        assert_eq!(trajectory.len(), 500);
        assert_eq!(trajectory.params().rho, 15.0);
    }

    #[test]
    fn reconfigure_resizes_the_buffer() {
        let mut trajectory = Trajectory::compute(
            classic(),
            IntegrationConfig::new(100, 0.001).unwrap(),
        );
        trajectory.reconfigure(IntegrationConfig::new(250, 0.001).unwrap());
        assert_eq!(trajectory.len(), 250);
        trajectory.reconfigure(IntegrationConfig::new(3, 0.001).unwrap());
        assert_eq!(trajectory.len(), 3);
    }

    #[test]
    fn diverging_parameters_are_not_an_error() {
        let params = SimulationParameters {
            sigma: 1.0e200,
            beta: -1.0e200,
            rho: 1.0e200,
        };
        let config = IntegrationConfig::new(200, 0.001).unwrap();
        let trajectory = Trajectory::compute(params, config);
        assert_eq!(trajectory.len(), 200);
        assert!(trajectory.points().iter().any(|p| !p.is_finite()));
    }

    #[test]
    fn zero_points_is_rejected() {
        assert!(matches!(
            IntegrationConfig::new(0, 0.001),
            Err(LorenzError::InvalidConfig(_))
        ));
        assert!(IntegrationConfig::new(10, 0.0).is_err());
        assert!(IntegrationConfig::new(10, f64::NAN).is_err());
    }

    #[test]
    fn bounds_cover_the_attractor() {
        let trajectory =
            Trajectory::compute(classic(), IntegrationConfig::default());
        let (lo, hi) = trajectory.bounds().unwrap();
        assert!(hi.z > 35.0);
        assert!(lo.x < -10.0 && hi.x > 10.0);
    }
}
