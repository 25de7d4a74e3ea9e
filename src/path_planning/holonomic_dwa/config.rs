//! Parameters for the holonomic DWA planner

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::common::{DwaError, DwaResult};

/// Upper bound on `(vx, vy, omega)` candidates in one cycle's cost grid
pub const MAX_CANDIDATES: usize = 1_000_000;

/// Upper bound on Euler steps integrated in one cycle, over all candidates
pub const MAX_INTEGRATION_STEPS: usize = 10_000_000;

/// Weights for the multi-term scorer.
///
/// Only read by [`WeightedScorer`](super::WeightedScorer); the default
/// distance-only scorer ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostWeights {
    /// Heading alignment weight
    pub alpha: f64,
    /// Goal distance weight
    pub beta: f64,
    /// Velocity magnitude weight
    pub gamma: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self { alpha: 1.0, beta: 1.0, gamma: 1.0 }
    }
}

/// Configuration for the holonomic DWA planner
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DwaConfig {
    /// Maximum linear velocity, shared by the x and y axes [m/s]
    pub max_velocity: f64,
    /// Maximum linear acceleration, shared by the x and y axes [m/s^2]
    pub max_acceleration: f64,
    /// Maximum yaw rate [rad/s]
    pub max_angular_velocity: f64,
    /// Maximum yaw acceleration [rad/s^2]
    pub max_angular_acceleration: f64,
    /// Linear velocity sampling step [m/s]
    pub velocity_resolution: f64,
    /// Yaw rate sampling step [rad/s]
    pub angular_velocity_resolution: f64,
    /// Simulation horizon [s]
    pub simulate_time: f64,
    /// Integration timestep [s]
    pub dt: f64,
    /// Time over which the acceleration limits are applied to build the window [s]
    pub control_interval: f64,
    /// Distance under which the goal counts as reached [m]
    pub goal_xy_tolerance: f64,
    /// Configured but not compared against by the arrival check [rad]
    pub goal_yaw_tolerance: f64,
    pub weights: CostWeights,
}

impl Default for DwaConfig {
    fn default() -> Self {
        Self {
            max_velocity: 0.5,
            max_acceleration: 1.0,
            max_angular_velocity: 1.0,
            max_angular_acceleration: 2.0,
            velocity_resolution: 0.05,
            angular_velocity_resolution: 0.1,
            simulate_time: 1.0,
            dt: 0.01,
            control_interval: 0.1,
            goal_xy_tolerance: 0.05,
            goal_yaw_tolerance: 0.1,
            weights: CostWeights::default(),
        }
    }
}

impl DwaConfig {
    /// Parse a config from TOML text; missing keys take their default value
    pub fn from_toml_str(text: &str) -> DwaResult<Self> {
        let config: DwaConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML parameter file
    pub fn load<P: AsRef<Path>>(path: P) -> DwaResult<Self> {
        let text = read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Number of integration steps per trajectory
    pub fn step_time(&self) -> usize {
        (self.simulate_time / self.dt).floor() as usize
    }

    /// Reject parameters that would produce an empty or malformed cost grid
    pub fn validate(&self) -> DwaResult<()> {
        let all = [
            ("max_velocity", self.max_velocity),
            ("max_acceleration", self.max_acceleration),
            ("max_angular_velocity", self.max_angular_velocity),
            ("max_angular_acceleration", self.max_angular_acceleration),
            ("velocity_resolution", self.velocity_resolution),
            ("angular_velocity_resolution", self.angular_velocity_resolution),
            ("simulate_time", self.simulate_time),
            ("dt", self.dt),
            ("control_interval", self.control_interval),
            ("goal_xy_tolerance", self.goal_xy_tolerance),
            ("goal_yaw_tolerance", self.goal_yaw_tolerance),
            ("weights.alpha", self.weights.alpha),
            ("weights.beta", self.weights.beta),
            ("weights.gamma", self.weights.gamma),
        ];
        if let Some((name, value)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be finite, got {}", name, value)));
        }

        let strictly_positive = [
            ("velocity_resolution", self.velocity_resolution),
            ("angular_velocity_resolution", self.angular_velocity_resolution),
            ("simulate_time", self.simulate_time),
            ("dt", self.dt),
            ("control_interval", self.control_interval),
        ];
        for (name, value) in strictly_positive.iter() {
            if *value <= 0.0 {
                return Err(invalid(format!("{} must be > 0, got {}", name, value)));
            }
        }

        let non_negative = [
            ("max_velocity", self.max_velocity),
            ("max_acceleration", self.max_acceleration),
            ("max_angular_velocity", self.max_angular_velocity),
            ("max_angular_acceleration", self.max_angular_acceleration),
            ("goal_xy_tolerance", self.goal_xy_tolerance),
            ("goal_yaw_tolerance", self.goal_yaw_tolerance),
            ("weights.alpha", self.weights.alpha),
            ("weights.beta", self.weights.beta),
            ("weights.gamma", self.weights.gamma),
        ];
        for (name, value) in non_negative.iter() {
            if *value < 0.0 {
                return Err(invalid(format!("{} must be >= 0, got {}", name, value)));
            }
        }

        let steps = (self.simulate_time / self.dt).floor();
        if steps > MAX_INTEGRATION_STEPS as f64 {
            return Err(invalid(format!(
                "simulate_time / dt = {} exceeds {} steps",
                steps, MAX_INTEGRATION_STEPS
            )));
        }
        if self.step_time() == 0 {
            return Err(invalid(format!(
                "simulate_time ({}) is shorter than one dt ({})",
                self.simulate_time, self.dt
            )));
        }

        let candidates = self.max_candidates().ok_or_else(|| {
            invalid(format!(
                "velocity resolutions ({}, {}) give more than {} candidates",
                self.velocity_resolution, self.angular_velocity_resolution, MAX_CANDIDATES
            ))
        })?;
        match candidates.checked_mul(self.step_time()) {
            Some(work) if work <= MAX_INTEGRATION_STEPS => Ok(()),
            _ => Err(invalid(format!(
                "{} candidates x {} steps exceeds {} integration steps per cycle",
                candidates,
                self.step_time(),
                MAX_INTEGRATION_STEPS
            ))),
        }
    }

    /// Largest cost grid any dynamic window can produce under these limits,
    /// or `None` past [`MAX_CANDIDATES`].
    ///
    /// A window axis never spans more than `2 * control_interval * max_accel`
    /// nor more than `2 * max`.
    pub fn max_candidates(&self) -> Option<usize> {
        let linear = axis_sample_bound(
            self.control_interval,
            self.max_acceleration,
            self.max_velocity,
            self.velocity_resolution,
        )?;
        let angular = axis_sample_bound(
            self.control_interval,
            self.max_angular_acceleration,
            self.max_angular_velocity,
            self.angular_velocity_resolution,
        )?;
        linear
            .checked_mul(linear)?
            .checked_mul(angular)
            .filter(|n| *n <= MAX_CANDIDATES)
    }
}

fn axis_sample_bound(interval: f64, max_accel: f64, max_abs: f64, resolution: f64) -> Option<usize> {
    let span = (2.0 * interval * max_accel).min(2.0 * max_abs);
    let count = (span / resolution).floor() + 1.0;
    if count.is_finite() && count <= MAX_CANDIDATES as f64 {
        Some(count as usize)
    } else {
        None
    }
}

fn invalid(msg: String) -> DwaError {
    DwaError::InvalidConfiguration(msg)
}
