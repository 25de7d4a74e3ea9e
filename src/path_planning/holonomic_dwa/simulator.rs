//! Candidate discretization and forward simulation
//!
//! Every cell of the regular `(vx, vy, omega)` grid over the dynamic window
//! is integrated with forward Euler for `step_time` steps from the origin
//! pose and scored straight away, so only one trajectory is alive at a time.

use itertools::iproduct;
use log::debug;
use nalgebra::{Rotation2, Vector2};

use crate::common::{Pose2D, Trajectory, TrajectoryScorer, VelocityCommand};

use super::{AxisWindow, CostGrid, DwaConfig, DynamicWindow};

/// Regularly spaced samples along one velocity axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSamples {
    pub min: f64,
    pub resolution: f64,
    pub count: usize,
}

impl AxisSamples {
    pub fn new(min: f64, resolution: f64, count: usize) -> Self {
        Self { min, resolution, count }
    }

    /// `floor(span / resolution) + 1` samples starting at the window minimum.
    ///
    /// The last sample can fall short of `window.max` when the span is not a
    /// multiple of the resolution. `resolution` must be positive.
    pub fn over(window: &AxisWindow, resolution: f64) -> Self {
        let count = (window.span() / resolution).floor().max(0.0) as usize + 1;
        Self { min: window.min, resolution, count }
    }

    pub fn value(&self, index: usize) -> f64 {
        self.min + index as f64 * self.resolution
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.value(i))
    }
}

/// Step a pose forward by `dt` under a body-frame holonomic velocity.
///
/// The body velocity is rotated by the yaw at the start of the step; yaw is
/// not wrapped.
pub fn motion(pose: &Pose2D, cmd: &VelocityCommand, dt: f64) -> Pose2D {
    let yaw = pose.yaw;
    let delta = Rotation2::new(yaw) * Vector2::new(cmd.vx, cmd.vy) * dt;
    Pose2D {
        x: pose.x + delta.x,
        y: pose.y + delta.y,
        yaw: yaw + cmd.omega * dt,
    }
}

/// Simulate one candidate over the horizon, starting at the origin.
///
/// Returns `step_time + 1` poses.
pub fn simulate(cmd: &VelocityCommand, config: &DwaConfig) -> Trajectory {
    let steps = config.step_time();
    let mut trajectory = Trajectory::with_capacity(*cmd, steps + 1);
    let mut pose = Pose2D::origin();
    for _ in 0..steps {
        pose = motion(&pose, cmd, config.dt);
        trajectory.push(pose);
    }
    trajectory
}

/// Simulate and score every candidate of the window.
///
/// Iteration order is vx outer, vy middle, omega inner.
pub fn build_cost_grid<S: TrajectoryScorer>(
    window: &DynamicWindow,
    config: &DwaConfig,
    goal: &Pose2D,
    scorer: &S,
) -> CostGrid {
    let mut grid = CostGrid::new(
        AxisSamples::over(&window.vx, config.velocity_resolution),
        AxisSamples::over(&window.vy, config.velocity_resolution),
        AxisSamples::over(&window.omega, config.angular_velocity_resolution),
    );
    let (nx, ny, nw) = grid.dims();
    debug!(
        "generating {}x{}x{} candidates, {} steps each",
        nx, ny, nw, config.step_time()
    );

    for (i, j, k) in iproduct!(0..nx, 0..ny, 0..nw) {
        let cmd = grid.command_at(i, j, k);
        let trajectory = simulate(&cmd, config);
        grid.set(i, j, k, scorer.score(&trajectory, goal));
    }
    grid
}
