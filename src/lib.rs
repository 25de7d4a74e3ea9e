//! holonomic_dwa - Dynamic Window Approach local planner for holonomic bases
//!
//! Once per control cycle the planner samples the velocities reachable from
//! the previous command, forward-simulates a short trajectory for each,
//! scores them against a robot-local goal and returns the best
//! `(vx, vy, omega)` command.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, Trajectory, VelocityCommand};
pub use common::{CommandSink, GoalSource, TrajectoryScorer, TransformProvider};
pub use common::{DwaError, DwaResult};
pub use path_planning::holonomic_dwa::{CycleOutcome, DwaConfig, DwaPlanner};
