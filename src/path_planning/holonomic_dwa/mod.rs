//! Dynamic Window Approach for holonomic bases
//!
//! Computes, once per control cycle, the `(vx, vy, omega)` command that best
//! drives an omnidirectional vehicle toward a robot-local goal:
//! - build the window of velocities reachable from the previous command
//! - sample it on a regular grid and forward-simulate each candidate
//! - score each trajectory against the goal
//! - pick the cheapest candidate, earliest in scan order on ties
//!
//! No obstacle or clearance term is evaluated.

pub mod config;
pub mod cost_grid;
pub mod dynamic_window;
pub mod planner;
pub mod scorer;
pub mod simulator;

pub use config::*;
pub use cost_grid::*;
pub use dynamic_window::*;
pub use planner::*;
pub use scorer::*;
pub use simulator::*;
