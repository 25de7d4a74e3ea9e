//! Trajectory scoring strategies

use crate::common::{normalize_angle, Pose2D, Trajectory, TrajectoryScorer};

use super::CostWeights;

/// Squared distance between the trajectory's final position and the goal.
///
/// Orientation and speed are not scored. This is the planner's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalDistanceScorer;

impl TrajectoryScorer for GoalDistanceScorer {
    fn score(&self, trajectory: &Trajectory, goal: &Pose2D) -> f64 {
        trajectory.final_pose().position().distance_squared(&goal.position())
    }
}

/// Weighted sum of heading, distance and velocity terms.
///
/// `alpha * heading + beta * distance + gamma * velocity`, where
/// - heading: absolute wrapped angle between the final yaw and the bearing
///   from the final position to the goal
/// - distance: the [`GoalDistanceScorer`] term
/// - velocity: how far the candidate's linear speed is below `max_velocity`
#[derive(Debug, Clone, Copy)]
pub struct WeightedScorer {
    pub weights: CostWeights,
    pub max_velocity: f64,
}

impl WeightedScorer {
    pub fn new(weights: CostWeights, max_velocity: f64) -> Self {
        Self { weights, max_velocity }
    }

    pub fn heading_cost(trajectory: &Trajectory, goal: &Pose2D) -> f64 {
        let last = trajectory.final_pose();
        let bearing = (goal.y - last.y).atan2(goal.x - last.x);
        normalize_angle(bearing - last.yaw).abs()
    }

    pub fn velocity_cost(&self, trajectory: &Trajectory) -> f64 {
        (self.max_velocity - trajectory.velocity.linear_speed()).max(0.0)
    }
}

impl TrajectoryScorer for WeightedScorer {
    fn score(&self, trajectory: &Trajectory, goal: &Pose2D) -> f64 {
        self.weights.alpha * Self::heading_cost(trajectory, goal)
            + self.weights.beta * GoalDistanceScorer.score(trajectory, goal)
            + self.weights.gamma * self.velocity_cost(trajectory)
    }
}
