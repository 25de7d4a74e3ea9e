//! Common traits defining the planner's seams
//!
//! The planning cycle talks to the outside world only through
//! [`GoalSource`], [`TransformProvider`] and [`CommandSink`], and scores
//! candidates through a [`TrajectoryScorer`].

use crate::common::error::DwaResult;
use crate::common::types::*;

/// Supplies the most recent goal, expressed in the fixed (odom) frame
#[cfg_attr(test, mockall::automock)]
pub trait GoalSource {
    /// Latest goal, or `None` if no goal has been received yet
    fn latest_goal(&self) -> Option<Pose2D>;
}

/// Re-expresses a fixed-frame goal in the robot-local frame
#[cfg_attr(test, mockall::automock)]
pub trait TransformProvider {
    /// Fails with `DwaError::TransformUnavailable` when no transform is known
    fn to_robot_frame(&self, goal: &Pose2D) -> DwaResult<Pose2D>;
}

/// Receives one command per completed cycle, fire-and-forget
#[cfg_attr(test, mockall::automock)]
pub trait CommandSink {
    fn send(&mut self, command: VelocityCommand);
}

/// Scores a simulated trajectory against the robot-local goal.
///
/// Lower is better; implementations must return a non-negative cost.
pub trait TrajectoryScorer {
    fn score(&self, trajectory: &Trajectory, goal: &Pose2D) -> f64;
}

impl<T: TrajectoryScorer + ?Sized> TrajectoryScorer for &T {
    fn score(&self, trajectory: &Trajectory, goal: &Pose2D) -> f64 {
        (**self).score(trajectory, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantScorer(f64);

    impl TrajectoryScorer for ConstantScorer {
        fn score(&self, _trajectory: &Trajectory, _goal: &Pose2D) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_scorer_through_reference() {
        let scorer = ConstantScorer(2.5);
        let by_ref = &scorer;
        let traj = Trajectory::new(VelocityCommand::zero());
        assert_eq!(by_ref.score(&traj, &Pose2D::origin()), 2.5);
    }
}
