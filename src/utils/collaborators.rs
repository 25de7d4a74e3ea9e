//! Ready-made planner collaborators
//!
//! - [`LatestGoal`]: last-value-wins goal mailbox shared with a goal producer
//! - [`OdomTransform`]: odom -> robot frame transform fed with the robot pose
//! - [`RecordingSink`]: command sink that keeps what it was sent

use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::{
    CommandSink, DwaError, DwaResult, GoalSource, Pose2D, TransformProvider, VelocityCommand,
};

/// Single-slot goal mailbox.
///
/// Clones share the slot. A publish replaces the whole value, a read copies
/// it out; there is no queue.
#[derive(Debug, Clone, Default)]
pub struct LatestGoal {
    slot: Arc<Mutex<Option<Pose2D>>>,
}

impl LatestGoal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, goal: Pose2D) {
        *self.slot.lock() = Some(goal);
    }

    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}

impl GoalSource for LatestGoal {
    fn latest_goal(&self) -> Option<Pose2D> {
        *self.slot.lock()
    }
}

/// Transform from the fixed odom frame into the robot frame.
///
/// Holds the robot pose in odom as last reported by odometry; clones share
/// it. Until a pose has been reported every lookup fails with
/// `TransformUnavailable`.
#[derive(Debug, Clone, Default)]
pub struct OdomTransform {
    robot_pose: Arc<Mutex<Option<Pose2D>>>,
}

impl OdomTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_robot_pose(&self, pose: Pose2D) {
        *self.robot_pose.lock() = Some(pose);
    }

    pub fn invalidate(&self) {
        *self.robot_pose.lock() = None;
    }

    pub fn robot_pose(&self) -> Option<Pose2D> {
        *self.robot_pose.lock()
    }
}

impl TransformProvider for OdomTransform {
    fn to_robot_frame(&self, goal: &Pose2D) -> DwaResult<Pose2D> {
        let robot = self.robot_pose().ok_or_else(|| {
            DwaError::TransformUnavailable("no robot pose in odom frame yet".to_string())
        })?;
        let local = robot.to_isometry().inverse() * goal.to_isometry();
        Ok(Pose2D::from_isometry(&local))
    }
}

/// Command sink recording every command it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<VelocityCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[VelocityCommand] {
        &self.commands
    }

    pub fn last(&self) -> Option<VelocityCommand> {
        self.commands.last().copied()
    }
}

impl CommandSink for RecordingSink {
    fn send(&mut self, command: VelocityCommand) {
        self.commands.push(command);
    }
}
