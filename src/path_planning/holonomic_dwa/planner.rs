//! One planning cycle per control tick
//!
//! A cycle reads the latest goal, expresses it in the robot frame, builds the
//! dynamic window around the previous command, scores every candidate, picks
//! the cheapest one and hands it to the command sink. Cycles never overlap;
//! the only state carried between them is the previously emitted command.

use log::{debug, info, warn};

use crate::common::{
    CommandSink, DwaError, DwaResult, GoalSource, Pose2D, TrajectoryScorer, TransformProvider,
    VelocityCommand,
};

use super::{build_cost_grid, DwaConfig, DynamicWindow, GoalDistanceScorer};

/// What a call to [`DwaPlanner::run_cycle`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// A command was computed and sent
    Emitted(VelocityCommand),
    /// No goal has been received yet; nothing sent
    NoGoal,
    /// The goal could not be transformed this tick; nothing sent
    Skipped,
}

/// Holonomic Dynamic Window Approach local planner
pub struct DwaPlanner<S = GoalDistanceScorer> {
    config: DwaConfig,
    scorer: S,
    previous: VelocityCommand,
}

impl DwaPlanner<GoalDistanceScorer> {
    /// Planner scoring by distance to the goal only
    pub fn new(config: DwaConfig) -> DwaResult<Self> {
        Self::with_scorer(config, GoalDistanceScorer)
    }
}

impl<S: TrajectoryScorer> DwaPlanner<S> {
    /// Validates `config`; an invalid configuration never reaches a cycle
    pub fn with_scorer(config: DwaConfig, scorer: S) -> DwaResult<Self> {
        config.validate()?;
        Ok(Self { config, scorer, previous: VelocityCommand::zero() })
    }

    pub fn config(&self) -> &DwaConfig {
        &self.config
    }

    /// Command the next window will be built around
    pub fn previous_command(&self) -> VelocityCommand {
        self.previous
    }

    /// Forget the previous command, e.g. after the base was stopped externally
    pub fn reset(&mut self) {
        self.previous = VelocityCommand::zero();
    }

    /// Compute the next command for a goal already in the robot-local frame.
    ///
    /// When the goal is within `goal_xy_tolerance` of the robot, the linear
    /// part of the selected command is zeroed and the yaw rate is passed
    /// through as selected. `goal_yaw_tolerance` is not consulted.
    pub fn plan(&mut self, goal: &Pose2D) -> DwaResult<VelocityCommand> {
        let window = DynamicWindow::compute(&self.previous, &self.config);
        debug!("dynamic window: {:?}", window);

        let grid = build_cost_grid(&window, &self.config, goal, &self.scorer);
        let selection = grid.select()?;
        debug!(
            "selected {:?} cost {:.6} -> {:?}",
            selection.index, selection.cost, selection.command
        );

        let mut command = selection.command;
        if goal.distance_to_origin() < self.config.goal_xy_tolerance {
            info!("goal reached, stopping linear motion");
            command = command.with_linear_zeroed();
        }

        self.previous = command;
        Ok(command)
    }

    /// Run one full cycle against the external collaborators.
    ///
    /// A `TransformUnavailable` failure skips the cycle: nothing is sent and
    /// the previous command is kept for the next window. Other errors are
    /// returned to the caller.
    pub fn run_cycle<G, T, C>(
        &mut self,
        goals: &G,
        transform: &T,
        sink: &mut C,
    ) -> DwaResult<CycleOutcome>
    where
        G: GoalSource + ?Sized,
        T: TransformProvider + ?Sized,
        C: CommandSink + ?Sized,
    {
        let goal = match goals.latest_goal() {
            Some(goal) => goal,
            None => {
                debug!("no goal received yet");
                return Ok(CycleOutcome::NoGoal);
            }
        };

        let local_goal = match transform.to_robot_frame(&goal) {
            Ok(local) => local,
            Err(DwaError::TransformUnavailable(reason)) => {
                warn!("skipping cycle, transform unavailable: {}", reason);
                return Ok(CycleOutcome::Skipped);
            }
            Err(e) => return Err(e),
        };
        debug!("local goal: {:?}", local_goal);

        let command = self.plan(&local_goal)?;
        sink.send(command);
        debug!("v: {}, {}, {}", command.vx, command.vy, command.omega);
        Ok(CycleOutcome::Emitted(command))
    }
}
