use holonomic_dwa::path_planning::holonomic_dwa::{build_cost_grid, DynamicWindow, GoalDistanceScorer, WeightedScorer};
use holonomic_dwa::utils::{LatestGoal, OdomTransform, RecordingSink};
use holonomic_dwa::{CycleOutcome, DwaConfig, DwaError, DwaPlanner, Pose2D, VelocityCommand};

fn generous_config() -> DwaConfig {
    DwaConfig {
        max_velocity: 1.0,
        max_acceleration: 2.0,
        max_angular_velocity: 1.0,
        max_angular_acceleration: 0.5,
        velocity_resolution: 0.25,
        angular_velocity_resolution: 0.05,
        simulate_time: 1.0,
        dt: 0.1,
        control_interval: 0.1,
        goal_xy_tolerance: 0.05,
        ..Default::default()
    }
}

#[test]
fn test_goal_ahead_drives_forward() {
    let goals = LatestGoal::new();
    let odom = OdomTransform::new();
    let mut sink = RecordingSink::new();
    let mut planner = DwaPlanner::new(generous_config()).unwrap();

    odom.set_robot_pose(Pose2D::origin());
    goals.publish(Pose2D::new(1.0, 0.0, 0.0));

    let outcome = planner.run_cycle(&goals, &odom, &mut sink).unwrap();
    let cmd = match outcome {
        CycleOutcome::Emitted(cmd) => cmd,
        other => panic!("expected a command, got {:?}", other),
    };
    assert!(cmd.vx > 0.0);
    // closest lateral / angular samples to zero for this window and resolution
    assert!(cmd.vy.abs() <= 0.05 + 1e-9);
    assert!(cmd.omega.abs() <= 0.05 + 1e-9);
    assert_eq!(sink.commands(), &[cmd]);
}

#[test]
fn test_goal_within_tolerance_stops_linear_motion() {
    let goals = LatestGoal::new();
    let odom = OdomTransform::new();
    let mut sink = RecordingSink::new();
    let mut planner = DwaPlanner::new(generous_config()).unwrap();

    odom.set_robot_pose(Pose2D::new(2.0, 1.0, 0.0));
    goals.publish(Pose2D::new(2.01, 1.0, 0.0));

    planner.run_cycle(&goals, &odom, &mut sink).unwrap();
    let cmd = sink.last().unwrap();
    assert_eq!((cmd.vx, cmd.vy), (0.0, 0.0));

    // the yaw rate is the one the search selected, not forced to zero
    let mut reference = DwaPlanner::new(generous_config()).unwrap();
    let unclamped = {
        let cfg = reference.config().clone();
        let window = DynamicWindow::compute(&VelocityCommand::zero(), &cfg);
        let grid = build_cost_grid(&window, &cfg, &Pose2D::new(0.01, 0.0, 0.0), &GoalDistanceScorer);
        grid.select().unwrap().command
    };
    assert_eq!(cmd.omega, unclamped.omega);
    assert_eq!(reference.plan(&Pose2D::new(0.01, 0.0, 0.0)).unwrap().omega, unclamped.omega);
}

#[test]
fn test_transform_failure_skips_cycle() {
    let goals = LatestGoal::new();
    let odom = OdomTransform::new();
    let mut sink = RecordingSink::new();
    let mut planner = DwaPlanner::new(generous_config()).unwrap();

    goals.publish(Pose2D::new(1.0, 0.0, 0.0));
    odom.set_robot_pose(Pose2D::origin());
    planner.run_cycle(&goals, &odom, &mut sink).unwrap();
    let previous = planner.previous_command();

    odom.invalidate();
    let outcome = planner.run_cycle(&goals, &odom, &mut sink).unwrap();
    assert_eq!(outcome, CycleOutcome::Skipped);
    assert_eq!(sink.commands().len(), 1);
    assert_eq!(planner.previous_command(), previous);

    // next tick recovers and builds its window around the retained command
    odom.set_robot_pose(Pose2D::origin());
    let outcome = planner.run_cycle(&goals, &odom, &mut sink).unwrap();
    let cmd = match outcome {
        CycleOutcome::Emitted(cmd) => cmd,
        other => panic!("expected a command, got {:?}", other),
    };
    let window = DynamicWindow::compute(&previous, planner.config());
    assert!(window.contains(&cmd));
    assert_eq!(sink.commands().len(), 2);
}

#[test]
fn test_no_goal_no_command() {
    let goals = LatestGoal::new();
    let odom = OdomTransform::new();
    odom.set_robot_pose(Pose2D::origin());
    let mut sink = RecordingSink::new();
    let mut planner = DwaPlanner::new(generous_config()).unwrap();

    let outcome = planner.run_cycle(&goals, &odom, &mut sink).unwrap();
    assert_eq!(outcome, CycleOutcome::NoGoal);
    assert!(sink.commands().is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    let goal = Pose2D::new(0.7, -0.4, 0.0);
    let run = || {
        let mut planner = DwaPlanner::new(generous_config()).unwrap();
        (0..5).map(|_| planner.plan(&goal).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_invalid_config_rejected_before_any_cycle() {
    let cfg = DwaConfig { angular_velocity_resolution: 0.0, ..generous_config() };
    assert!(matches!(DwaPlanner::new(cfg), Err(DwaError::InvalidConfiguration(_))));

    let cfg = DwaConfig { dt: 0.0, ..generous_config() };
    assert!(matches!(
        DwaPlanner::with_scorer(cfg, GoalDistanceScorer),
        Err(DwaError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_closed_loop_reaches_goal() {
    let cfg = DwaConfig { dt: 0.05, ..generous_config() };
    let goals = LatestGoal::new();
    let odom = OdomTransform::new();
    let mut sink = RecordingSink::new();
    let mut planner = DwaPlanner::new(cfg.clone()).unwrap();

    let goal = Pose2D::new(1.5, 0.5, 0.0);
    goals.publish(goal);
    let mut pose = Pose2D::origin();
    let start_distance = pose.position().distance(&goal.position());

    for _ in 0..30 {
        odom.set_robot_pose(pose);
        if let CycleOutcome::Emitted(cmd) = planner.run_cycle(&goals, &odom, &mut sink).unwrap() {
            let steps = (cfg.control_interval / cfg.dt).round() as usize;
            for _ in 0..steps {
                pose = holonomic_dwa::path_planning::holonomic_dwa::motion(&pose, &cmd, cfg.dt);
            }
        }
    }
    assert!(pose.position().distance(&goal.position()) < start_distance / 2.0);
}

#[test]
fn test_weighted_scorer_plugs_in() {
    let cfg = generous_config();
    let scorer = WeightedScorer::new(cfg.weights, cfg.max_velocity);
    let mut planner = DwaPlanner::with_scorer(cfg, scorer).unwrap();
    let cmd = planner.plan(&Pose2D::new(1.0, 0.0, 0.0)).unwrap();
    assert!(cmd.vx > 0.0);
}
