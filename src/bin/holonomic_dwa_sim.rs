// Holonomic Dynamic Window Approach closed-loop simulation
//
// Drives a point-mass omnidirectional robot to a goal in the odom frame,
// running one planning cycle per control interval, and plots the driven
// path together with the last predicted trajectory.
//
// usage: holonomic_dwa_sim [params.toml]

use std::error::Error;

use log::{info, warn};
use plotlib::page::Page;
use plotlib::repr::Plot;
use plotlib::style::{LineStyle, PointMarker, PointStyle};
use plotlib::view::ContinuousView;

use holonomic_dwa::path_planning::holonomic_dwa::{motion, simulate};
use holonomic_dwa::utils::{LatestGoal, OdomTransform, RecordingSink};
use holonomic_dwa::{CycleOutcome, DwaConfig, DwaPlanner, Pose2D, VelocityCommand};

const MAX_CYCLES: usize = 600;

/// Apply a body-frame command for one control interval
fn drive(pose: Pose2D, cmd: &VelocityCommand, config: &DwaConfig) -> Pose2D {
    let steps = (config.control_interval / config.dt).round().max(1.0) as usize;
    let dt = config.control_interval / steps as f64;
    (0..steps).fold(pose, |p, _| motion(&p, cmd, dt))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => DwaConfig::load(&path)?,
        None => DwaConfig::default(),
    };
    info!("config: {:?}", config);

    let goal = Pose2D::new(3.0, 2.0, 0.0);
    let goals = LatestGoal::new();
    let odom = OdomTransform::new();
    let mut sink = RecordingSink::new();
    let mut planner = DwaPlanner::new(config.clone())?;

    let mut pose = Pose2D::new(0.0, 0.0, std::f64::consts::PI / 8.);
    goals.publish(goal);

    let mut hpath = vec![(pose.x, pose.y)];
    let mut hprepath: Vec<(f64, f64)> = Vec::new();
    for cycle in 0..MAX_CYCLES {
        odom.set_robot_pose(pose);
        match planner.run_cycle(&goals, &odom, &mut sink)? {
            CycleOutcome::Emitted(cmd) => {
                pose = drive(pose, &cmd, &config);
                hpath.push((pose.x, pose.y));

                let origin = pose.to_isometry();
                hprepath = simulate(&cmd, &config)
                    .poses
                    .iter()
                    .map(|p| {
                        let q = origin * p.to_isometry();
                        (q.translation.vector.x, q.translation.vector.y)
                    })
                    .collect();
            }
            outcome => warn!("cycle {}: {:?}", cycle, outcome),
        }

        let dist_to_goal = pose.position().distance(&goal.position());
        if dist_to_goal < config.goal_xy_tolerance {
            info!("Goal!! after {} cycles", cycle + 1);
            break;
        }
    }
    info!("{} commands sent, final pose {:?}", sink.commands().len(), pose);

    let s0: Plot = Plot::new(vec![(goal.x, goal.y)]).point_style(
        PointStyle::new()
            .marker(PointMarker::Cross)
            .colour("#DD3355")
            .size(5.),
    );

    let s1: Plot = Plot::new(hpath).line_style(
        LineStyle::new()
            .colour("#35C788")
            .width(2.),
    );

    let s2: Plot = Plot::new(hprepath).line_style(
        LineStyle::new()
            .colour("#FFFF00")
            .width(2.),
    );

    let v = ContinuousView::new()
        .add(s0)
        .add(s1)
        .add(s2)
        .x_range(-0.5, 4.)
        .y_range(-0.5, 3.)
        .x_label("x [m]")
        .y_label("y [m]");

    std::fs::create_dir_all("./img")?;
    Page::single(&v)
        .save("./img/holonomic_dwa.svg")
        .map_err(|e| e.to_string())?;
    Ok(())
}
