//! Common types used throughout holonomic_dwa

use nalgebra::{Isometry2, Vector2};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Squared euclidean distance, avoids the square root in hot loops
    pub fn distance_squared(&self, other: &Point2D) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// 2D pose (position + orientation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Distance from the frame origin to this pose's position
    pub fn distance_to_origin(&self) -> f64 {
        self.position().distance(&Point2D::origin())
    }

    /// Normalize yaw to [-pi, pi]
    pub fn normalize_yaw(&mut self) {
        self.yaw = normalize_angle(self.yaw);
    }

    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(Vector2::new(self.x, self.y), self.yaw)
    }

    pub fn from_isometry(iso: &Isometry2<f64>) -> Self {
        Self {
            x: iso.translation.vector.x,
            y: iso.translation.vector.y,
            yaw: iso.rotation.angle(),
        }
    }
}

/// Wrap an angle to [-pi, pi]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}

/// Body-frame velocity command for a holonomic base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityCommand {
    /// forward velocity [m/s]
    pub vx: f64,
    /// lateral velocity [m/s]
    pub vy: f64,
    /// yaw rate [rad/s]
    pub omega: f64,
}

impl VelocityCommand {
    pub fn new(vx: f64, vy: f64, omega: f64) -> Self {
        Self { vx, vy, omega }
    }

    pub fn zero() -> Self {
        Self { vx: 0.0, vy: 0.0, omega: 0.0 }
    }

    /// Magnitude of the linear part of the command
    pub fn linear_speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Same command with the linear components forced to zero, yaw rate untouched
    pub fn with_linear_zeroed(&self) -> Self {
        Self { vx: 0.0, vy: 0.0, omega: self.omega }
    }
}

impl Default for VelocityCommand {
    fn default() -> Self {
        Self::zero()
    }
}

/// Forward-simulated trajectory of one velocity candidate, in the robot frame
/// at cycle start.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub velocity: VelocityCommand,
    pub poses: Vec<Pose2D>,
}

impl Trajectory {
    pub fn new(velocity: VelocityCommand) -> Self {
        Self { velocity, poses: vec![Pose2D::origin()] }
    }

    pub fn with_capacity(velocity: VelocityCommand, capacity: usize) -> Self {
        let mut poses = Vec::with_capacity(capacity);
        poses.push(Pose2D::origin());
        Self { velocity, poses }
    }

    pub fn push(&mut self, pose: Pose2D) {
        self.poses.push(pose);
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Last simulated pose; the origin for an unsimulated trajectory
    pub fn final_pose(&self) -> Pose2D {
        self.poses.last().copied().unwrap_or_else(Pose2D::origin)
    }
}
