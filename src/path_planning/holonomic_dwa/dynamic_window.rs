//! Velocities reachable within one control interval

use crate::common::VelocityCommand;

use super::DwaConfig;

/// Closed interval of one velocity axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisWindow {
    pub min: f64,
    pub max: f64,
}

impl AxisWindow {
    /// `current ± interval * max_accel`, each bound clamped to `[-max_abs, max_abs]`
    pub fn around(current: f64, max_accel: f64, interval: f64, max_abs: f64) -> Self {
        let reach = interval * max_accel;
        let clamp = |v: f64| v.max(-max_abs).min(max_abs);
        Self {
            min: clamp(current - reach),
            max: clamp(current + reach),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Feasible velocity bounds for the current cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicWindow {
    pub vx: AxisWindow,
    pub vy: AxisWindow,
    pub omega: AxisWindow,
}

impl DynamicWindow {
    /// Window around the previously commanded velocity.
    ///
    /// Both linear axes share `max_velocity` and `max_acceleration`; the
    /// angular axis uses its own limits.
    pub fn compute(previous: &VelocityCommand, config: &DwaConfig) -> Self {
        let interval = config.control_interval;
        Self {
            vx: AxisWindow::around(
                previous.vx, config.max_acceleration, interval, config.max_velocity),
            vy: AxisWindow::around(
                previous.vy, config.max_acceleration, interval, config.max_velocity),
            omega: AxisWindow::around(
                previous.omega,
                config.max_angular_acceleration,
                interval,
                config.max_angular_velocity,
            ),
        }
    }

    pub fn contains(&self, cmd: &VelocityCommand) -> bool {
        self.vx.contains(cmd.vx) && self.vy.contains(cmd.vy) && self.omega.contains(cmd.omega)
    }
}
