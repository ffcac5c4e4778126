//! # Simulated vehicle

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::fc::PoseCmd;
use util::maths::wrap_pi;

use crate::auto::loc::Pose;

use super::params::SimParams;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Point mass vehicle which moves straight towards the last commanded pose, limited by its
/// maximum speed and yaw rate.
#[derive(Debug, Clone)]
pub struct SimVehicle {
    pose: Pose,
    cmd: Option<PoseCmd>,
    max_speed_ms: f64,
    max_yaw_rate_rads: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimVehicle {
    pub fn new(params: &SimParams) -> Self {
        Self {
            pose: Pose::from_parts(params.start_position_m, params.start_heading_rad),
            cmd: None,
            max_speed_ms: params.max_speed_ms,
            max_yaw_rate_rads: params.max_yaw_rate_rads,
        }
    }

    /// Set a new setpoint, replacing any previous one.
    pub fn command(&mut self, cmd: PoseCmd) {
        self.cmd = Some(cmd)
    }

    /// Propagate the vehicle forward by `dt_s` seconds.
    pub fn update(&mut self, dt_s: f64) {
        let cmd = match self.cmd {
            Some(c) => c,
            None => return,
        };

        let delta_m = cmd.position_m - self.pose.position_m;
        let max_step_m = self.max_speed_ms * dt_s;
        let position_m = if delta_m.norm() <= max_step_m {
            cmd.position_m
        } else {
            self.pose.position_m + delta_m.normalize() * max_step_m
        };

        let heading_rad = self.pose.get_heading();
        let max_turn_rad = self.max_yaw_rate_rads * dt_s;
        let turn_rad = wrap_pi(cmd.heading_rad - heading_rad).clamp(-max_turn_rad, max_turn_rad);

        self.pose = Pose::from_parts(position_m, wrap_pi(heading_rad + turn_rad));
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }
}
