//! # Flight Controller Equipment Communications Module

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A pose setpoint for the flight controller.
///
/// Commands are fire-and-forget, the controller flies towards the latest one it has received.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseCmd {
    /// Target position in the world frame, in meters.
    pub position_m: Vector3<f64>,

    /// Target heading (angle to the world +X axis about +Z), in radians.
    pub heading_rad: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl PoseCmd {
    pub fn new(position_m: Vector3<f64>, heading_rad: f64) -> Self {
        Self {
            position_m,
            heading_rad,
        }
    }
}
