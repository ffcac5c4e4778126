//! # Localisation module
//!
//! This module tracks the vehicle's pose as reported by odometry. Pose updates may be missed for
//! a few cycles (stale feed), in which case the last known pose is reused.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::warn;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of consecutive cycles without a pose update after which a warning is logged.
const STALE_WARN_CYCLES: u64 = 40;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The current pose (position and attitude in the world frame) of the vehicle.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    /// The position in the world frame
    pub position_m: Vector3<f64>,

    /// The attitude of the vehicle in the world frame.
    pub attitude_q: UnitQuaternion<f64>,
}

/// Provides the last known pose of the vehicle.
#[derive(Debug, Clone, Default)]
pub struct LocMgr {
    pose: Option<Pose>,

    /// Number of consecutive updates which didn't carry a new pose.
    num_stale_cycles: u64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    pub fn new(position_m: Vector3<f64>, attitude_q: UnitQuaternion<f64>) -> Self {
        Self {
            position_m,
            attitude_q,
        }
    }

    /// Create a level pose at the given position facing along the given heading.
    pub fn from_parts(position_m: Vector3<f64>, heading_rad: f64) -> Self {
        Self {
            position_m,
            attitude_q: UnitQuaternion::from_euler_angles(0.0, 0.0, heading_rad),
        }
    }

    /// Return the heading (angle to the positive world X axis about +Z) of the vehicle in radians.
    ///
    /// Heading is given in the range [-pi, pi].
    pub fn get_heading(&self) -> f64 {
        self.attitude_q.euler_angles().2
    }
}

impl LocMgr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the manager with the latest odometry, `None` if no new pose arrived this cycle.
    pub fn update(&mut self, pose: Option<Pose>) {
        match pose {
            Some(p) => {
                self.pose = Some(p);
                self.num_stale_cycles = 0;
            }
            None => {
                self.num_stale_cycles += 1;

                if self.num_stale_cycles == STALE_WARN_CYCLES {
                    warn!(
                        "No pose update for {} cycles, reusing the last known pose",
                        self.num_stale_cycles
                    );
                }
            }
        }
    }

    /// Get the last known pose, or `None` if no pose has ever been received.
    pub fn get_pose(&self) -> Option<Pose> {
        self.pose
    }

    pub fn num_stale_cycles(&self) -> u64 {
        self.num_stale_cycles
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_heading() {
        let pose = Pose::from_parts(Vector3::new(1.0, 2.0, 3.0), 0.75);
        assert!((pose.get_heading() - 0.75).abs() < 1e-12);

        let pose = Pose::from_parts(Vector3::zeros(), -3.0);
        assert!((pose.get_heading() + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_stale_pose_reused() {
        let mut loc = LocMgr::new();
        assert!(loc.get_pose().is_none());

        loc.update(None);
        assert!(loc.get_pose().is_none());

        let pose = Pose::from_parts(Vector3::new(1.0, 0.0, 2.0), 0.0);
        loc.update(Some(pose));
        loc.update(None);
        loc.update(None);

        assert_eq!(loc.get_pose(), Some(pose));
        assert_eq!(loc.num_stale_cycles(), 2);
    }
}
