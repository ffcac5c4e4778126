//! # Trajectory synthesis
//!
//! Converts a geometric [`Path`] into a [`Trajectory`] of pose samples which can be streamed to
//! the flight controller one at a time. Headings are assigned by a [`YawPolicy`].

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod params;
pub mod yaw;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::fc::PoseCmd;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::path::Path;

pub use self::{
    params::TrajParams,
    yaw::{apply_yaw, YawPolicy},
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A single sample of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajPoint {
    pub position_m: Vector3<f64>,
    pub velocity_ms: Vector3<f64>,
    pub heading_rad: f64,
}

/// An ordered list of trajectory samples. Empty trajectories mean the target is infeasible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<TrajPoint>,
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Build a trajectory with one sample per path point and apply the configured yaw policy.
///
/// Samples are created with zero velocity.
pub fn synthesize(path: &Path, params: &TrajParams, initial_heading_rad: f64) -> Trajectory {
    let mut traj = Trajectory {
        points: path
            .points_m
            .iter()
            .map(|p| TrajPoint {
                position_m: *p,
                velocity_ms: Vector3::zeros(),
                heading_rad: 0.0,
            })
            .collect(),
    };

    apply_yaw(&mut traj, params.yaw_policy, params, initial_heading_rad);

    traj
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl TrajPoint {
    /// The flight controller command for this sample.
    pub fn to_pose_cmd(&self) -> PoseCmd {
        PoseCmd::new(self.position_m, self.heading_rad)
    }
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrajPoint> {
        self.points.get(index)
    }

    pub fn clear(&mut self) {
        self.points.clear()
    }

    /// Positions of every sample, used for telemetry and visualisation.
    pub fn positions_m(&self) -> Vec<Vector3<f64>> {
        self.points.iter().map(|p| p.position_m).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_path_safety() {
        let params = TrajParams::default();

        let traj = synthesize(&Path::new_empty(), &params, 0.0);
        assert!(traj.is_empty());

        let path = Path {
            points_m: vec![Vector3::new(1.0, 2.0, 3.0)],
        };
        let traj = synthesize(&path, &params, 0.7);
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.points[0].position_m, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(traj.points[0].heading_rad, 0.7);
    }

    #[test]
    fn test_one_sample_per_point() {
        let params = TrajParams {
            yaw_policy: YawPolicy::Constant,
            const_yaw_rad: 2.0,
            min_velocity_norm_ms: 0.1,
        };

        let path = Path::direct(Vector3::zeros(), Vector3::new(3.0, 0.0, 0.0), 1.0).unwrap();
        let traj = synthesize(&path, &params, 0.0);

        assert_eq!(traj.len(), path.get_num_points());
        for (s, p) in traj.points.iter().zip(path.points_m.iter()) {
            assert_eq!(&s.position_m, p);
            assert_eq!(s.velocity_ms, Vector3::zeros());
            assert_eq!(s.heading_rad, 2.0);
        }

        let cmd = traj.points[1].to_pose_cmd();
        assert_eq!(cmd.position_m, traj.points[1].position_m);
        assert_eq!(cmd.heading_rad, 2.0);
    }
}
