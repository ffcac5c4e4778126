//! # Yaw assignment
//!
//! Assigns a heading to each sample of a [`Trajectory`]. Positions and velocities are never
//! modified, only `heading_rad`.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{TrajParams, TrajPoint, Trajectory};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Direction components at or below this magnitude are treated as vertical motion.
const PLANAR_DIR_EPS: f64 = 1e-4;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Possible heading assignment policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YawPolicy {
    /// Heading taken from the direction to the next sample
    PointFacing,

    /// Heading taken from the sample's own velocity, or the next one which is moving
    FollowVelocity,

    /// Heading taken from the sample's own velocity, or the previous one which is moving
    AnticipateVelocity,

    /// Every sample gets the same heading
    Constant,
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Apply the given policy to the trajectory.
pub fn apply_yaw(
    traj: &mut Trajectory,
    policy: YawPolicy,
    params: &TrajParams,
    initial_heading_rad: f64,
) {
    match policy {
        YawPolicy::PointFacing => point_facing(&mut traj.points, initial_heading_rad),
        YawPolicy::FollowVelocity => follow_velocity(
            &mut traj.points,
            params.min_velocity_norm_ms,
            initial_heading_rad,
        ),
        YawPolicy::AnticipateVelocity => anticipate_velocity(
            &mut traj.points,
            params.min_velocity_norm_ms,
            initial_heading_rad,
        ),
        YawPolicy::Constant => {
            for p in traj.points.iter_mut() {
                p.heading_rad = params.const_yaw_rad
            }
        }
    }
}

/// Heading of each sample is the angle between the direction to the next sample and its
/// projection onto the horizontal plane. Vertical or zero-length segments hold the previous
/// heading, and the final sample carries the last heading forward.
fn point_facing(points: &mut [TrajPoint], initial_heading_rad: f64) {
    let mut heading_rad = initial_heading_rad;

    for i in 0..points.len() {
        if i + 1 < points.len() {
            let delta = points[i + 1].position_m - points[i].position_m;

            // Zero-length segments have no direction
            if let Some(dir) = delta.try_normalize(f64::EPSILON) {
                if dir.x.abs() > PLANAR_DIR_EPS || dir.y.abs() > PLANAR_DIR_EPS {
                    let planar = Vector3::new(dir.x, dir.y, 0.0).normalize();
                    heading_rad = dir.dot(&planar).clamp(-1.0, 1.0).acos();
                }
            }
        }

        points[i].heading_rad = heading_rad;
    }
}

fn follow_velocity(points: &mut [TrajPoint], min_norm_ms: f64, initial_heading_rad: f64) {
    let mut heading_rad = initial_heading_rad;

    for i in 0..points.len() {
        let borrowed = (i..points.len()).find_map(|j| velocity_heading(&points[j], min_norm_ms));

        if let Some(h) = borrowed {
            heading_rad = h;
        }

        points[i].heading_rad = heading_rad;
    }
}

fn anticipate_velocity(points: &mut [TrajPoint], min_norm_ms: f64, initial_heading_rad: f64) {
    if points.is_empty() {
        return;
    }

    let mut heading_rad = initial_heading_rad;

    for i in (1..points.len()).rev() {
        let borrowed = (0..=i)
            .rev()
            .find_map(|j| velocity_heading(&points[j], min_norm_ms));

        if let Some(h) = borrowed {
            heading_rad = h;
        }

        points[i].heading_rad = heading_rad;
    }

    points[0].heading_rad = initial_heading_rad;
}

/// Heading of the sample's planar velocity, if it is moving fast enough to define one.
fn velocity_heading(point: &TrajPoint, min_norm_ms: f64) -> Option<f64> {
    let vx = point.velocity_ms.x;
    let vy = point.velocity_ms.y;

    if (vx * vx + vy * vy).sqrt() > min_norm_ms {
        Some(vy.atan2(vx))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn traj_from_velocities(vels: &[(f64, f64)]) -> Trajectory {
        Trajectory {
            points: vels
                .iter()
                .enumerate()
                .map(|(i, &(vx, vy))| TrajPoint {
                    position_m: Vector3::new(i as f64, 0.0, 0.0),
                    velocity_ms: Vector3::new(vx, vy, 0.0),
                    heading_rad: 0.0,
                })
                .collect(),
        }
    }

    fn traj_from_positions(points: &[(f64, f64, f64)]) -> Trajectory {
        Trajectory {
            points: points
                .iter()
                .map(|&(x, y, z)| TrajPoint {
                    position_m: Vector3::new(x, y, z),
                    velocity_ms: Vector3::zeros(),
                    heading_rad: 0.0,
                })
                .collect(),
        }
    }

    fn headings(traj: &Trajectory) -> Vec<f64> {
        traj.points.iter().map(|p| p.heading_rad).collect()
    }

    fn assert_headings(traj: &Trajectory, expected: &[f64]) {
        let actual = headings(traj);
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_follow_velocity() {
        let params = TrajParams::default();

        let mut traj = traj_from_velocities(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        apply_yaw(&mut traj, YawPolicy::FollowVelocity, &params, 0.5);
        assert_headings(&traj, &[0.0, FRAC_PI_2, FRAC_PI_2]);

        // Nothing moving, everything holds the initial heading
        let mut traj = traj_from_velocities(&[(0.0, 0.0), (0.05, 0.0)]);
        apply_yaw(&mut traj, YawPolicy::FollowVelocity, &params, 0.5);
        assert_headings(&traj, &[0.5, 0.5]);

        // Trailing stationary samples hold the last heading
        let mut traj = traj_from_velocities(&[(-1.0, 0.0), (0.0, 0.0)]);
        apply_yaw(&mut traj, YawPolicy::FollowVelocity, &params, 0.0);
        assert_headings(&traj, &[PI, PI]);
    }

    #[test]
    fn test_anticipate_velocity() {
        let params = TrajParams::default();

        let mut traj = traj_from_velocities(&[(0.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);
        apply_yaw(&mut traj, YawPolicy::AnticipateVelocity, &params, 0.25);
        assert_headings(&traj, &[0.25, FRAC_PI_2, FRAC_PI_4]);

        // Single sample is forced to the initial heading
        let mut traj = traj_from_velocities(&[(1.0, 0.0)]);
        apply_yaw(&mut traj, YawPolicy::AnticipateVelocity, &params, 1.0);
        assert_headings(&traj, &[1.0]);

        let mut traj = Trajectory::default();
        apply_yaw(&mut traj, YawPolicy::AnticipateVelocity, &params, 1.0);
        assert!(traj.points.is_empty());
    }

    #[test]
    fn test_point_facing() {
        let params = TrajParams::default();

        // Level flight has no elevation
        let mut traj = traj_from_positions(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 1.0, 0.0)]);
        apply_yaw(&mut traj, YawPolicy::PointFacing, &params, 0.3);
        assert_headings(&traj, &[0.0, 0.0, 0.0]);

        // Climbing at 45 degrees, then straight up which holds the previous value
        let mut traj = traj_from_positions(&[(0.0, 0.0, 0.0), (1.0, 0.0, 1.0), (1.0, 0.0, 2.0)]);
        apply_yaw(&mut traj, YawPolicy::PointFacing, &params, 0.3);
        assert_headings(&traj, &[FRAC_PI_4, FRAC_PI_4, FRAC_PI_4]);

        // Vertical only, initial heading held throughout
        let mut traj = traj_from_positions(&[(0.0, 0.0, 0.0), (0.0, 0.0, 1.0)]);
        apply_yaw(&mut traj, YawPolicy::PointFacing, &params, 0.3);
        assert_headings(&traj, &[0.3, 0.3]);
    }

    #[test]
    fn test_constant() {
        let params = TrajParams {
            yaw_policy: YawPolicy::Constant,
            const_yaw_rad: 1.5,
            min_velocity_norm_ms: 0.1,
        };

        let mut traj = traj_from_velocities(&[(1.0, 0.0), (0.0, 1.0)]);
        apply_yaw(&mut traj, YawPolicy::Constant, &params, 0.0);
        assert_headings(&traj, &[1.5, 1.5]);
    }
}
