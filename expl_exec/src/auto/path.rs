//! # Path
//!
//! This module defines the geometric path produced by the pathfinder and followed by the
//! exploration manager.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An ordered sequence of points from a start to a goal, in the world frame.
///
/// An empty path means no feasible path was found.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Path {
    pub points_m: Vec<Vector3<f64>>,
}

// -----------------------------------------------------------------------------------------------
// ENUMS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("The point separation must be positive and finite, got {0}")]
    InvalidSeparation(f64),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Path {
    /// Create a new empty path
    pub fn new_empty() -> Self {
        Path {
            points_m: Vec::new(),
        }
    }

    /// Produces a direct path between the two position vectors, with each point in the path having
    /// at most the given separation.
    ///
    /// The path always starts at `from` and ends at `to`.
    pub fn direct(
        from: Vector3<f64>,
        to: Vector3<f64>,
        point_sep_m: f64,
    ) -> Result<Self, PathError> {
        if !(point_sep_m.is_finite() && point_sep_m > 0.0) {
            return Err(PathError::InvalidSeparation(point_sep_m));
        }

        let diff_vec = to - from;
        let dist = diff_vec.norm();

        // If the points are closer than the separation just produce a new path with the from and
        // to being the only points.
        if dist <= point_sep_m {
            return Ok(Path {
                points_m: vec![from, to],
            });
        }

        // Round the number of segments up so that no gap exceeds the separation
        let num_segments = (dist / point_sep_m).ceil() as usize;
        let delta = diff_vec / (num_segments as f64);

        let mut points_m = Vec::with_capacity(num_segments + 1);
        for i in 0..num_segments {
            points_m.push(from + delta * (i as f64));
        }
        points_m.push(to);

        Ok(Path { points_m })
    }

    /// Return the length of the path in meters.
    ///
    /// If the path is empty (not enough points) then `None` is returned.
    pub fn get_length(&self) -> Option<f64> {
        if self.points_m.len() < 2 {
            return None;
        }

        Some(
            self.points_m
                .windows(2)
                .map(|seg| (seg[1] - seg[0]).norm())
                .sum(),
        )
    }

    /// Get the number of points in the path
    pub fn get_num_points(&self) -> usize {
        self.points_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points_m.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_direct() {
        let from = Vector3::new(0.0, 0.0, 1.0);
        let to = Vector3::new(1.0, 0.0, 1.0);

        let path = Path::direct(from, to, 0.3).unwrap();

        // 1 m at 0.3 m separation needs 4 segments
        assert_eq!(path.get_num_points(), 5);
        assert_eq!(path.points_m[0], from);
        assert_eq!(*path.points_m.last().unwrap(), to);
        assert!(path
            .points_m
            .windows(2)
            .all(|seg| (seg[1] - seg[0]).norm() <= 0.3 + 1e-12));
        assert!((path.get_length().unwrap() - 1.0).abs() < 1e-12);

        // Short hop
        let path = Path::direct(from, from, 0.3).unwrap();
        assert_eq!(path.get_num_points(), 2);

        assert!(Path::direct(from, to, 0.0).is_err());
    }

    #[test]
    fn test_empty() {
        let path = Path::new_empty();
        assert!(path.is_empty());
        assert_eq!(path.get_length(), None);
    }
}
