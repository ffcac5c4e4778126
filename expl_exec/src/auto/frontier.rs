//! # Frontier model
//!
//! Value types describing the frontiers reported by the frontier detector, and the bookkeeping
//! of frontiers which have already been attempted.
//!
//! Frontier identity is spatial: two points falling in the same cell of a regular grid share a
//! [`FrontierKey`]. The cell size is the voxel size of the map, so a frontier re-reported a few
//! centimeters away from where it was last seen is still recognised as attempted.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::collections::HashMap;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A candidate unexplored region, represented by its centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frontier {
    /// Centre of the frontier in the world frame.
    pub center_m: Vector3<f64>,

    /// Number of map cells making up the frontier.
    pub num_cells: usize,
}

/// Index of the grid cell containing a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrontierKey {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Set of frontiers which have been pursued or rejected.
///
/// Entries are never removed for the lifetime of the set.
#[derive(Debug, Clone)]
pub struct AttemptedSet {
    cell_size_m: f64,

    /// Last attempted point for each occupied key.
    attempted: HashMap<FrontierKey, Vector3<f64>>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Frontier {
    pub fn new(center_m: Vector3<f64>) -> Self {
        Self {
            center_m,
            num_cells: 0,
        }
    }
}

impl FrontierKey {
    /// Get the key of the cell of size `cell_size_m` containing `point_m`.
    ///
    /// Cells are half open, `[k * size, (k + 1) * size)` on every axis.
    pub fn from_point(point_m: &Vector3<f64>, cell_size_m: f64) -> Self {
        let index = |v: f64| (v / cell_size_m).floor() as i64;

        Self {
            x: index(point_m.x),
            y: index(point_m.y),
            z: index(point_m.z),
        }
    }
}

impl AttemptedSet {
    /// Create an empty set bucketing points into cells of `cell_size_m`.
    ///
    /// # Panics
    /// - If `cell_size_m` is not strictly positive.
    pub fn new(cell_size_m: f64) -> Self {
        assert!(
            cell_size_m > 0.0,
            "AttemptedSet cell size must be positive, got {}",
            cell_size_m
        );

        Self {
            cell_size_m,
            attempted: HashMap::new(),
        }
    }

    pub fn key(&self, point_m: &Vector3<f64>) -> FrontierKey {
        FrontierKey::from_point(point_m, self.cell_size_m)
    }

    /// Mark the point as attempted, returning `true` if its cell was not already attempted.
    pub fn mark(&mut self, point_m: Vector3<f64>) -> bool {
        self.attempted.insert(self.key(&point_m), point_m).is_none()
    }

    /// Returns `true` if the cell containing the point has been attempted.
    pub fn contains(&self, point_m: &Vector3<f64>) -> bool {
        self.attempted.contains_key(&self.key(point_m))
    }

    pub fn len(&self) -> usize {
        self.attempted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempted.is_empty()
    }

    pub fn cell_size_m(&self) -> f64 {
        self.cell_size_m
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_key_bucketing() {
        let a = FrontierKey::from_point(&Vector3::new(1.01, 2.02, 0.49), 0.5);
        let b = FrontierKey::from_point(&Vector3::new(1.49, 2.4, 0.01), 0.5);
        assert_eq!(a, b);
        assert_eq!(a, FrontierKey { x: 2, y: 4, z: 0 });

        // Crossing a cell boundary changes the key
        let c = FrontierKey::from_point(&Vector3::new(1.5, 2.02, 0.49), 0.5);
        assert_ne!(a, c);

        // Negative coordinates floor away from zero
        let d = FrontierKey::from_point(&Vector3::new(-0.1, -0.5, -0.51), 0.5);
        assert_eq!(d, FrontierKey { x: -1, y: -1, z: -2 });
    }

    #[test]
    fn test_attempted_set() {
        let mut set = AttemptedSet::new(0.2);
        assert!(set.is_empty());

        assert!(set.mark(Vector3::new(1.02, 1.02, 1.02)));
        assert!(set.contains(&Vector3::new(1.05, 1.05, 1.05)));
        assert!(!set.contains(&Vector3::new(1.25, 1.02, 1.02)));

        // Marking the same cell again keeps one entry
        assert!(!set.mark(Vector3::new(1.1, 1.1, 1.1)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.key(&Vector3::new(1.1, 1.1, 1.1)), FrontierKey { x: 5, y: 5, z: 5 });
    }
}
