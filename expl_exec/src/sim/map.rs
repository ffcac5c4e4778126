//! # Simulated obstacle map and pathfinder

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, info};
use nalgebra::Vector3;

use crate::auto::{ext::Pathfinder, path::Path};

use super::params::{SimObstacle, SimParams};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Spherical obstacles, each of which is unknown until the vehicle has been within sensor range
/// of its surface.
#[derive(Debug, Clone)]
pub struct SimMap {
    obstacles: Vec<SimObstacle>,
    known: Vec<bool>,
    sensor_range_m: f64,
    path_point_sep_m: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimMap {
    pub fn new(params: &SimParams) -> Self {
        Self {
            obstacles: params.obstacles.clone(),
            known: vec![false; params.obstacles.len()],
            sensor_range_m: params.sensor_range_m,
            path_point_sep_m: params.path_point_sep_m,
        }
    }

    /// Reveal any obstacle within sensor range of the given position.
    pub fn sense(&mut self, position_m: &Vector3<f64>) {
        for (obs, known) in self.obstacles.iter().zip(self.known.iter_mut()) {
            if !*known && surface_distance(obs, position_m) <= self.sensor_range_m {
                info!(
                    "Obstacle at ({:.2}, {:.2}, {:.2}) detected",
                    obs.center_m.x, obs.center_m.y, obs.center_m.z
                );
                *known = true;
            }
        }
    }

    pub fn num_known(&self) -> usize {
        self.known.iter().filter(|k| **k).count()
    }

    fn known_obstacles(&self) -> impl Iterator<Item = &SimObstacle> {
        self.obstacles
            .iter()
            .zip(self.known.iter())
            .filter(|(_, k)| **k)
            .map(|(o, _)| o)
    }
}

impl Pathfinder for SimMap {
    fn find_path(&mut self, start_m: &Vector3<f64>, goal_m: &Vector3<f64>) -> Path {
        let path = match Path::direct(*start_m, *goal_m, self.path_point_sep_m) {
            Ok(p) => p,
            Err(e) => {
                debug!("Could not build path: {}", e);
                return Path::new_empty();
            }
        };

        let blocked = path.points_m.iter().any(|p| {
            self.known_obstacles()
                .any(|o| surface_distance(o, p) <= 0.0)
        });

        if blocked {
            Path::new_empty()
        } else {
            path
        }
    }

    fn obstacle_distance(&self, point_m: &Vector3<f64>) -> Option<f64> {
        self.known_obstacles()
            .map(|o| surface_distance(o, point_m).max(0.0))
            .fold(None, |min: Option<f64>, d| {
                Some(min.map_or(d, |m| m.min(d)))
            })
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Distance from the point to the surface of the obstacle, negative inside it.
fn surface_distance(obs: &SimObstacle, point_m: &Vector3<f64>) -> f64 {
    (obs.center_m - point_m).norm() - obs.radius_m
}

#[cfg(test)]
mod test {
    use super::*;

    fn map() -> SimMap {
        SimMap {
            obstacles: vec![SimObstacle {
                center_m: Vector3::new(5.0, 0.0, 0.0),
                radius_m: 1.0,
            }],
            known: vec![false],
            sensor_range_m: 2.0,
            path_point_sep_m: 0.5,
        }
    }

    #[test]
    fn test_unknown_until_sensed() {
        let mut map = map();
        let start = Vector3::zeros();
        let goal = Vector3::new(10.0, 0.0, 0.0);

        assert_eq!(map.obstacle_distance(&start), None);
        assert!(!map.find_path(&start, &goal).is_empty());

        // Out of range
        map.sense(&Vector3::new(1.5, 0.0, 0.0));
        assert_eq!(map.num_known(), 0);

        map.sense(&Vector3::new(2.5, 0.0, 0.0));
        assert_eq!(map.num_known(), 1);

        assert_eq!(map.obstacle_distance(&start), Some(4.0));
        assert_eq!(map.obstacle_distance(&Vector3::new(5.0, 0.5, 0.0)), Some(0.0));
        assert!(map.find_path(&start, &goal).is_empty());

        // A path which goes round it is fine
        assert!(!map.find_path(&start, &Vector3::new(0.0, 10.0, 0.0)).is_empty());
    }
}
