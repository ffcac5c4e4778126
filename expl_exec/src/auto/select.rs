//! # Frontier selection
//!
//! Picks the next frontier to explore. Frontiers are scored by how far ahead of the vehicle they
//! lie, i.e. the projection of the vector to the frontier onto the vehicle's horizontal heading,
//! so the vehicle prefers to keep flying forwards rather than to the nearest frontier.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::trace;
use nalgebra::Vector3;

use super::frontier::{AttemptedSet, Frontier};

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Forward-facing score of a frontier seen from `position_m` with heading `heading_rad`.
pub fn score(position_m: &Vector3<f64>, heading_rad: f64, frontier: &Frontier) -> f64 {
    let delta = frontier.center_m - position_m;

    heading_rad.cos() * delta.x + heading_rad.sin() * delta.y
}

/// Select the best frontier which hasn't already been attempted.
///
/// The first frontier (in input order) reaching the maximum score wins. Returns `None` if every
/// frontier has been attempted or there are no frontiers.
pub fn select_best(
    position_m: &Vector3<f64>,
    heading_rad: f64,
    frontiers: &[Frontier],
    attempted: &AttemptedSet,
) -> Option<Vector3<f64>> {
    let mut max_score = f64::MIN;
    let mut best = None;

    for frontier in frontiers {
        let s = score(position_m, heading_rad, frontier);
        trace!("Frontier {:?} scored {:.3}", frontier.center_m, s);

        if s > max_score && !attempted.contains(&frontier.center_m) {
            max_score = s;
            best = Some(frontier.center_m);
        }
    }

    best
}
