//! # External collaborators
//!
//! Traits describing the services the exploration manager relies on but does not own: the
//! pathfinder (and its obstacle map), the frontier detector and the diagnostic visualiser.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::vis::VisColour;
use nalgebra::Vector3;

use super::{frontier::Frontier, path::Path};

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

pub trait Pathfinder {
    /// Find a path from `start_m` to `goal_m`. An empty path means no feasible path exists.
    fn find_path(&mut self, start_m: &Vector3<f64>, goal_m: &Vector3<f64>) -> Path;

    /// Distance from the point to the nearest known obstacle, or `None` if unknown.
    fn obstacle_distance(&self, point_m: &Vector3<f64>) -> Option<f64>;
}

pub trait FrontierSource {
    /// Snapshot of the currently known frontiers, which may be empty.
    fn find_frontiers(&mut self) -> Vec<Frontier>;
}

pub trait Visualiser {
    fn visualise(&mut self, channel: &str, points_m: &[Vector3<f64>], colour: VisColour);
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Visualiser which discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisualiser;

impl Visualiser for NullVisualiser {
    fn visualise(&mut self, _channel: &str, _points_m: &[Vector3<f64>], _colour: VisColour) {}
}
