//! # Simulated world
//!
//! A minimal stand-in for the vehicle and its environment so that the exploration manager can be
//! run end to end without any hardware or external simulator:
//!
//! - [`SimVehicle`] - point mass which flies towards the latest pose command.
//! - [`SimMap`] - spherical obstacles which become known once within sensor range, with a
//!   straight-line pathfinder on top.
//! - [`SimFrontiers`] - a fixed set of frontiers which are removed once visited.
//! - [`MarkerRecorder`] - keeps the latest markers on each visualisation channel.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod frontiers;
mod map;
mod params;
mod vehicle;
mod vis;

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use self::{
    frontiers::SimFrontiers,
    map::SimMap,
    params::{SimObstacle, SimParams},
    vehicle::SimVehicle,
    vis::MarkerRecorder,
};
