//! # Autonomy Module
//!
//! This module provides the exploration autonomy for the vehicle: choosing frontiers to explore,
//! turning them into trajectories and supervising the execution of those trajectories.

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use expl_mgr::ExplMgr;

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Exploration manager state machine
pub mod expl_mgr;

/// Collaborator traits
pub mod ext;

/// Frontier types and attempted frontier bookkeeping
pub mod frontier;

/// Localisation module - keeps the last known pose of the vehicle
pub mod loc;

/// Defines path types
pub mod path;

/// Frontier selection
pub mod select;

/// Trajectory synthesis and yaw policies
pub mod traj;

/// Pending target queue
pub mod waypoint;
