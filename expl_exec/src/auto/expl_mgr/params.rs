//! # ExplMgr Parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use crate::auto::traj::TrajParams;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ExplMgrParams {
    /// Radius of the vehicle. Trajectory samples closer than this to an obstacle cause an abort.
    pub robot_radius_m: f64,

    /// Size of the map voxels. Used as the convergence tolerance on each trajectory sample and as
    /// the cell size of the attempted frontier set.
    pub voxel_size_m: f64,

    /// If true progress messages are logged at `info` level.
    #[serde(default)]
    pub verbose: bool,

    /// If true the abort check sends the free and occupied samples to the visualiser.
    #[serde(default)]
    pub visualise: bool,

    /// Rate at which the manager is stepped and commands are reissued.
    #[serde(default = "default_command_rate_hz")]
    pub command_rate_hz: f64,

    /// Maximum time to wait for the vehicle to reach a single trajectory sample before aborting.
    pub sample_timeout_s: f64,

    /// Time spent facing the opposite way when no frontier could be found.
    #[serde(default = "default_recovery_dwell_s")]
    pub recovery_dwell_s: f64,

    /// Number of trajectory samples, starting at the current one, checked for obstacles.
    #[serde(default = "default_abort_lookahead")]
    pub abort_lookahead: usize,

    /// Trajectory synthesis parameters
    pub traj: TrajParams,
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn default_command_rate_hz() -> f64 {
    40.0
}

fn default_recovery_dwell_s() -> f64 {
    1.0
}

fn default_abort_lookahead() -> usize {
    4
}
