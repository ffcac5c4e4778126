//! # [`Executing`] ExplMgr state
//!
//! Streams the trajectory to the flight controller. The current sample's command is reissued
//! every cycle until the vehicle is within a voxel of it, at which point the next sample is sent.
//! While waiting the upcoming samples are checked against the latest obstacle data, and the wait
//! is bounded by the sample timeout.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use comms_if::eqpt::vis::VisColour;
use log::{info, warn};
use nalgebra::Vector3;
use util::time::seconds_to_cycles;

use crate::auto::{
    ext::{Pathfinder, Visualiser},
    loc::Pose,
    traj::Trajectory,
};

use super::{
    hold_cmd,
    params::ExplMgrParams,
    states::{Aborting, Idle},
    ExplMgrError, ExplMgrPersistantData, ExplMgrState, ExtServices, StepOutput,
};

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

pub const FREE_PATH_CHANNEL: &str = "free_path";
pub const OCCUPIED_PATH_CHANNEL: &str = "occupied_path";

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct Executing {
    /// The frontier this trajectory leads to
    pub target_m: Vector3<f64>,

    pub traj: Trajectory,

    /// Index of the sample currently being flown to
    pub index: usize,

    /// Number of cycles spent waiting on the current sample
    num_cycles_on_sample: u64,
}

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Check whether the trajectory is about to pass too close to an obstacle.
///
/// Samples from `index` up to `index + abort_lookahead` (or the end of the trajectory) are
/// checked. A sample whose obstacle distance is unknown is treated as free.
pub fn check_for_abort(
    index: usize,
    traj: &Trajectory,
    params: &ExplMgrParams,
    pathfinder: &dyn Pathfinder,
    visualiser: &mut dyn Visualiser,
) -> bool {
    let end = traj.len().min(index.saturating_add(params.abort_lookahead));
    let window = traj.points.get(index..end).unwrap_or(&[]);

    let mut free_m = Vec::new();
    let mut occupied_m = Vec::new();

    for sample in window {
        match pathfinder.obstacle_distance(&sample.position_m) {
            Some(d) if d < params.robot_radius_m => occupied_m.push(sample.position_m),
            _ => free_m.push(sample.position_m),
        }
    }

    if params.visualise {
        visualiser.visualise(FREE_PATH_CHANNEL, &free_m, VisColour::Green);
        visualiser.visualise(OCCUPIED_PATH_CHANNEL, &occupied_m, VisColour::Red);
    }

    !occupied_m.is_empty()
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl Executing {
    pub fn new(target_m: Vector3<f64>, traj: Trajectory) -> Self {
        Self {
            target_m,
            traj,
            index: 0,
            num_cycles_on_sample: 0,
        }
    }

    pub fn step(
        &mut self,
        params: &ExplMgrParams,
        persistant: &mut ExplMgrPersistantData,
        ext: &mut ExtServices,
    ) -> Result<StepOutput, ExplMgrError> {
        let pose = persistant.pose()?;

        let sample = *self
            .traj
            .get(self.index)
            .ok_or(ExplMgrError::SampleOutOfBounds {
                index: self.index,
                len: self.traj.len(),
            })?;

        // Reached the current sample, move on to the next one
        if (pose.position_m - sample.position_m).norm() < params.voxel_size_m {
            self.index += 1;
            self.num_cycles_on_sample = 0;

            return match self.traj.get(self.index) {
                Some(next) => Ok(StepOutput::none().with_cmd(next.to_pose_cmd())),
                None => {
                    info!(
                        "Reached target ({:.2}, {:.2}, {:.2})",
                        self.target_m.x, self.target_m.y, self.target_m.z
                    );
                    persistant.expl_tm.num_targets_reached += 1;
                    Ok(StepOutput::replace(ExplMgrState::Idle(Idle::new())))
                }
            };
        }

        if check_for_abort(
            self.index,
            &self.traj,
            params,
            &*ext.pathfinder,
            &mut *ext.visualiser,
        ) {
            warn!("Obstacle on the upcoming trajectory, aborting");
            return Ok(self.abort(persistant, &pose));
        }

        self.num_cycles_on_sample += 1;
        if self.num_cycles_on_sample
            > seconds_to_cycles(params.sample_timeout_s, params.command_rate_hz)
        {
            warn!(
                "Timed out waiting to reach sample {} of {}, aborting",
                self.index,
                self.traj.len()
            );
            return Ok(self.abort(persistant, &pose));
        }

        Ok(StepOutput::none().with_cmd(sample.to_pose_cmd()))
    }

    /// Hold the current pose, drop the trajectory and move to `Aborting`.
    fn abort(
        &mut self,
        persistant: &mut ExplMgrPersistantData,
        pose: &Pose,
    ) -> StepOutput {
        persistant.expl_tm.num_aborts += 1;
        self.traj.clear();

        StepOutput::replace(ExplMgrState::Aborting(Aborting::new(self.target_m)))
            .with_cmd(hold_cmd(pose))
    }
}
