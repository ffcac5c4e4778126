//! # [`Planning`] ExplMgr state

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use comms_if::eqpt::vis::VisColour;
use log::{info, warn};
use nalgebra::Vector3;

use crate::auto::traj::synthesize;

use super::{
    params::ExplMgrParams,
    states::{Executing, Idle},
    ExplMgrError, ExplMgrPersistantData, ExplMgrState, ExtServices, StepOutput,
};

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

pub const TRAJECTORY_CHANNEL: &str = "trajectory";

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct Planning {
    pub target_m: Vector3<f64>,
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl Planning {
    pub fn new(target_m: Vector3<f64>) -> Self {
        Self { target_m }
    }

    pub fn step(
        &mut self,
        params: &ExplMgrParams,
        persistant: &mut ExplMgrPersistantData,
        ext: &mut ExtServices,
    ) -> Result<StepOutput, ExplMgrError> {
        let pose = persistant.pose()?;

        let path = ext.pathfinder.find_path(&pose.position_m, &self.target_m);
        let traj = synthesize(&path, &params.traj, pose.get_heading());

        let first_cmd = match traj.get(0) {
            Some(s) => s.to_pose_cmd(),
            None => {
                warn!(
                    "Target ({:.2}, {:.2}, {:.2}) is not feasible, abandoning it",
                    self.target_m.x, self.target_m.y, self.target_m.z
                );
                persistant.expl_tm.num_infeasible += 1;
                return Ok(StepOutput::replace(ExplMgrState::Idle(Idle::new())));
            }
        };

        if params.visualise {
            ext.visualiser
                .visualise(TRAJECTORY_CHANNEL, &traj.positions_m(), VisColour::Black);
        }

        if params.verbose {
            info!(
                "Planned {} sample trajectory of {:.2} m to ({:.2}, {:.2}, {:.2})",
                traj.len(),
                path.get_length().unwrap_or(0.0),
                self.target_m.x,
                self.target_m.y,
                self.target_m.z
            );
        }

        Ok(StepOutput::replace(ExplMgrState::Executing(Box::new(
            Executing::new(self.target_m, traj),
        )))
        .with_cmd(first_cmd))
    }
}
