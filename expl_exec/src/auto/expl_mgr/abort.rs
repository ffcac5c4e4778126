//! # [`Aborting`] ExplMgr state
//!
//! The trajectory to the current target was abandoned. A replacement target is selected straight
//! away, ignoring the waypoint queue, and the abandoned target is marked as attempted so it is
//! not chosen again.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use log::info;
use nalgebra::Vector3;

use crate::auto::select::select_best;

use super::{
    params::ExplMgrParams, reject_sentinel, states::Idle, ExplMgrError, ExplMgrPersistantData,
    ExplMgrState, ExtServices, StepOutput,
};

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct Aborting {
    aborted_target_m: Vector3<f64>,
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl Aborting {
    pub fn new(aborted_target_m: Vector3<f64>) -> Self {
        Self { aborted_target_m }
    }

    pub fn step(
        &mut self,
        params: &ExplMgrParams,
        persistant: &mut ExplMgrPersistantData,
        ext: &mut ExtServices,
    ) -> Result<StepOutput, ExplMgrError> {
        let pose = persistant.pose()?;

        let frontiers = ext.frontier_source.find_frontiers();
        let best = select_best(
            &pose.position_m,
            pose.get_heading(),
            &frontiers,
            &persistant.attempted,
        );

        if let Some(target_m) = reject_sentinel(best, params.voxel_size_m) {
            info!(
                "Replanning to ({:.2}, {:.2}, {:.2})",
                target_m.x, target_m.y, target_m.z
            );
            persistant.queue.push(target_m);
        }

        persistant.attempted.mark(self.aborted_target_m);

        Ok(StepOutput::replace(ExplMgrState::Idle(Idle::new())))
    }
}
