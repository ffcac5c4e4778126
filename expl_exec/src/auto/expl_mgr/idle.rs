//! # [`Idle`] ExplMgr state
//!
//! Decides what to do next. With an empty waypoint queue a new frontier is selected, otherwise
//! the most recent target is taken from the queue and planned for.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::f64::consts::PI;

use comms_if::eqpt::fc::PoseCmd;
use log::info;
use nalgebra::Vector3;
use util::maths::wrap_pi;

use crate::auto::select::select_best;

use super::{
    params::ExplMgrParams,
    reject_sentinel,
    states::{Planning, Recovering},
    ExplMgrError, ExplMgrPersistantData, ExplMgrState, ExtServices, StepOutput,
};

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct Idle;

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl Idle {
    pub fn new() -> Self {
        Self
    }

    pub fn step(
        &mut self,
        params: &ExplMgrParams,
        persistant: &mut ExplMgrPersistantData,
        ext: &mut ExtServices,
    ) -> Result<StepOutput, ExplMgrError> {
        let pose = persistant.pose()?;

        // Pending target, plan for it
        if !persistant.queue.is_empty() {
            let target_m = persistant.queue.pop_next()?;

            // Marked straight away so a target which can't be reached is never retried
            persistant.attempted.mark(target_m);

            return Ok(StepOutput::replace(ExplMgrState::Planning(Planning::new(
                target_m,
            ))));
        }

        let frontiers = ext.frontier_source.find_frontiers();
        if params.verbose {
            info!("{} frontiers available", frontiers.len());
        }

        let best = select_best(
            &pose.position_m,
            pose.get_heading(),
            &frontiers,
            &persistant.attempted,
        );

        match reject_sentinel(best, params.voxel_size_m) {
            Some(target_m) => {
                persistant.queue.push(target_m);
                if params.verbose {
                    info!(
                        "Pursuing new frontier ({:.2}, {:.2}, {:.2})",
                        target_m.x, target_m.y, target_m.z
                    );
                }
                Ok(StepOutput::none())
            }
            None => {
                info!("No frontier to explore, turning round to look for more");

                // Whatever was rejected is never selected again
                persistant.attempted.mark(best.unwrap_or_else(Vector3::zeros));
                persistant.expl_tm.num_recoveries += 1;

                let reverse = PoseCmd::new(pose.position_m, wrap_pi(pose.get_heading() + PI));

                Ok(
                    StepOutput::replace(ExplMgrState::Recovering(Recovering::new(&pose, params)))
                        .with_cmd(reverse),
                )
            }
        }
    }
}
