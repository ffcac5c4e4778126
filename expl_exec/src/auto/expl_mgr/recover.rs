//! # [`Recovering`] ExplMgr state
//!
//! Entered when no frontier is available. The vehicle has been commanded to face the opposite
//! way, after a dwell it is returned to the heading it had before, and `Idle` looks again.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use comms_if::eqpt::fc::PoseCmd;
use log::debug;
use nalgebra::Vector3;
use util::time::seconds_to_cycles;

use crate::auto::loc::Pose;

use super::{
    params::ExplMgrParams, states::Idle, ExplMgrError, ExplMgrPersistantData, ExplMgrState,
    ExtServices, StepOutput,
};

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct Recovering {
    /// Position when recovery started
    origin_m: Vector3<f64>,

    /// Heading when recovery started
    origin_heading_rad: f64,

    /// Cycles left before the original heading is restored
    dwell_cycles_remaining: u64,
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl Recovering {
    pub fn new(pose: &Pose, params: &ExplMgrParams) -> Self {
        Self {
            origin_m: pose.position_m,
            origin_heading_rad: pose.get_heading(),
            dwell_cycles_remaining: seconds_to_cycles(
                params.recovery_dwell_s,
                params.command_rate_hz,
            ),
        }
    }

    pub fn step(
        &mut self,
        _params: &ExplMgrParams,
        _persistant: &mut ExplMgrPersistantData,
        _ext: &mut ExtServices,
    ) -> Result<StepOutput, ExplMgrError> {
        self.dwell_cycles_remaining = self.dwell_cycles_remaining.saturating_sub(1);

        if self.dwell_cycles_remaining > 0 {
            return Ok(StepOutput::none());
        }

        debug!("Recovery dwell complete, restoring original heading");

        Ok(
            StepOutput::replace(ExplMgrState::Idle(Idle::new()))
                .with_cmd(PoseCmd::new(self.origin_m, self.origin_heading_rad)),
        )
    }
}
