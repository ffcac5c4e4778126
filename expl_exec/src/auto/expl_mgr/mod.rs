//! # ExplMgr module
//!
//! This module implements the [`ExplMgr`] state machine, which is responsible for exploring the
//! environment by repeatedly flying the vehicle to unexplored frontiers. The state machine is
//! broken down into a number of states:
//!
//! - `Off` - Exploration is not active.
//! - `Idle` - Choosing the next frontier, or taking the next target from the waypoint queue.
//! - `Recovering` - No frontier was available, the vehicle turns round to look the other way.
//! - `Planning` - Finding a path to the current target and converting it into a trajectory.
//! - `Executing` - Streaming the trajectory to the flight controller, one sample at a time, while
//!   checking the upcoming samples for obstacles.
//! - `Aborting` - The trajectory was unsafe or timed out, a new target is chosen.
//!
//! The manager is stepped once per control cycle and never blocks, waiting for the vehicle to
//! reach a sample is expressed by remaining in `Executing` across cycles.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod abort;
mod execute;
mod idle;
mod params;
mod plan;
mod recover;
pub mod tm;


// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::fmt::Display;

use comms_if::{eqpt::fc::PoseCmd, tc::expl::ExplCmd};
use log::{error, info, warn};
use nalgebra::Vector3;

pub use self::{execute::check_for_abort, params::ExplMgrParams, tm::ExplTm};

use super::{
    ext::{FrontierSource, Pathfinder, Visualiser},
    frontier::AttemptedSet,
    loc::{LocMgr, Pose},
    waypoint::{WaypointError, WaypointQueue},
};

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub mod states {
    pub use super::abort::Aborting;
    pub use super::execute::Executing;
    pub use super::idle::Idle;
    pub use super::plan::Planning;
    pub use super::recover::Recovering;
}

use states::*;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of cycles between "waiting for pose" warnings.
const NO_POSE_WARN_CYCLES: u64 = 200;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Exploration Manager
///
/// Owns all cross-cycle exploration state and the collaborators it queries.
pub struct ExplMgr<P, F, V> {
    /// Parameters for the ExplMgr and all it's states.
    pub params: ExplMgrParams,

    /// Persistant data of the ExplMgr.
    ///
    /// This is data which is valid over all states, such as the attempted frontier set, which
    /// must survive for the whole life of the manager.
    pub persistant: ExplMgrPersistantData,

    /// Path planner and obstacle distance source.
    pub pathfinder: P,

    /// Frontier detector.
    pub frontier_source: F,

    /// Diagnostic marker sink.
    pub visualiser: V,

    state: ExplMgrState,
}

pub struct ExplMgrPersistantData {
    /// Pending targets, the most recent is executed first.
    pub queue: WaypointQueue,

    /// Every frontier cell which has been attempted.
    pub attempted: AttemptedSet,

    /// Instance of the [`LocMgr`] module, providing the last known pose.
    pub loc_mgr: LocMgr,

    /// Telemetry packet summarising the exploration state.
    pub expl_tm: ExplTm,
}

/// Borrowed collaborators handed to a state's step function.
pub struct ExtServices<'a> {
    pub pathfinder: &'a mut dyn Pathfinder,
    pub frontier_source: &'a mut dyn FrontierSource,
    pub visualiser: &'a mut dyn Visualiser,
}

/// Output of a state's step function.
pub struct StepOutput {
    /// Action to perform on the state machine itself
    pub action: StateAction,

    /// Data to pass out of the manager
    pub data: ExplMgrOutput,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Errors that can occur in the exploration manager.
#[derive(Debug, thiserror::Error)]
pub enum ExplMgrError {
    #[error("Failed to load ExplMgrParams: {0}")]
    ParamLoadError(util::params::LoadError),

    #[error("Invalid ExplMgr parameter: {0}")]
    InvalidParam(&'static str),

    #[error("Could not get a pose from the localisation module")]
    PoseUnavailable,

    #[error("Waypoint error: {0}")]
    WaypointError(#[from] WaypointError),

    #[error("Trajectory sample {index} does not exist, the trajectory has {len} samples")]
    SampleOutOfBounds { index: usize, len: usize },
}

#[derive(Debug)]
pub enum ExplMgrState {
    Off,
    Idle(Idle),
    Recovering(Recovering),
    Planning(Planning),
    // In a box to reduce the size of the state enum
    Executing(Box<Executing>),
    Aborting(Aborting),
}

/// Actions that can be performed on the state machine at the end of a state's step function.
#[derive(Debug)]
pub enum StateAction {
    None,
    Replace(ExplMgrState),
}

/// Possible data that can be passed out of the manager's step function.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplMgrOutput {
    /// No action required by the flight controller
    None,

    /// Pose command to send to the flight controller
    PoseCmd(PoseCmd),

    /// The manager has been told to shut down. Carries the hold command, if a pose is known.
    Shutdown(Option<PoseCmd>),
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Remove the no-target sentinel.
///
/// A missing target, or one within a voxel of the origin, means no frontier is worth exploring.
pub(crate) fn reject_sentinel(
    target_m: Option<Vector3<f64>>,
    voxel_size_m: f64,
) -> Option<Vector3<f64>> {
    target_m.filter(|t| t.norm() >= voxel_size_m)
}

/// Command to hold the vehicle at the given pose.
pub(crate) fn hold_cmd(pose: &Pose) -> PoseCmd {
    PoseCmd::new(pose.position_m, pose.get_heading())
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<P, F, V> ExplMgr<P, F, V>
where
    P: Pathfinder,
    F: FrontierSource,
    V: Visualiser,
{
    /// Create a new manager from a parameter file, relative to the params directory.
    pub fn init(
        params_path: &str,
        pathfinder: P,
        frontier_source: F,
        visualiser: V,
    ) -> Result<Self, ExplMgrError> {
        let params: ExplMgrParams =
            util::params::load(params_path).map_err(ExplMgrError::ParamLoadError)?;

        Self::new(params, pathfinder, frontier_source, visualiser)
    }

    /// Create a new manager in the `Off` state.
    pub fn new(
        params: ExplMgrParams,
        pathfinder: P,
        frontier_source: F,
        visualiser: V,
    ) -> Result<Self, ExplMgrError> {
        if !(params.voxel_size_m > 0.0) {
            return Err(ExplMgrError::InvalidParam("voxel_size_m must be positive"));
        }
        if !(params.command_rate_hz > 0.0) {
            return Err(ExplMgrError::InvalidParam("command_rate_hz must be positive"));
        }
        if params.abort_lookahead == 0 {
            return Err(ExplMgrError::InvalidParam("abort_lookahead must be at least 1"));
        }

        Ok(Self {
            persistant: ExplMgrPersistantData::new(params.voxel_size_m),
            params,
            pathfinder,
            frontier_source,
            visualiser,
            state: ExplMgrState::Off,
        })
    }

    /// Step the manager through one control cycle.
    ///
    /// `pose` is the freshest pose from odometry, or `None` if no new pose arrived this cycle.
    pub fn step(
        &mut self,
        cmd: Option<ExplCmd>,
        pose: Option<Pose>,
    ) -> Result<ExplMgrOutput, ExplMgrError> {
        self.persistant.loc_mgr.update(pose);

        if let Some(output) = self.handle_cmd(cmd) {
            self.update_tm();
            return Ok(output);
        }

        if self.is_off() {
            return Ok(ExplMgrOutput::None);
        }

        // Nothing can be done until odometry has been received at least once
        if self.persistant.loc_mgr.get_pose().is_none() {
            let num_stale = self.persistant.loc_mgr.num_stale_cycles();
            if num_stale % NO_POSE_WARN_CYCLES == 1 {
                warn!("ExplMgr is active but no pose has been received yet");
            }
            return Ok(ExplMgrOutput::None);
        }

        let mut ext = ExtServices {
            pathfinder: &mut self.pathfinder,
            frontier_source: &mut self.frontier_source,
            visualiser: &mut self.visualiser,
        };

        let output = self.state.step(&self.params, &mut self.persistant, &mut ext);

        if let StateAction::Replace(s) = output.action {
            info!("ExplMgr state change: {} -> {}", self.state, s);
            self.state = s;
        }

        self.update_tm();

        Ok(output.data)
    }

    pub fn is_off(&self) -> bool {
        matches!(self.state, ExplMgrState::Off)
    }

    pub fn state(&self) -> &ExplMgrState {
        &self.state
    }

    pub fn get_tm(&self) -> ExplTm {
        self.persistant.expl_tm.clone()
    }

    /// Handle a command, returning `Some` if the command produced this cycle's output.
    fn handle_cmd(&mut self, cmd: Option<ExplCmd>) -> Option<ExplMgrOutput> {
        let cmd = cmd?;
        let hold = self.persistant.loc_mgr.get_pose().map(|p| hold_cmd(&p));

        match (cmd, self.is_off()) {
            (ExplCmd::Activate, true) => {
                info!("ExplMgr activated");
                self.state = ExplMgrState::Idle(Idle::new());
                None
            }
            (ExplCmd::Activate, false) => {
                warn!("ExplMgr is already active, ignoring Activate");
                None
            }
            (ExplCmd::Deactivate, true) => {
                warn!("ExplMgr is already off, ignoring Deactivate");
                None
            }
            (ExplCmd::Deactivate, false) => {
                info!("ExplMgr deactivated in state {}", self.state);
                self.state = ExplMgrState::Off;
                Some(match hold {
                    Some(h) => ExplMgrOutput::PoseCmd(h),
                    None => ExplMgrOutput::None,
                })
            }
            (ExplCmd::Shutdown, _) => {
                info!("ExplMgr shutting down");
                self.state = ExplMgrState::Off;
                Some(ExplMgrOutput::Shutdown(hold))
            }
        }
    }

    fn update_tm(&mut self) {
        let tm = &mut self.persistant.expl_tm;

        tm.state = self.state.to_string();
        tm.pose = self.persistant.loc_mgr.get_pose();
        tm.queue_len = self.persistant.queue.len();
        tm.num_attempted = self.persistant.attempted.len();

        match &self.state {
            ExplMgrState::Planning(p) => {
                tm.target_m = Some(p.target_m);
                tm.traj_m = None;
                tm.sample_index = None;
            }
            ExplMgrState::Executing(e) => {
                tm.target_m = Some(e.target_m);
                tm.traj_m = Some(e.traj.positions_m());
                tm.sample_index = Some(e.index);
            }
            _ => {
                tm.target_m = None;
                tm.traj_m = None;
                tm.sample_index = None;
            }
        }
    }
}

impl Display for ExplMgrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExplMgrState::Off => write!(f, "ExplMgrState::Off"),
            ExplMgrState::Idle(_) => write!(f, "ExplMgrState::Idle"),
            ExplMgrState::Recovering(_) => write!(f, "ExplMgrState::Recovering"),
            ExplMgrState::Planning(_) => write!(f, "ExplMgrState::Planning"),
            ExplMgrState::Executing(_) => write!(f, "ExplMgrState::Executing"),
            ExplMgrState::Aborting(_) => write!(f, "ExplMgrState::Aborting"),
        }
    }
}

impl ExplMgrState {
    fn step(
        &mut self,
        params: &ExplMgrParams,
        persistant: &mut ExplMgrPersistantData,
        ext: &mut ExtServices,
    ) -> StepOutput {
        let out = match self {
            ExplMgrState::Off => Ok(StepOutput::none()),
            ExplMgrState::Idle(idle) => idle.step(params, persistant, ext),
            ExplMgrState::Recovering(recover) => recover.step(params, persistant, ext),
            ExplMgrState::Planning(plan) => plan.step(params, persistant, ext),
            ExplMgrState::Executing(exec) => exec.step(params, persistant, ext),
            ExplMgrState::Aborting(abort) => abort.step(params, persistant, ext),
        };

        // If an output is an error, we print it to the screen but we actually go back to Idle,
        // keeping the system working
        match out {
            Ok(o) => o,
            Err(e) => {
                error!("{}", e);
                StepOutput {
                    action: StateAction::Replace(ExplMgrState::Idle(Idle::new())),
                    data: ExplMgrOutput::None,
                }
            }
        }
    }
}

impl ExplMgrPersistantData {
    pub fn new(voxel_size_m: f64) -> Self {
        Self {
            queue: WaypointQueue::new(),
            attempted: AttemptedSet::new(voxel_size_m),
            loc_mgr: LocMgr::new(),
            expl_tm: ExplTm::default(),
        }
    }

    /// Get the last known pose.
    pub fn pose(&self) -> Result<Pose, ExplMgrError> {
        self.loc_mgr.get_pose().ok_or(ExplMgrError::PoseUnavailable)
    }
}

impl StepOutput {
    pub fn none() -> Self {
        Self {
            action: StateAction::None,
            data: ExplMgrOutput::None,
        }
    }

    /// Move to a new state without any output.
    pub fn replace(state: ExplMgrState) -> Self {
        Self {
            action: StateAction::Replace(state),
            data: ExplMgrOutput::None,
        }
    }

    pub fn with_cmd(mut self, cmd: PoseCmd) -> Self {
        self.data = ExplMgrOutput::PoseCmd(cmd);
        self
    }
}

impl ExplMgrOutput {
    /// The pose command carried by this output, if any.
    pub fn pose_cmd(&self) -> Option<&PoseCmd> {
        match self {
            ExplMgrOutput::PoseCmd(c) => Some(c),
            ExplMgrOutput::Shutdown(c) => c.as_ref(),
            ExplMgrOutput::None => None,
        }
    }
}
