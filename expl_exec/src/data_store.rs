//! # Data Store

use comms_if::{eqpt::fc::PoseCmd, tc::expl::ExplCmd};
use log::warn;

use crate::auto::expl_mgr::ExplTm;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u64,

    /// True if this cycle falls on a 1Hz boundary
    pub is_1_hz_cycle: bool,

    /// Simulation elapsed time
    pub sim_time_s: f64,

    /// Simulation time at which the last heartbeat TC was received
    pub last_heartbeat_s: Option<f64>,

    // Exploration
    pub expl_cmd: Option<ExplCmd>,

    pub expl_tm: Option<ExplTm>,

    /// Command output by the exploration manager this cycle
    pub pose_cmd: Option<PoseCmd>,

    /// Set once the exploration manager has acknowledged a shutdown
    pub shutdown: bool,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Perform actions required at the start of a cycle.
    ///
    /// Clears those items that need clearing at the start of a cycle, and sets the 1Hz cycle flag.
    pub fn cycle_start(&mut self, cycle_frequency_hz: f64) {
        let cycles_per_second = (cycle_frequency_hz.round() as u64).max(1);

        self.is_1_hz_cycle = self.num_cycles % cycles_per_second == 0;

        self.expl_cmd = None;
        self.pose_cmd = None;

        self.sim_time_s = self.num_cycles as f64 / cycle_frequency_hz;
    }

    /// Perform actions required at the end of a cycle.
    pub fn cycle_end(&mut self) {
        self.num_cycles += 1;
    }

    /// Set the exploration command for this cycle. Only one command can be executed per cycle,
    /// the latest one wins.
    pub fn set_expl_cmd(&mut self, cmd: ExplCmd) {
        if let Some(prev) = self.expl_cmd.replace(cmd) {
            warn!(
                "Multiple exploration commands this cycle, {:?} replaced by {:?}",
                prev, cmd
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cycle_management() {
        let mut ds = DataStore::default();

        ds.cycle_start(40.0);
        assert!(ds.is_1_hz_cycle);
        assert_eq!(ds.sim_time_s, 0.0);
        ds.set_expl_cmd(ExplCmd::Activate);
        ds.cycle_end();

        ds.cycle_start(40.0);
        assert!(!ds.is_1_hz_cycle);
        assert_eq!(ds.sim_time_s, 0.025);
        assert_eq!(ds.expl_cmd, None);

        ds.set_expl_cmd(ExplCmd::Activate);
        ds.set_expl_cmd(ExplCmd::Shutdown);
        assert_eq!(ds.expl_cmd, Some(ExplCmd::Shutdown));

        for _ in 0..40 {
            ds.cycle_end();
        }
        ds.cycle_start(40.0);
        assert!(ds.is_1_hz_cycle);
    }
}
