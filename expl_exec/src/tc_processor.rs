//! # Telecommand processor module
//!
//! The telecommand processor handles various TCs coming from any source.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use comms_if::tc::Tc;
use expl_lib::data_store::DataStore;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute a telecommand.
///
/// Mutates the datastore to send commands to different modules.
pub(crate) fn exec(ds: &mut DataStore, tc: &Tc) {

    // Handle different Tcs
    match tc {
        Tc::Heartbeat => {
            debug!("Recieved Heartbeat");
            ds.last_heartbeat_s = Some(ds.sim_time_s);
        },
        Tc::Expl(c) => {
            debug!("Recieved exploration command: {:?}", c);
            ds.set_expl_cmd(*c);
        }
    }

}

#[cfg(test)]
mod test {
    use super::*;
    use comms_if::tc::expl::ExplCmd;

    #[test]
    fn test_exec() {
        let mut ds = DataStore::default();
        ds.sim_time_s = 2.5;

        exec(&mut ds, &Tc::Heartbeat);
        assert_eq!(ds.last_heartbeat_s, Some(2.5));
        assert_eq!(ds.expl_cmd, None);

        exec(&mut ds, &Tc::Expl(ExplCmd::Deactivate));
        assert_eq!(ds.expl_cmd, Some(ExplCmd::Deactivate));
    }
}
