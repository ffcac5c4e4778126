//! Main exploration executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise all modules
//!     - Main loop:
//!         - System input acquisition:
//!             - Vehicle pose
//!             - Obstacle sensing and frontier discovery
//!         - Telecommand processing and handling
//!         - Exploration processing:
//!             - Frontier selection
//!             - Path planning and trajectory synthesis
//!             - Trajectory execution and abort checking
//!         - Vehicle command
//!         - Telemetry
//!
//! The vehicle and its environment are provided by the simulated world in `expl_lib::sim`.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use comms_if::tc::expl::ExplCmd;
use expl_lib::{
    auto::expl_mgr::{ExplMgr, ExplMgrOutput},
    data_store::DataStore,
    sim::{MarkerRecorder, SimFrontiers, SimMap, SimParams, SimVehicle},
};

mod tc_processor;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use structopt::StructOpt;

// Internal
use util::{
    logger::{logger_init, LevelFilter},
    script_interpreter::{PendingTcs, ScriptInterpreter},
    session::Session,
    time::seconds_to_cycles,
};

// ---------------------------------------------------------------------------
// STRUCTS
// ---------------------------------------------------------------------------

/// Command line options of the executable.
#[derive(Debug, StructOpt)]
#[structopt(name = "expl_exec", about = "Frontier exploration executable")]
struct Opts {
    /// Telecommand script to execute. If not given exploration is activated immediately.
    #[structopt(short, long, parse(from_os_str))]
    script: Option<PathBuf>,

    /// Run the simulation as fast as possible rather than in real time.
    #[structopt(long)]
    fast: bool,

    /// Exploration manager parameters, relative to the params directory.
    #[structopt(long, default_value = "expl_mgr.toml")]
    expl_params: String,

    /// Simulation parameters, relative to the params directory.
    #[structopt(long, default_value = "expl_sim.toml")]
    sim_params: String,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("expl_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Frontier Exploration Executable\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI options: {:?}", opts);

    // ---- LOAD PARAMETERS ----

    let sim_params: SimParams =
        util::params::load(&opts.sim_params).wrap_err("Could not load sim params")?;

    info!("Exec parameters loaded");

    // ---- INITIALISE TC SOURCE ----

    let mut tc_source = match opts.script {
        Some(ref path) => {
            info!("Loading script from {:?}", path);

            let si = ScriptInterpreter::new(path).wrap_err("Failed to load script")?;

            info!(
                "Loaded script lasts {:.02} s and contains {} TCs\n",
                si.get_duration(),
                si.get_num_tcs()
            );

            TcSource::Script(si)
        }
        None => {
            info!("No script provided, exploration will be activated immediately\n");
            TcSource::AutoActivate
        }
    };

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    let mut vehicle = SimVehicle::new(&sim_params);

    let mut expl_mgr = ExplMgr::init(
        &opts.expl_params,
        SimMap::new(&sim_params),
        SimFrontiers::new(&sim_params),
        MarkerRecorder::new(),
    )
    .wrap_err("Failed to initialise ExplMgr")?;
    info!("ExplMgr init complete");

    info!("Module initialisation complete\n");

    let cycle_frequency_hz = expl_mgr.params.command_rate_hz;
    let cycle_period_s = 1.0 / cycle_frequency_hz;
    let tm_save_cycles = seconds_to_cycles(sim_params.tm_save_period_s, cycle_frequency_hz);

    // Number of recoveries when the last frontier was explored
    let mut recoveries_at_exhaustion: Option<u64> = None;

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start(cycle_frequency_hz);

        // ---- DATA INPUT ----

        let pose = vehicle.pose();
        expl_mgr.pathfinder.sense(&pose.position_m);
        expl_mgr.frontier_source.visit(&pose.position_m);

        // ---- TELECOMMAND PROCESSING ----

        let mut end_of_script = false;

        match tc_source {
            TcSource::None => (),
            TcSource::AutoActivate => {
                if ds.num_cycles == 0 {
                    ds.set_expl_cmd(ExplCmd::Activate);
                }
            }
            TcSource::Script(ref mut si) => match si.get_pending_tcs(ds.sim_time_s) {
                PendingTcs::None => (),
                PendingTcs::Some(tc_vec) => {
                    for tc in tc_vec.iter() {
                        tc_processor::exec(&mut ds, tc);
                    }
                }
                PendingTcs::EndOfScript => end_of_script = true,
            },
        }

        if end_of_script {
            info!("End of TC script reached");
            tc_source = TcSource::None;
        }

        // ---- RUN LIMITS ----

        let tm = expl_mgr.get_tm();

        if expl_mgr.frontier_source.num_remaining() == 0 && recoveries_at_exhaustion.is_none() {
            info!("All frontiers explored");
            recoveries_at_exhaustion = Some(tm.num_recoveries);
        }

        if let Some(n) = recoveries_at_exhaustion {
            if tm.num_recoveries >= n + sim_params.max_idle_recoveries && !ds.shutdown {
                info!(
                    "No new frontiers after {} recoveries, shutting down",
                    sim_params.max_idle_recoveries
                );
                ds.set_expl_cmd(ExplCmd::Shutdown);
            }
        }

        if ds.sim_time_s >= sim_params.max_duration_s {
            warn!(
                "Maximum duration of {:.1} s reached, shutting down",
                sim_params.max_duration_s
            );
            ds.set_expl_cmd(ExplCmd::Shutdown);
        }

        // ---- EXPLORATION PROCESSING ----

        match expl_mgr.step(ds.expl_cmd, Some(pose)) {
            Ok(ExplMgrOutput::None) => (),
            Ok(ExplMgrOutput::PoseCmd(cmd)) => ds.pose_cmd = Some(cmd),
            Ok(ExplMgrOutput::Shutdown(cmd)) => {
                ds.pose_cmd = cmd;
                ds.shutdown = true;
            }
            // ExplMgr errors don't stop the vehicle, so issue a warning and continue.
            Err(e) => warn!("Error during ExplMgr processing: {}", e),
        }

        ds.expl_tm = Some(expl_mgr.get_tm());

        // ---- VEHICLE COMMAND ----

        if let Some(cmd) = ds.pose_cmd {
            vehicle.command(cmd);
        }
        vehicle.update(cycle_period_s);

        // ---- TELEMETRY ----

        if ds.num_cycles % tm_save_cycles == 0 {
            if let Some(ref tm) = ds.expl_tm {
                util::session::save_with_timestamp("expl_tm/expl_tm.json", tm.clone());
            }
        }

        if ds.is_1_hz_cycle {
            if let Some(ref tm) = ds.expl_tm {
                debug!(
                    "{}: {} frontiers remaining, {} targets reached, {} aborts",
                    tm.state,
                    expl_mgr.frontier_source.num_remaining(),
                    tm.num_targets_reached,
                    tm.num_aborts
                );
            }
        }

        if ds.shutdown {
            info!("ExplMgr shut down, stopping");
            break;
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        if !opts.fast {
            match Duration::from_secs_f64(cycle_period_s).checked_sub(cycle_dur) {
                Some(d) => {
                    ds.num_consec_cycle_overruns = 0;
                    thread::sleep(d);
                }
                None => {
                    warn!(
                        "Cycle overran by {:.06} s",
                        cycle_dur.as_secs_f64() - cycle_period_s
                    );
                    ds.num_consec_cycle_overruns += 1;
                }
            }
        }

        ds.cycle_end();
    }

    // ---- SHUTDOWN ----

    if let Some(tm) = ds.expl_tm {
        info!(
            "Exploration finished after {:.1} s: {} targets reached, {} infeasible, {} aborts, {} \
            recoveries, {} frontiers attempted, {} obstacles detected",
            ds.sim_time_s,
            tm.num_targets_reached,
            tm.num_infeasible,
            tm.num_aborts,
            tm.num_recoveries,
            tm.num_attempted,
            expl_mgr.pathfinder.num_known()
        );
        session.save("expl_tm_final.json", tm);
    }

    session.save("vis_markers.json", expl_mgr.visualiser.markers());

    session.exit();

    info!("End of execution");

    Ok(())
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Various sources for the telecommands incoming to the exec.
enum TcSource {
    None,
    AutoActivate,
    Script(ScriptInterpreter),
}
