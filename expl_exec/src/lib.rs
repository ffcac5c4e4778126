//! # Exploration library.
//!
//! This library allows other crates in the workspace, and the benchmarks, to access items defined
//! inside the exploration crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Autonomy module - frontier selection, trajectories and the exploration manager
pub mod auto;

/// Global data store of the executable
pub mod data_store;

/// Simulated vehicle and environment
pub mod sim;

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use auto::loc;
