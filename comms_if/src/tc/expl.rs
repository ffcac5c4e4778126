//! # Exploration Telecommands

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// A command that can be performed by the exploration manager.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplCmd {
    /// Begin (or resume) autonomous exploration.
    Activate,

    /// Stop exploring, hold the current pose and wait for a new `Activate`.
    Deactivate,

    /// Hold the current pose and end the execution.
    Shutdown,
}
