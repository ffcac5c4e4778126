//! # Communications interface crate.
//!
//! Provides all common command and message definitions shared between the exploration executive
//! and the equipment it drives.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

pub mod tc;

/// Command and message definitions for equipment (like the flight controller)
pub mod eqpt;
