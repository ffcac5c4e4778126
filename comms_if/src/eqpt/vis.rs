//! # Visualisation Messages
//!
//! Point markers sent to a diagnostic visualiser. Nothing in the control loop depends on these
//! being received.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A set of points to draw on a named channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisMarkers {
    /// Name of the channel, for example `"occupied_path"`.
    pub channel: String,

    /// The points in the world frame.
    pub points_m: Vec<Vector3<f64>>,

    pub colour: VisColour,

    /// Marker scale in meters.
    pub scale_m: f64,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisColour {
    Red,
    Green,
    Black,
}
