//! # Marker recorder

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::collections::BTreeMap;

use comms_if::eqpt::vis::{VisColour, VisMarkers};
use nalgebra::Vector3;

use crate::auto::ext::Visualiser;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Scale given to recorded markers.
const MARKER_SCALE_M: f64 = 0.2;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Visualiser which keeps the most recent markers sent on each channel, so they can be saved
/// into the session.
#[derive(Debug, Clone, Default)]
pub struct MarkerRecorder {
    latest: BTreeMap<String, VisMarkers>,
    num_updates: u64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl MarkerRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest markers of every channel, ordered by channel name.
    pub fn markers(&self) -> Vec<VisMarkers> {
        self.latest.values().cloned().collect()
    }

    pub fn num_updates(&self) -> u64 {
        self.num_updates
    }
}

impl Visualiser for MarkerRecorder {
    fn visualise(&mut self, channel: &str, points_m: &[Vector3<f64>], colour: VisColour) {
        self.num_updates += 1;
        self.latest.insert(
            channel.to_string(),
            VisMarkers {
                channel: channel.to_string(),
                points_m: points_m.to_vec(),
                colour,
                scale_m: MARKER_SCALE_M,
            },
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_latest_kept() {
        let mut rec = MarkerRecorder::new();

        rec.visualise("occupied_path", &[Vector3::zeros()], VisColour::Red);
        rec.visualise("free_path", &[], VisColour::Green);
        rec.visualise("occupied_path", &[], VisColour::Red);

        let markers = rec.markers();
        assert_eq!(rec.num_updates(), 3);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].channel, "free_path");
        assert!(markers[1].points_m.is_empty());
    }
}
