//! # Defines Telemetry Pack for Exploration

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::auto::loc::Pose;

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExplTm {
    pub state: String,
    pub pose: Option<Pose>,

    /// The target currently being planned for or flown to.
    pub target_m: Option<Vector3<f64>>,

    /// Positions of the trajectory being executed.
    pub traj_m: Option<Vec<Vector3<f64>>>,
    pub sample_index: Option<usize>,

    pub queue_len: usize,
    pub num_attempted: usize,

    pub num_targets_reached: u64,
    pub num_infeasible: u64,
    pub num_aborts: u64,
    pub num_recoveries: u64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tm_json() {
        let tm = ExplTm {
            state: String::from("ExplMgrState::Executing"),
            pose: Some(Pose::from_parts(Vector3::new(1.0, 2.0, 3.0), 0.5)),
            target_m: Some(Vector3::new(10.0, 0.0, 0.0)),
            sample_index: Some(3),
            num_aborts: 2,
            ..Default::default()
        };

        let json = serde_json::to_value(&tm).unwrap();
        assert_eq!(json["state"], "ExplMgrState::Executing");
        assert_eq!(json["target_m"], serde_json::json!([10.0, 0.0, 0.0]));
        assert_eq!(json["traj_m"], serde_json::Value::Null);
        assert_eq!(json["num_aborts"], 2);

        let back: ExplTm = serde_json::from_value(json).unwrap();
        assert_eq!(back.pose, tm.pose);
        assert_eq!(back.sample_index, Some(3));
    }
}
