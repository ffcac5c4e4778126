//! # Simulation parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SimParams {
    /// Initial position of the vehicle
    pub start_position_m: Vector3<f64>,

    /// Initial heading of the vehicle
    #[serde(default)]
    pub start_heading_rad: f64,

    /// Maximum speed of the vehicle
    pub max_speed_ms: f64,

    /// Maximum rate of change of heading of the vehicle
    pub max_yaw_rate_rads: f64,

    /// Maximum separation between points in the planned paths
    pub path_point_sep_m: f64,

    /// Obstacles closer than this to the vehicle become known
    pub sensor_range_m: f64,

    /// Frontiers closer than this to the vehicle are considered explored
    pub reveal_radius_m: f64,

    /// Simulation stops after this many recoveries with no frontiers left
    pub max_idle_recoveries: u64,

    /// Simulation stops after this long regardless of progress
    pub max_duration_s: f64,

    /// Period between telemetry saves
    pub tm_save_period_s: f64,

    #[serde(default)]
    pub obstacles: Vec<SimObstacle>,

    #[serde(default)]
    pub frontiers_m: Vec<Vector3<f64>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SimObstacle {
    pub center_m: Vector3<f64>,
    pub radius_m: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialise() {
        let params: SimParams = toml::from_str(
            r#"
            start_position_m = [0.0, 0.0, 1.5]
            max_speed_ms = 2.0
            max_yaw_rate_rads = 1.0
            path_point_sep_m = 0.5
            sensor_range_m = 4.0
            reveal_radius_m = 1.0
            max_idle_recoveries = 3
            max_duration_s = 120.0
            tm_save_period_s = 1.0
            frontiers_m = [[10.0, 0.0, 1.5], [-4.0, 6.0, 1.5]]

            [[obstacles]]
            center_m = [5.0, 0.0, 1.5]
            radius_m = 0.8
            "#,
        )
        .unwrap();

        assert_eq!(params.start_position_m, Vector3::new(0.0, 0.0, 1.5));
        assert_eq!(params.start_heading_rad, 0.0);
        assert_eq!(params.frontiers_m.len(), 2);
        assert_eq!(params.obstacles.len(), 1);
        assert_eq!(params.obstacles[0].radius_m, 0.8);
    }
}
