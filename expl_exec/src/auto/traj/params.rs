//! # Trajectory synthesis parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use super::yaw::YawPolicy;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters for trajectory synthesis
#[derive(Debug, Clone, Deserialize)]
pub struct TrajParams {
    /// The policy used to assign headings to the trajectory samples
    pub yaw_policy: YawPolicy,

    /// Heading used by [`YawPolicy::Constant`]
    #[serde(default = "default_const_yaw_rad")]
    pub const_yaw_rad: f64,

    /// Minimum planar velocity norm above which a sample's velocity defines its heading
    #[serde(default = "default_min_velocity_norm_ms")]
    pub min_velocity_norm_ms: f64,
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn default_const_yaw_rad() -> f64 {
    3.14
}

fn default_min_velocity_norm_ms() -> f64 {
    0.1
}

impl Default for TrajParams {
    fn default() -> Self {
        Self {
            yaw_policy: YawPolicy::PointFacing,
            const_yaw_rad: default_const_yaw_rad(),
            min_velocity_norm_ms: default_min_velocity_norm_ms(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_from_toml() {
        let params: TrajParams = toml::from_str("yaw_policy = \"FollowVelocity\"").unwrap();

        assert_eq!(params.yaw_policy, YawPolicy::FollowVelocity);
        assert_eq!(params.const_yaw_rad, 3.14);
        assert_eq!(params.min_velocity_norm_ms, 0.1);
    }
}
