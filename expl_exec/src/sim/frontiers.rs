//! # Simulated frontier source

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;
use nalgebra::Vector3;

use crate::auto::{ext::FrontierSource, frontier::Frontier};

use super::params::SimParams;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A fixed set of frontiers, each removed once the vehicle comes close enough to it.
#[derive(Debug, Clone)]
pub struct SimFrontiers {
    frontiers: Vec<Frontier>,
    reveal_radius_m: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimFrontiers {
    pub fn new(params: &SimParams) -> Self {
        Self {
            frontiers: params
                .frontiers_m
                .iter()
                .map(|f| Frontier::new(*f))
                .collect(),
            reveal_radius_m: params.reveal_radius_m,
        }
    }

    /// Remove all frontiers within the reveal radius of the position.
    pub fn visit(&mut self, position_m: &Vector3<f64>) {
        let reveal_radius_m = self.reveal_radius_m;

        self.frontiers.retain(|f| {
            let explored = (f.center_m - position_m).norm() <= reveal_radius_m;
            if explored {
                info!(
                    "Frontier at ({:.2}, {:.2}, {:.2}) explored",
                    f.center_m.x, f.center_m.y, f.center_m.z
                );
            }
            !explored
        });
    }

    pub fn num_remaining(&self) -> usize {
        self.frontiers.len()
    }
}

impl FrontierSource for SimFrontiers {
    fn find_frontiers(&mut self) -> Vec<Frontier> {
        self.frontiers.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_visit() {
        let mut source = SimFrontiers {
            frontiers: vec![
                Frontier::new(Vector3::new(1.0, 0.0, 0.0)),
                Frontier::new(Vector3::new(5.0, 0.0, 0.0)),
            ],
            reveal_radius_m: 1.5,
        };

        source.visit(&Vector3::zeros());
        assert_eq!(source.num_remaining(), 1);
        assert_eq!(
            source.find_frontiers()[0].center_m,
            Vector3::new(5.0, 0.0, 0.0)
        );
    }
}
