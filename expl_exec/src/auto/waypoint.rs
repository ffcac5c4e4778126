//! # Waypoint sequencing
//!
//! A small last-in-first-out queue of pending exploration targets. The most recently decided
//! target is executed first, so replanning targets take priority over older pending ones.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::Vector3;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct WaypointQueue {
    waypoints_m: Vec<Vector3<f64>>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum WaypointError {
    #[error("Attempted to pop a waypoint from an empty queue")]
    Empty,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl WaypointQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new target. Duplicates are allowed.
    pub fn push(&mut self, waypoint_m: Vector3<f64>) {
        self.waypoints_m.push(waypoint_m)
    }

    /// Remove and return the most recently pushed target.
    pub fn pop_next(&mut self) -> Result<Vector3<f64>, WaypointError> {
        self.waypoints_m.pop().ok_or(WaypointError::Empty)
    }

    /// The target which would be returned by the next [`WaypointQueue::pop_next`].
    pub fn peek(&self) -> Option<&Vector3<f64>> {
        self.waypoints_m.last()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints_m.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints_m.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);

        let mut queue = WaypointQueue::new();
        queue.push(a);
        queue.push(b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek(), Some(&b));

        assert_eq!(queue.pop_next().unwrap(), b);
        assert_eq!(queue.pop_next().unwrap(), a);
        assert!(queue.is_empty());
        assert!(matches!(queue.pop_next(), Err(WaypointError::Empty)));
    }

    #[test]
    fn test_duplicates_kept() {
        let a = Vector3::new(1.0, 2.0, 3.0);

        let mut queue = WaypointQueue::new();
        queue.push(a);
        queue.push(a);

        assert_eq!(queue.pop_next().unwrap(), a);
        assert_eq!(queue.pop_next().unwrap(), a);
        assert!(queue.is_empty());
    }
}
