//! General time utility functions

use chrono;

/// Number of nanoseconds in a second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Convert a duration into a number of seconds, or `None` if overflow
pub fn duration_to_seconds(duration: chrono::Duration) -> Option<f64> {
    duration
        .num_nanoseconds()
        .map(|ns| ns as f64 / NANOS_PER_SECOND as f64)
}

/// Number of whole cycles of a loop running at `rate_hz` needed to cover `duration_s`.
///
/// Always at least one cycle, so a zero duration still waits a tick.
pub fn seconds_to_cycles(duration_s: f64, rate_hz: f64) -> u64 {
    let cycles = (duration_s * rate_hz).ceil();

    if cycles.is_finite() && cycles >= 1.0 {
        cycles as u64
    }
    else {
        1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_duration_to_seconds() {
        assert_eq!(duration_to_seconds(chrono::Duration::milliseconds(1500)), Some(1.5));
        assert_eq!(duration_to_seconds(chrono::Duration::max_value()), None);
    }

    #[test]
    fn test_seconds_to_cycles() {
        assert_eq!(seconds_to_cycles(1.0, 40.0), 40);
        assert_eq!(seconds_to_cycles(0.01, 40.0), 1);
        assert_eq!(seconds_to_cycles(0.0, 40.0), 1);
        assert_eq!(seconds_to_cycles(f64::NAN, 40.0), 1);
    }
}
