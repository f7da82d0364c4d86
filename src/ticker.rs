use std::time::Duration;

/// Event-poll interval in milliseconds. Shorter than the countdown second
/// so key presses stay responsive between ticks.
pub const DEFAULT_POLL_MS: u64 = 250;

/// Countdown granularity: one tick per wall-clock second
pub const COUNTDOWN_SECOND: Duration = Duration::from_secs(1);

/// Get poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_duration() {
        let duration = poll_duration();
        assert_eq!(duration, Duration::from_millis(250));
        // Must poll faster than the countdown advances
        assert!(duration < COUNTDOWN_SECOND);
    }
}
