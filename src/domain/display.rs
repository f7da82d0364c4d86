use crate::domain::timer::FocusTimer;

/// Radius of the progress ring the stroke offset is computed against
pub const RING_RADIUS: f64 = 45.0;

/// Growth cue threshold: the tree starts visibly growing past 50%
pub const GROWTH_THRESHOLD: f64 = 0.5;

/// Format remaining time as zero-padded "MM:SS"
pub fn format_clock(remaining_secs: u32) -> String {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Fraction of the session already elapsed, in [0, 1].
/// The remaining <= duration invariant keeps this clamped.
pub fn progress(timer: &FocusTimer) -> f64 {
    let duration = timer.duration_secs();
    if duration == 0 {
        return 0.0;
    }
    f64::from(duration - timer.remaining_secs()) / f64::from(duration)
}

pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// Stroke offset of the progress ring: full circumference at 0% progress,
/// zero at 100%
pub fn ring_offset(progress: f64) -> f64 {
    ring_circumference() * (1.0 - progress)
}

/// How many of `segments` ring cells are filled, derived from the stroke
/// offset so the terminal ring tracks the circle geometry exactly
pub fn ring_filled_cells(progress: f64, segments: usize) -> usize {
    let drawn = ring_circumference() - ring_offset(progress);
    let filled = (drawn / ring_circumference() * segments as f64).round() as usize;
    filled.min(segments)
}

/// Whether the growth visual cue is active. Derived from progress, so it
/// clears on reset/configure without separate bookkeeping.
pub fn growth_cue(progress: f64) -> bool {
    progress > GROWTH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_clock_zero_pads() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_progress_monotone_while_ticking() {
        let mut timer = FocusTimer::new(1);
        timer.start();
        let mut last = progress(&timer);
        assert_eq!(last, 0.0);
        for _ in 0..60 {
            timer.tick();
            let now = progress(&timer);
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_progress_resets_to_zero() {
        let mut timer = FocusTimer::new(2);
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert!(progress(&timer) > 0.0);
        timer.reset();
        assert_eq!(progress(&timer), 0.0);
        timer.start();
        timer.tick();
        timer.configure(5).unwrap();
        assert_eq!(progress(&timer), 0.0);
    }

    #[test]
    fn test_ring_offset_endpoints() {
        let circumference = ring_circumference();
        assert_eq!(ring_offset(0.0), circumference);
        assert_eq!(ring_offset(1.0), 0.0);
        assert!((ring_offset(0.5) - circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_filled_cells() {
        assert_eq!(ring_filled_cells(0.0, 24), 0);
        assert_eq!(ring_filled_cells(0.5, 24), 12);
        assert_eq!(ring_filled_cells(1.0, 24), 24);
        // Never overflows the segment count
        assert_eq!(ring_filled_cells(1.0, 8), 8);
    }

    #[test]
    fn test_growth_cue_threshold() {
        assert!(!growth_cue(0.0));
        assert!(!growth_cue(0.5));
        assert!(growth_cue(0.51));
        assert!(growth_cue(1.0));
    }
}
