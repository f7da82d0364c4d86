use thiserror::Error;

/// Default session length: 25 minutes
pub const DEFAULT_DURATION_SECS: u32 = 25 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("duration must be at least 1 minute (got {0})")]
    InvalidDuration(u32),
}

/// Countdown phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
}

/// Result of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing happened
    Noop,
    /// One second elapsed, countdown continues
    Ticked,
    /// Countdown reached zero on this tick; timer stopped itself
    Completed,
}

/// The countdown state machine.
///
/// Holds no wall-clock time. The event loop decides when a second has
/// passed and calls `tick()`; everything here is deterministic.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    duration_secs: u32,
    remaining_secs: u32,
    phase: TimerPhase,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS / 60)
    }
}

impl FocusTimer {
    pub fn new(minutes: u32) -> Self {
        let secs = minutes.max(1) * 60;
        Self {
            duration_secs: secs,
            remaining_secs: secs,
            phase: TimerPhase::Idle,
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whole minutes of the configured duration (rounded down)
    pub fn duration_minutes(&self) -> u32 {
        self.duration_secs / 60
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Begin counting down. No-op if already running, and guarded against
    /// starting at zero (a completed timer must be reset or reconfigured
    /// first, otherwise the next tick would fire a second completion).
    pub fn start(&mut self) {
        if self.phase == TimerPhase::Running || self.remaining_secs == 0 {
            return;
        }
        self.phase = TimerPhase::Running;
    }

    /// Stop counting down, keeping the remaining time. No-op if idle.
    pub fn pause(&mut self) {
        self.phase = TimerPhase::Idle;
    }

    /// Stop and restore the full configured duration
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining_secs = self.duration_secs;
    }

    /// Set a new duration and restore the countdown to it. Does not start.
    pub fn configure(&mut self, minutes: u32) -> Result<(), TimerError> {
        if minutes == 0 {
            return Err(TimerError::InvalidDuration(minutes));
        }
        self.phase = TimerPhase::Idle;
        self.duration_secs = minutes * 60;
        self.remaining_secs = self.duration_secs;
        Ok(())
    }

    /// Advance the countdown by one second. When the countdown reaches
    /// zero the timer stops itself and reports `Completed` exactly once.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TimerPhase::Running {
            return TickOutcome::Noop;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.phase = TimerPhase::Idle;
            TickOutcome::Completed
        } else {
            TickOutcome::Ticked
        }
    }
}
