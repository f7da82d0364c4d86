pub mod display;
pub mod section;
pub mod stats;
pub mod timer;

pub use section::Section;
pub use stats::{Level, SessionStats, StatsView, DAILY_GOAL_MINUTES};
pub use timer::{FocusTimer, TickOutcome, TimerError, TimerPhase};

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing a custom duration; space is text input here, not start/pause
    EnteringDuration,
    /// Completion modal shown; blocks all other input until acknowledged
    SessionComplete,
    /// Shown when midnight has passed, forces restart
    DayChanged,
}
