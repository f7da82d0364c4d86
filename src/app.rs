use crate::domain::{FocusTimer, Section, SessionStats, TickOutcome, UiMode};
use crate::notifications;
use crate::quotes;
use crate::ticker;
use std::time::Instant;

/// Modal state for the session-complete prompt
#[derive(Debug, Clone)]
pub struct ModalState {
    pub message: String,
}

/// Main application state
pub struct AppState {
    pub timer: FocusTimer,
    pub stats: SessionStats,
    pub active_section: Section,
    pub ui_mode: UiMode,
    pub modal: Option<ModalState>,

    /// Custom-duration entry buffer (digits only)
    pub duration_input: String,
    pub input_error: Option<String>,

    pub current_quote: &'static str,
    last_quote_rotation: Instant,

    /// Wall-clock anchor for the one-second countdown cadence
    last_countdown_second: Instant,

    pub start_date: chrono::NaiveDate, // Track which day this run belongs to
}

impl AppState {
    pub fn new(timer: FocusTimer) -> Self {
        let now = Instant::now();
        Self {
            timer,
            stats: SessionStats::default(),
            active_section: Section::Home,
            ui_mode: UiMode::Normal,
            modal: None,
            duration_input: String::new(),
            input_error: None,
            current_quote: quotes::pick_quote(&mut rand::thread_rng()),
            last_quote_rotation: now,
            last_countdown_second: now,
            start_date: chrono::Local::now().date_naive(),
        }
    }

    /// Check if the current date has changed (crossed midnight)
    pub fn has_day_changed(&self) -> bool {
        chrono::Local::now().date_naive() != self.start_date
    }

    /// Advance time-driven state: the countdown and the quote rotation.
    /// Called once per event-loop iteration.
    pub fn tick(&mut self) {
        let now = Instant::now();

        // Rotate the motivational quote every five minutes
        if now.duration_since(self.last_quote_rotation) >= quotes::ROTATION_INTERVAL {
            self.current_quote = quotes::pick_quote(&mut rand::thread_rng());
            self.last_quote_rotation = now;
        }

        if !self.timer.is_running() {
            // Keep the anchor fresh so a later start doesn't replay the
            // seconds that passed while paused
            self.last_countdown_second = now;
            return;
        }

        // Catch up one tick per elapsed wall-clock second. Stepping the
        // anchor forward (rather than resetting it to `now`) keeps the
        // cadence steady under a slow poll.
        while now.duration_since(self.last_countdown_second) >= ticker::COUNTDOWN_SECOND {
            self.last_countdown_second += ticker::COUNTDOWN_SECOND;
            if self.advance_one_second() {
                break;
            }
        }
    }

    /// Advance the countdown by one second; returns true on completion
    fn advance_one_second(&mut self) -> bool {
        match self.timer.tick() {
            TickOutcome::Completed => {
                self.complete_session();
                true
            }
            TickOutcome::Ticked | TickOutcome::Noop => false,
        }
    }

    /// A countdown ran its full course: record it and tell the user.
    /// Pause and reset never reach this path.
    fn complete_session(&mut self) {
        let minutes = self.timer.duration_minutes();
        self.stats.record_completion(minutes);

        notifications::notify_session_complete(minutes);

        self.modal = Some(ModalState {
            message: format!(
                "🎉 {} minutes of focus complete! Your tree has grown! 🌳",
                minutes
            ),
        });
        // Abandon any in-flight duration entry; the modal takes over
        self.duration_input.clear();
        self.input_error = None;
        self.ui_mode = UiMode::SessionComplete;
    }

    /// Acknowledge the session-complete modal
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_start_pause(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
        } else {
            self.start_timer();
        }
    }

    pub fn start_timer(&mut self) {
        if !self.timer.is_running() {
            self.last_countdown_second = Instant::now();
            self.timer.start();
        }
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    /// Switch to the section with the given navigation id.
    /// Unknown ids are ignored.
    pub fn show_section(&mut self, id: &str) {
        if let Some(section) = Section::from_id(id) {
            self.active_section = section;
        }
    }

    pub fn next_section(&mut self) {
        self.active_section = self.active_section.next();
    }

    pub fn prev_section(&mut self) {
        self.active_section = self.active_section.prev();
    }

    /// Open the custom-duration entry form
    pub fn begin_duration_entry(&mut self) {
        self.duration_input.clear();
        self.input_error = None;
        self.ui_mode = UiMode::EnteringDuration;
    }

    pub fn cancel_duration_entry(&mut self) {
        self.duration_input.clear();
        self.input_error = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn push_duration_digit(&mut self, c: char) {
        // Three digits cap the duration at 999 minutes
        if c.is_ascii_digit() && self.duration_input.len() < 3 {
            self.duration_input.push(c);
            self.input_error = None;
        }
    }

    pub fn pop_duration_digit(&mut self) {
        self.duration_input.pop();
    }

    /// Apply the typed duration. Stays in entry mode with an error message
    /// when the input doesn't form a positive minute count.
    pub fn commit_duration_entry(&mut self) {
        let minutes: u32 = match self.duration_input.parse() {
            Ok(m) => m,
            Err(_) => {
                self.input_error = Some(String::from("Enter a number of minutes"));
                return;
            }
        };
        match self.timer.configure(minutes) {
            Ok(()) => {
                self.duration_input.clear();
                self.input_error = None;
                self.ui_mode = UiMode::Normal;
            }
            Err(e) => {
                self.input_error = Some(e.to_string());
            }
        }
    }

    /// Set a preset duration in minutes. Invalid presets are ignored.
    pub fn apply_preset(&mut self, minutes: u32) {
        let _ = self.timer.configure(minutes);
    }

    #[cfg(test)]
    /// Drive the countdown by `n` seconds without waiting on wall time
    pub fn advance_seconds(&mut self, n: u32) {
        for _ in 0..n {
            if self.advance_one_second() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_with_minutes(minutes: u32) -> AppState {
        AppState::new(FocusTimer::new(minutes))
    }

    #[test]
    fn test_completion_records_session_and_opens_modal() {
        let mut app = app_with_minutes(1);
        app.start_timer();
        app.advance_seconds(60);

        assert_eq!(app.stats.sessions_completed, 1);
        assert_eq!(app.stats.focused_minutes, 1);
        assert_eq!(app.stats.trees_grown, 1);
        assert_eq!(app.ui_mode, UiMode::SessionComplete);
        assert!(app.modal.is_some());
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_pause_and_reset_never_record() {
        let mut app = app_with_minutes(1);
        app.start_timer();
        app.advance_seconds(30);
        app.pause_timer();
        app.reset_timer();
        assert_eq!(app.stats.sessions_completed, 0);
        assert_eq!(app.stats.trees_grown, 0);
        assert_eq!(app.timer.remaining_secs(), 60);
    }

    #[test]
    fn test_no_completion_before_zero() {
        let mut app = app_with_minutes(1);
        app.start_timer();
        app.advance_seconds(59);
        assert_eq!(app.stats.sessions_completed, 0);
        assert!(app.modal.is_none());
        assert_eq!(app.timer.remaining_secs(), 1);
    }

    #[test]
    fn test_two_full_sessions_accumulate() {
        let mut app = app_with_minutes(25);
        for _ in 0..2 {
            app.dismiss_modal();
            app.reset_timer();
            app.start_timer();
            app.advance_seconds(25 * 60);
        }
        assert_eq!(app.stats.sessions_completed, 2);
        assert_eq!(app.stats.focused_minutes, 50);
        assert_eq!(app.stats.trees_grown, 2);
    }

    #[test]
    fn test_dismiss_modal_returns_to_normal() {
        let mut app = app_with_minutes(1);
        app.start_timer();
        app.advance_seconds(60);
        assert_eq!(app.ui_mode, UiMode::SessionComplete);
        app.dismiss_modal();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_show_section_switches_and_ignores_unknown() {
        let mut app = app_with_minutes(25);
        app.show_section("home");
        assert_eq!(app.active_section, Section::Home);
        app.show_section("stats");
        assert_eq!(app.active_section, Section::Stats);
        // Unknown id leaves the current section visible
        app.show_section("nonsense");
        assert_eq!(app.active_section, Section::Stats);
    }

    #[test]
    fn test_duration_entry_commit() {
        let mut app = app_with_minutes(25);
        app.begin_duration_entry();
        assert_eq!(app.ui_mode, UiMode::EnteringDuration);
        app.push_duration_digit('4');
        app.push_duration_digit('5');
        app.commit_duration_entry();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.remaining_secs(), 45 * 60);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_duration_entry_rejects_zero_and_empty() {
        let mut app = app_with_minutes(25);
        app.begin_duration_entry();
        app.commit_duration_entry();
        assert!(app.input_error.is_some());
        assert_eq!(app.ui_mode, UiMode::EnteringDuration);

        app.push_duration_digit('0');
        app.commit_duration_entry();
        assert!(app.input_error.is_some());
        assert_eq!(app.ui_mode, UiMode::EnteringDuration);
        // Timer untouched
        assert_eq!(app.timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn test_duration_digits_only_and_capped() {
        let mut app = app_with_minutes(25);
        app.begin_duration_entry();
        app.push_duration_digit('x');
        app.push_duration_digit(' ');
        assert_eq!(app.duration_input, "");
        for c in ['1', '2', '3', '4'] {
            app.push_duration_digit(c);
        }
        assert_eq!(app.duration_input, "123");
        app.pop_duration_digit();
        assert_eq!(app.duration_input, "12");
    }

    #[test]
    fn test_preset_configures_without_starting() {
        let mut app = app_with_minutes(25);
        app.apply_preset(15);
        assert_eq!(app.timer.remaining_secs(), 15 * 60);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_quote_comes_from_pool() {
        let app = app_with_minutes(25);
        assert!(quotes::QUOTES.contains(&app.current_quote));
    }
}
