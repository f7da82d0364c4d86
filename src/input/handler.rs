use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle a key event. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EnteringDuration => handle_duration_entry_mode(app, key),
        UiMode::SessionComplete => handle_completion_mode(app, key),
        // DayChanged is handled in the main loop; ignore everything here
        UiMode::DayChanged => false,
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Space toggles the countdown (the global shortcut)
        KeyCode::Char(' ') => {
            app.toggle_start_pause();
            false
        }

        // Reset, keeping the configured duration
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            false
        }

        // Custom duration entry
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.begin_duration_entry();
            false
        }

        // Preset durations
        KeyCode::Char('1') => {
            app.apply_preset(15);
            false
        }
        KeyCode::Char('2') => {
            app.apply_preset(25);
            false
        }
        KeyCode::Char('3') => {
            app.apply_preset(45);
            false
        }
        KeyCode::Char('4') => {
            app.apply_preset(60);
            false
        }

        // Section navigation
        KeyCode::Tab | KeyCode::Right => {
            app.next_section();
            false
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.prev_section();
            false
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.show_section("home");
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.show_section("stats");
            false
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.show_section("insights");
            false
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,

        _ => false,
    }
}

/// Handle keys while typing a custom duration. Space deliberately does
/// nothing here: the text input has focus, so the global shortcut is off.
fn handle_duration_entry_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.push_duration_digit(c);
            false
        }
        KeyCode::Backspace => {
            app.pop_duration_digit();
            false
        }
        KeyCode::Enter => {
            app.commit_duration_entry();
            false
        }
        KeyCode::Esc => {
            app.cancel_duration_entry();
            false
        }
        _ => false,
    }
}

/// Handle keys while the session-complete modal is up. The modal blocks
/// everything until acknowledged.
fn handle_completion_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.dismiss_modal();
            false
        }
        _ => false,
    }
}
