pub mod charts_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod nav_bar;
pub mod quote_pane;
pub mod stats_pane;
pub mod styles;
pub mod timer_pane;
pub mod tree_pane;

use crate::app::AppState;
use crate::domain::{Section, UiMode};
use charts_pane::{render_category_chart, render_weekly_chart};
use input_form::render_duration_form;
use keybindings::render_keybindings;
use layout::{create_layout, split_home, split_insights};
use modal::{render_completion_modal, render_day_changed_modal};
use nav_bar::render_nav_bar;
use quote_pane::render_quote_pane;
use ratatui::Frame;
use stats_pane::render_stats_pane;
use timer_pane::render_timer_pane;
use tree_pane::render_tree_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_nav_bar(f, app.active_section, layout.nav_area);
    render_quote_pane(f, app, layout.quote_area);
    render_keybindings(f, layout.keybindings_area);

    // Exactly one section is visible at a time
    match app.active_section {
        Section::Home => {
            let (timer_area, tree_area) = split_home(layout.content_area);
            render_timer_pane(f, app, timer_area);
            render_tree_pane(f, app, tree_area);
        }
        Section::Stats => {
            render_stats_pane(f, app, layout.content_area);
        }
        Section::Insights => {
            let (weekly_area, category_area) = split_insights(layout.content_area);
            render_weekly_chart(f, weekly_area);
            render_category_chart(f, category_area);
        }
    }

    // Render day changed modal (takes precedence)
    if app.ui_mode == UiMode::DayChanged {
        render_day_changed_modal(f, size);
        return; // Don't render other modals
    }

    // Render completion modal if active
    if app.ui_mode == UiMode::SessionComplete {
        render_completion_modal(f, app, size);
    }

    // Render duration form if active
    if app.ui_mode == UiMode::EnteringDuration {
        render_duration_form(f, app, size);
    }
}
