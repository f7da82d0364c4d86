use crate::app::AppState;
use crate::domain::stats::format_focused_time;
use crate::domain::DAILY_GOAL_MINUTES;
use crate::ui::styles::{border_style, gauge_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the garden stats pane: today's tallies, daily goal progress,
/// and the environmental-impact estimates
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = &app.stats;
    let view = stats.view();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Focus Garden 🌼 {} ", app.start_date.format("%Y-%m-%d")),
            title_style(),
        ));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Daily goal gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(7),    // Text lines
        ])
        .split(block.inner(area));

    f.render_widget(block, area);

    // Daily goal gauge, clamped to 100%
    let goal_pct = (view.daily_goal_fraction * 100.0).round() as u16;
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(goal_pct)
        .label(format!(
            "Daily goal: {} / {}m",
            stats.focused_minutes, DAILY_GOAL_MINUTES
        ));
    f.render_widget(gauge, chunks[1]);

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Sessions today: ", title_style()),
        Span::raw(stats.sessions_completed.to_string()),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Focused time: ", title_style()),
        Span::raw(format_focused_time(stats.focused_minutes)),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Trees grown: ", title_style()),
        Span::raw(format!("{} 🌳", stats.trees_grown)),
    ]));

    lines.push(Line::from(""));

    // Environmental impact (rough estimates)
    lines.push(Line::from(vec![
        Span::styled("CO2 saved: ", title_style()),
        Span::raw(format!("{:.1} kg   ", view.co2_saved_kg)),
        Span::styled("Energy saved: ", title_style()),
        Span::raw(format!("{:.1} kWh", view.energy_saved_kwh)),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Virtual forest: ", title_style()),
        Span::raw(format!("{} trees", stats.trees_grown)),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Level: ", title_style()),
        Span::raw(format!("{} {}", view.level.symbol(), view.level.name())),
    ]));

    f.render_widget(Paragraph::new(lines), chunks[3]);
}
