use crate::app::AppState;
use crate::domain::display;
use crate::ui::styles::{border_style, clock_running_style, clock_style, gauge_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Segments in the textual progress ring
const RING_SEGMENTS: usize = 24;

/// Build the ring line: filled cells follow the stroke offset of the
/// 45-unit progress circle
fn ring_line(progress: f64) -> Line<'static> {
    let filled = display::ring_filled_cells(progress, RING_SEGMENTS);
    let mut cells = String::with_capacity(RING_SEGMENTS * 3);
    for i in 0..RING_SEGMENTS {
        cells.push(if i < filled { '●' } else { '○' });
    }
    Line::from(Span::raw(cells))
}

/// Render the countdown pane: clock, progress ring, gauge, status line
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Focus Session ", title_style()));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Spacing
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Ring
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Status
            Constraint::Min(0),
        ])
        .split(inner);

    let progress = display::progress(&app.timer);

    // Clock
    let clock_text = display::format_clock(app.timer.remaining_secs());
    let style = if app.timer.is_running() {
        clock_running_style()
    } else {
        clock_style()
    };
    let clock = Paragraph::new(Line::from(Span::styled(clock_text, style)))
        .alignment(Alignment::Center);
    f.render_widget(clock, chunks[1]);

    // Progress ring
    let ring = Paragraph::new(ring_line(progress)).alignment(Alignment::Center);
    f.render_widget(ring, chunks[3]);

    // Progress gauge with percentage label
    let pct = (progress * 100.0).round() as u16;
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(pct.min(100))
        .label(format!("{}%", pct.min(100)));
    f.render_widget(gauge, chunks[5]);

    // Status line
    let status = if app.timer.is_running() {
        "Growing... press Space to pause"
    } else if app.timer.remaining_secs() == 0 {
        "Session complete — press r to plant again"
    } else {
        "Press Space to start"
    };
    let status_line = Paragraph::new(Line::from(Span::raw(status)))
        .alignment(Alignment::Center);
    f.render_widget(status_line, chunks[7]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_line_cell_counts() {
        let empty = ring_line(0.0);
        let full = ring_line(1.0);
        let empty_text: String = empty.spans.iter().map(|s| s.content.clone()).collect();
        let full_text: String = full.spans.iter().map(|s| s.content.clone()).collect();
        assert_eq!(empty_text.chars().filter(|c| *c == '●').count(), 0);
        assert_eq!(full_text.chars().filter(|c| *c == '●').count(), RING_SEGMENTS);
        assert_eq!(full_text.chars().count(), RING_SEGMENTS);
    }
}
