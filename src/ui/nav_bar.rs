use crate::domain::Section;
use crate::ui::styles::{active_tab_style, inactive_tab_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the navigation bar. The active section's tab is highlighted;
/// the others are dimmed.
pub fn render_nav_bar(f: &mut Frame, active: Section, area: Rect) {
    let mut spans = vec![Span::raw(" 🌳 grove  ")];

    for section in Section::all() {
        let style = if *section == active {
            active_tab_style()
        } else {
            inactive_tab_style()
        };
        spans.push(Span::styled(format!(" {} ", section.name()), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
