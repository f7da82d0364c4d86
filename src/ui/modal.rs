use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the session-complete modal. Input stays blocked until the user
/// acknowledges it.
pub fn render_completion_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(modal) = &app.modal {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("  {}", modal.message)));
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            "  Trees grown today: {}",
            app.stats.trees_grown
        )));
        lines.push(Line::raw(""));

        lines.push(Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" Keep growing  "),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" 🌳 Session Complete ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the day changed modal (forces restart)
pub fn render_day_changed_modal(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw("  A new day has begun!"));
    lines.push(Line::raw(""));
    lines.push(Line::raw("  The date has changed since you started Grove."));
    lines.push(Line::raw("  Today's stats belong to yesterday now; please"));
    lines.push(Line::raw("  restart to begin a fresh garden."));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("  [q]", modal_title_style()),
        Span::raw(" Close Grove  "),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" 🌅 Day Changed ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
