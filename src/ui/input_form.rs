use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the custom-duration entry form
pub fn render_duration_form(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw("  Session length in minutes:"));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  > "),
        Span::styled(app.duration_input.clone(), modal_title_style()),
        Span::raw("_"),
    ]));
    lines.push(Line::raw(""));

    if let Some(error) = &app.input_error {
        lines.push(Line::from(Span::styled(format!("  {}", error), error_style())));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" Set  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Cancel  "),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ⏱ Set Duration ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
