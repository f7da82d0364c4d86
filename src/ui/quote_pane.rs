use crate::app::AppState;
use crate::ui::styles::quote_style;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the motivational quote bar
pub fn render_quote_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(Span::raw(format!("\"{}\"", app.current_quote)));
    let paragraph = Paragraph::new(line)
        .style(quote_style())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
