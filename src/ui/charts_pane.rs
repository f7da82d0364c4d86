use crate::charts;
use crate::ui::styles::{border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render the weekly focus-time trend as a line chart.
/// The numbers are the fixed illustrative dataset, not live stats.
pub fn render_weekly_chart(f: &mut Frame, area: Rect) {
    let points = charts::weekly_points();
    let y_max = charts::weekly_y_max();

    let dataset = Dataset::default()
        .name("Focus time (min)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points);

    let x_labels: Vec<Span> = charts::WEEKLY_LABELS
        .iter()
        .map(|l| Span::styled(*l, default_style()))
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Weekly Trend ", title_style())),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (charts::WEEKLY_LABELS.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", y_max as u64 / 2)),
                    Span::raw(format!("{}", y_max as u64)),
                ]),
        );

    f.render_widget(chart, area);
}

/// Render the focus-category breakdown as a bar chart
pub fn render_category_chart(f: &mut Frame, area: Rect) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Categories (%) ", title_style())),
        )
        .data(&charts::CATEGORY_SHARES)
        .bar_width(8)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));

    f.render_widget(chart, area);
}
