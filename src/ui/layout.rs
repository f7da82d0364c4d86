use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub nav_area: Rect,
    pub content_area: Rect,
    pub quote_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: navigation tabs (1 row)
/// - Main area: the active section's content
/// - Bottom: quote bar (1 row) above keybindings bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation bar
            Constraint::Min(0),    // Section content
            Constraint::Length(1), // Quote bar
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        nav_area: chunks[0],
        content_area: chunks[1],
        quote_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

/// Split the home section into the timer pane and the tree pane
pub fn split_home(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Timer pane
            Constraint::Percentage(40), // Tree pane
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split the insights section into the weekly chart and the category chart
pub fn split_insights(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Weekly trend
            Constraint::Percentage(40), // Category breakdown
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create centered modal area (for the completion and day-changed modals)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.nav_area.height, 1);
        assert_eq!(layout.quote_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);
        assert!(layout.content_area.height > 30);
    }

    #[test]
    fn test_split_home() {
        let area = Rect::new(0, 0, 100, 30);
        let (timer, tree) = split_home(area);
        assert!(timer.width > tree.width);
        assert_eq!(timer.width + tree.width, 100);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 40);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert!(modal.height < area.height);
        assert_eq!(modal.height, 10);
    }
}
