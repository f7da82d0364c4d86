use crate::app::AppState;
use crate::domain::display;
use crate::ui::styles::{border_style, title_style, tree_growing_style, tree_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Growth stage of the session tree, derived from countdown progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TreeStage {
    Seed,
    Sprout,
    Growing,
    Full,
}

fn stage_for_progress(progress: f64) -> TreeStage {
    if progress >= 1.0 {
        TreeStage::Full
    } else if display::growth_cue(progress) {
        TreeStage::Growing
    } else if progress > 0.0 {
        TreeStage::Sprout
    } else {
        TreeStage::Seed
    }
}

fn stage_art(stage: TreeStage) -> Vec<&'static str> {
    match stage {
        TreeStage::Seed => vec![
            "         ",
            "         ",
            "         ",
            "         ",
            "    .    ",
            "_________",
        ],
        TreeStage::Sprout => vec![
            "         ",
            "         ",
            "         ",
            "    ,    ",
            "   \\|/   ",
            "_________",
        ],
        TreeStage::Growing => vec![
            "         ",
            "   (@)   ",
            "  (@@@)  ",
            "    |    ",
            "    |    ",
            "_________",
        ],
        TreeStage::Full => vec![
            "  (@@@)  ",
            " (@@@@@) ",
            "  (@@@)  ",
            "    |    ",
            "    |    ",
            "_________",
        ],
    }
}

/// Render the tree pane. Past 50% progress the growth cue kicks in and
/// the art brightens; reset or reconfigure drops it back to a seed since
/// the stage is pure in progress.
pub fn render_tree_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let progress = display::progress(&app.timer);
    let stage = stage_for_progress(progress);
    let growing = display::growth_cue(progress);

    let style = if growing { tree_growing_style() } else { tree_style() };

    let mut lines = vec![Line::from("")];
    for row in stage_art(stage) {
        lines.push(Line::from(Span::styled(row, style)));
    }
    lines.push(Line::from(""));
    if growing {
        lines.push(Line::from(Span::styled("Your tree is growing!", style)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Session Tree 🌱 ", title_style()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stage_tracks_progress() {
        assert_eq!(stage_for_progress(0.0), TreeStage::Seed);
        assert_eq!(stage_for_progress(0.1), TreeStage::Sprout);
        assert_eq!(stage_for_progress(0.5), TreeStage::Sprout);
        assert_eq!(stage_for_progress(0.51), TreeStage::Growing);
        assert_eq!(stage_for_progress(1.0), TreeStage::Full);
    }

    #[test]
    fn test_stage_art_has_consistent_rows() {
        for stage in [TreeStage::Seed, TreeStage::Sprout, TreeStage::Growing, TreeStage::Full] {
            assert_eq!(stage_art(stage).len(), 6);
        }
    }
}
