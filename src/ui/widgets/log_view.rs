// src/ui/widgets/log_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Renders the operator log panel.
///
/// Report submissions are fire-and-forget, so their failures never reach the
/// user; this panel is where they end up. It tails the application's log file
/// and colors lines by level so a failed store-report POST stands out.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Logs (scroll with ← →)")
        .borders(Borders::ALL);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Size the horizontal scrollbar to the widest line on screen.
    let max_width = app
        .log_content
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    app.log_horizontal_scroll_state =
        app.log_horizontal_scroll_state.content_length(max_width);

    let log_lines: Vec<Line> = app
        .log_content
        .iter()
        .map(|line| Line::styled(line.as_str(), level_style(line)))
        .collect();

    let log_paragraph =
        Paragraph::new(log_lines).scroll((0, app.log_horizontal_scroll as u16));
    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom).thumb_symbol("■");
    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };
    frame.render_stateful_widget(
        scrollbar,
        scrollbar_area,
        &mut app.log_horizontal_scroll_state,
    );
}

/// Picks a style from the level token present in the log line.
fn level_style(line: &str) -> Style {
    if line.contains("ERROR") {
        Style::default().fg(Color::Red)
    } else if line.contains("WARN") {
        Style::default().fg(Color::Yellow)
    } else if line.contains("DEBUG") || line.contains("TRACE") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    }
}
