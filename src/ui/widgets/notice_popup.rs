// src/ui/widgets/notice_popup.rs

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders a blocking notice on top of the existing UI.
///
/// This is the terminal stand-in for the page's alert dialogs: while a notice
/// is pending, the rest of the interface does not react to input. The `Clear`
/// widget wipes the popup area first so the background never bleeds through.
///
/// # Arguments
/// * `frame` - A mutable reference to the `Frame` used for rendering.
/// * `message` - The notice text to display.
/// * `area` - The total area available for rendering.
pub fn render_notice_popup(frame: &mut Frame, message: &str, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to continue".bold()),
    ]);

    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let popup_area = centered_rect(50, 30, area);

    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rectangle for a popup.
///
/// # Arguments
/// * `percent_x` - The popup width as a percentage of the parent area.
/// * `percent_y` - The popup height as a percentage of the parent area.
/// * `r` - The parent `Rect` to center the new area within.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
