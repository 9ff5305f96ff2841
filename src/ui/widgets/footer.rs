// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions for the
/// current page mode.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.notice.is_some() {
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" to dismiss the notice."),
        ])
    } else {
        match app.state {
            AppState::Editing => Line::from(vec![
                Span::styled("Tab", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" switch field, "),
                Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" run surface scan, "),
                Span::styled("Esc", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" quit."),
            ]),
            AppState::Finished => Line::from(vec![
                Span::styled("[D]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("ownload & email report, "),
                Span::styled("[N]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("ew scan, "),
                Span::styled("[L]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("ogs, "),
                Span::styled("Tab", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" edit form, "),
                Span::styled("[Q]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("uit"),
            ]),
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
