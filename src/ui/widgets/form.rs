// src/ui/widgets/form.rs

use crate::app::{App, AppState, InputFocus};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const DOMAIN_PREFIX: &str = "https://";

/// Renders the scan form: a heading, the domain field with its scheme prefix,
/// and the optional report-email field underneath.
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(2), // Intro copy
            Constraint::Length(3), // Domain field
            Constraint::Length(3), // Email field
            Constraint::Length(1), // Email note
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(Line::from("Surface scan your domain".bold()));
    frame.render_widget(heading, chunks[0]);

    let intro = Paragraph::new(
        "A lightweight, automated surface check using public information only: basic speed, \
         HTTPS reachability and whether your DNS suggests an edge shield in front of your site.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(intro, chunks[1]);

    // --- Domain field ---
    let domain_focused = app.focus == InputFocus::Domain;
    let domain_block = Block::default()
        .borders(Borders::ALL)
        .title("Domain")
        .border_style(field_style(domain_focused));
    let domain_line = Line::from(vec![
        Span::styled(DOMAIN_PREFIX, Style::default().fg(Color::DarkGray)),
        Span::raw(app.domain_input.as_str()),
    ]);
    frame.render_widget(Paragraph::new(domain_line).block(domain_block), chunks[2]);

    // --- Email field ---
    let email_focused = app.focus == InputFocus::Email;
    let email_block = Block::default()
        .borders(Borders::ALL)
        .title("Report email (optional but recommended)")
        .border_style(field_style(email_focused));
    frame.render_widget(
        Paragraph::new(app.email_input.as_str()).block(email_block),
        chunks[3],
    );

    let note = Paragraph::new(
        "If you request a report we'll email you a copy and may follow up once after 7 days.",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(note, chunks[4]);

    // Show the cursor in the focused field only while the form is active.
    if app.state == AppState::Editing {
        let (field_area, column) = if domain_focused {
            (
                chunks[2],
                (DOMAIN_PREFIX.len() + app.domain_input.chars().count()) as u16,
            )
        } else {
            (chunks[3], app.email_input.chars().count() as u16)
        };
        frame.set_cursor_position(Position::new(field_area.x + column + 1, field_area.y + 1));
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}
