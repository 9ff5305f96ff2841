// src/ui/widgets/summary.rs

use crate::app::App;
use crate::core::models::RiskLevel;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Renders the summary column: the composite score card, the three-segment
/// risk meter and the grant application helper. Nothing is drawn inside the
/// container until a scan result exists.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let Some(result) = &app.scan_result else {
        return;
    };

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Score header
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Risk badge
            Constraint::Length(1), // Risk meter
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Score note
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Grant helper
        ])
        .split(area);

    let tier_color = risk_color(result.risk_level);

    // --- Score header ---
    let score_text = Text::from(vec![
        Line::from("Composite surface score".bold()),
        Line::from(format!("{}/100", result.score)).style(Style::default().fg(tier_color)),
    ]);
    frame.render_widget(
        Paragraph::new(score_text).alignment(Alignment::Center),
        summary_chunks[0],
    );

    let score_gauge = Gauge::default()
        .percent(result.score as u16)
        .label("")
        .style(Style::default().fg(tier_color));
    frame.render_widget(score_gauge, summary_chunks[1]);

    // --- Risk badge ---
    let risk_line = Line::from(vec![
        Span::raw("Risk level: "),
        Span::styled(
            format!(" {} ", result.risk_level),
            Style::default().bold().fg(Color::Black).bg(tier_color),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(risk_line).alignment(Alignment::Center),
        summary_chunks[3],
    );

    // --- Risk meter: three segments, exactly one active ---
    let meter = Line::from(vec![
        meter_segment(RiskLevel::Low, result.risk_level),
        Span::raw(" "),
        meter_segment(RiskLevel::Moderate, result.risk_level),
        Span::raw(" "),
        meter_segment(RiskLevel::High, result.risk_level),
    ]);
    frame.render_widget(
        Paragraph::new(meter).alignment(Alignment::Center),
        summary_chunks[4],
    );

    let note = Paragraph::new(
        "High-level surface check using public information only. It highlights where an \
         uplift is likely to deliver the biggest resilience gains.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });
    frame.render_widget(note, summary_chunks[6]);

    // --- Grant Application Helper ---
    let helper_block = Block::default().title("GRANT APPLICATION HELPER".bold());
    let helper_text = Text::from(vec![
        Line::from(vec![
            Span::raw("Domain: "),
            Span::styled(result.domain.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Surface score: "),
            Span::styled(
                format!("{}/100 ({} risk)", result.score, result.risk_level),
                Style::default().fg(tier_color),
            ),
        ]),
        Line::from(""),
        Line::from("1. Share this summary with your digital advisor."),
        Line::from("2. Ask which cyber uplift programs apply to your site."),
        Line::from("3. Use the scan as supporting evidence for funding."),
    ]);
    frame.render_widget(
        Paragraph::new(helper_text)
            .block(helper_block)
            .wrap(Wrap { trim: true }),
        summary_chunks[8],
    );
}

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

/// One segment of the risk meter. The segment matching the current tier is
/// highlighted; the other two stay muted.
fn meter_segment(segment: RiskLevel, current: RiskLevel) -> Span<'static> {
    let label = format!(" {} ", segment);
    if segment == current {
        Span::styled(label, Style::default().bold().fg(Color::Black).bg(risk_color(segment)))
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}
