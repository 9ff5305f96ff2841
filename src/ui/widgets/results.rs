// src/ui/widgets/results.rs

use crate::app::App;
use crate::core::models::{Finding, ScanResult};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the per-category finding rows, or the idle placeholder when no
/// scan has run yet. An absent result renders instructions only; there is no
/// partial or error presentation.
pub fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let results_block = Block::default().borders(Borders::ALL).title("Scan Results");

    match &app.scan_result {
        None => {
            let instructions = Paragraph::new(
                "Enter your primary website domain above and press Enter to run the surface scan.\n\
                 Results will appear here.",
            )
            .block(results_block)
            .wrap(Wrap { trim: true });
            frame.render_widget(instructions, area);
        }
        Some(result) => {
            let paragraph = Paragraph::new(build_results_text(result))
                .block(results_block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
        }
    }
}

/// Turns a scan result into the styled row list: for each category a label,
/// the technical sentence, a colored status pill and the plain-language
/// sentence.
fn build_results_text(result: &ScanResult) -> Text<'_> {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::raw("Surface scan summary for "),
        Span::styled(result.domain.as_str(), Style::default().bold().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(""));

    for finding in &result.findings {
        lines.extend(build_finding_row(finding));
    }

    lines.push(Line::from(Span::styled(
        "This is a high-level surface check using public information only.",
        Style::default().fg(Color::DarkGray),
    )));

    Text::from(lines)
}

fn build_finding_row(finding: &Finding) -> Vec<Line<'_>> {
    vec![
        Line::from(vec![
            Span::styled(finding.category.label(), Style::default().bold()),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", finding.status),
                Style::default().bold().fg(status_color(&finding.status)),
            ),
        ]),
        Line::from(Span::raw(format!("  {}", finding.tech))),
        Line::from(Span::styled(
            format!("  {}", finding.human),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

/// Maps a status pill label onto its color, mirroring the page's
/// status-<label> styling classes.
fn status_color(status: &str) -> Color {
    match status {
        "OK" => Color::Green,
        "Exposed" => Color::Red,
        "Moderate" => Color::Yellow,
        "Neutral" => Color::DarkGray,
        _ => Color::Cyan,
    }
}
