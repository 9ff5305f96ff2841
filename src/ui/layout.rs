// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// Each `Rect` names the screen region one widget draws into, so individual
/// widgets never recompute dimensions themselves.
pub struct AppLayout {
    pub form: Rect,
    pub results: Rect,
    pub summary: Rect,
    pub footer: Rect,
    pub log_panel: Rect,
}

/// Creates the complete application layout.
///
/// The frame is split vertically into the scan form at the top, the main
/// content area in the middle and a one-line footer at the bottom. The
/// content area holds the results rows and the score summary side by side;
/// when the log panel is open it takes a third column.
///
/// # Arguments
/// * `frame_size` - The `Rect` representing the total size of the terminal frame.
/// * `show_logs` - Whether the log panel column is currently open.
///
/// # Returns
/// An `AppLayout` with the calculated `Rect` for each widget area.
pub fn create_layout(frame_size: Rect, show_logs: bool) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_constraints = if show_logs {
        vec![
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ]
    } else {
        vec![Constraint::Percentage(65), Constraint::Percentage(35)]
    };

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(content_constraints)
        .split(main_chunks[1]);

    AppLayout {
        form: main_chunks[0],
        results: content_chunks[0],
        summary: content_chunks[1],
        log_panel: if show_logs { content_chunks[2] } else { Rect::default() },
        footer: main_chunks[2],
    }
}
