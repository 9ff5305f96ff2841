// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area(), app.show_logs);

    widgets::form::render_form(frame, app, layout.form);
    widgets::results::render_results(frame, app, layout.results);
    widgets::summary::render_summary(frame, app, layout.summary);

    if app.show_logs {
        widgets::log_view::render_log_view(frame, app, layout.log_panel);
    }

    widgets::footer::render_footer(frame, app, layout.footer);

    // A pending notice is drawn last so it sits on top of everything else,
    // the terminal equivalent of a blocking alert.
    if let Some(notice) = app.notice.clone() {
        widgets::notice_popup::render_notice_popup(frame, &notice, frame.area());
    }
}
