// src/main.rs

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, AppState};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    // Cosmetic only, the terminal equivalent of the page title.
    stdout().execute(SetTitle("AI Surface Scan | Urban Sentinel"))?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(logging::log_file_path());

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app)?;
        } else if app.show_logs {
            // Keep the log panel current so swallowed submission failures
            // show up without any user action.
            app.refresh_logs();
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single event handler, split by page mode to keep the logic readable.
fn handle_events(app: &mut App) -> std::io::Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            // A pending notice behaves like a blocking alert: nothing else
            // reacts until it is dismissed.
            if app.notice.is_some() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    app.dismiss_notice();
                }
                return Ok(());
            }

            match app.state {
                AppState::Editing => handle_editing_input(app, key.code),
                AppState::Finished => handle_finished_input(app, key.code),
            }
        }
    }
    Ok(())
}

/// Handles input while the user is filling in the scan form.
fn handle_editing_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Enter => app.submit_scan(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}

/// Handles input while a scan result is on screen.
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('n') => app.new_scan(),
        KeyCode::Char('d') => {
            // Precondition checks and the download stub happen inside the
            // app; only a successfully-built payload reaches the network,
            // detached so the UI never waits on it.
            if let Some(payload) = app.request_report() {
                core::report::spawn_submission(config::report_endpoint(), payload);
            }
        }
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Tab => app.edit_form(),
        KeyCode::Left => app.scroll_logs_left(),
        KeyCode::Right => app.scroll_logs_right(),
        _ => {}
    }
}
