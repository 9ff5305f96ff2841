// src/app.rs

use std::path::PathBuf;

use ratatui::widgets::ScrollbarState;
use tracing::{debug, info};

use crate::core::models::{ReportPayload, ScanResult};
use crate::core::report;
use crate::core::synthesizer;

/// Notice shown when the user asks for a report without an email on file.
pub const EMAIL_REQUIRED_NOTICE: &str =
    "Add your email in the form above so we can send your report.";

/// Notice shown on every report action while the download is still a stub.
pub const DOWNLOAD_STUB_NOTICE: &str =
    "Report download will be implemented soon. We still saved your scan details.";

/// Which form field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Domain,
    Email,
}

/// The two top-level modes of the page: filling in the form, or looking at a
/// finished scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Editing,
    Finished,
}

/// All page-level state. One instance owns everything; no component keeps
/// private state of its own, mirroring the single-owner layout of the page.
pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub focus: InputFocus,
    pub domain_input: String,
    pub email_input: String,
    pub scan_result: Option<ScanResult>,
    /// A pending blocking notice, rendered as a popup until dismissed.
    pub notice: Option<String>,
    pub show_logs: bool,
    pub log_path: PathBuf,
    pub log_content: Vec<String>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
}

impl App {
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            should_quit: false,
            state: AppState::Editing,
            focus: InputFocus::Domain,
            domain_input: String::new(),
            email_input: String::new(),
            scan_result: None,
            notice: None,
            show_logs: false,
            log_path,
            log_content: Vec::new(),
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
        }
    }

    // --- Form editing ---

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            InputFocus::Domain => self.domain_input.push(c),
            InputFocus::Email => self.email_input.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            InputFocus::Domain => {
                self.domain_input.pop();
            }
            InputFocus::Email => {
                self.email_input.pop();
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputFocus::Domain => InputFocus::Email,
            InputFocus::Email => InputFocus::Domain,
        };
    }

    /// The form's submit transition.
    ///
    /// An empty or whitespace-only domain is a silent no-op: the synthesizer
    /// is not invoked and the form stays as it is. Otherwise the domain is
    /// normalized, scored, and the result replaces whatever was shown before.
    /// No validation is applied to the email; it is carried along as typed.
    pub fn submit_scan(&mut self) {
        if self.domain_input.trim().is_empty() {
            debug!("Ignoring scan submit with an empty domain.");
            return;
        }

        let domain = synthesizer::normalize_domain(&self.domain_input);
        let result = synthesizer::synthesize(&domain);
        info!(domain = %domain, score = result.score, "Scan submitted.");

        self.scan_result = Some(result);
        self.state = AppState::Finished;
    }

    // --- Report dispatch ---

    /// The report action's precondition gate plus local side effects.
    ///
    /// With no result on file nothing happens. With a result but no email, the
    /// user gets exactly one notice and no payload is built, so the caller has
    /// nothing to submit. With both present the payload is built, the download
    /// stub runs once, the placeholder notice is raised, and the payload is
    /// handed back for the caller to spawn the network submission. The stub
    /// and the submission are independent by contract; this function never
    /// waits on the network.
    pub fn request_report(&mut self) -> Option<ReportPayload> {
        let result = self.scan_result.as_ref()?;

        if self.email_input.trim().is_empty() {
            self.notice = Some(EMAIL_REQUIRED_NOTICE.to_string());
            return None;
        }

        let payload = report::build_payload(result, &self.email_input);
        report::run_download_stub(&payload);
        self.notice = Some(DOWNLOAD_STUB_NOTICE.to_string());
        Some(payload)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // --- Navigation ---

    /// Starts a fresh scan: clears the result and the domain field but keeps
    /// the email, so a returning user does not have to retype it.
    pub fn new_scan(&mut self) {
        self.state = AppState::Editing;
        self.focus = InputFocus::Domain;
        self.domain_input.clear();
        self.scan_result = None;
    }

    /// Returns to the form without discarding the rendered result.
    pub fn edit_form(&mut self) {
        self.state = AppState::Editing;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // --- Log panel ---

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.refresh_logs();
        }
    }

    /// Re-reads the tail of the log file for the log panel. Read failures are
    /// shown in the panel itself rather than treated as errors; the panel is
    /// a convenience, not a contract.
    pub fn refresh_logs(&mut self) {
        const TAIL_LINES: usize = 50;
        match std::fs::read_to_string(&self.log_path) {
            Ok(content) => {
                let lines: Vec<String> = content.lines().map(String::from).collect();
                let start = lines.len().saturating_sub(TAIL_LINES);
                self.log_content = lines[start..].to_vec();
            }
            Err(e) => {
                self.log_content = vec![format!("Could not read log file: {}", e)];
            }
        }
    }

    pub fn scroll_logs_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state =
            self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_logs_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state =
            self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RiskLevel;

    fn test_app() -> App {
        App::new(PathBuf::from("surface-scan-test.log"))
    }

    #[test]
    fn empty_domain_submit_is_a_silent_no_op() {
        let mut app = test_app();
        app.domain_input = "   ".to_string();
        app.submit_scan();

        assert!(app.scan_result.is_none());
        assert_eq!(app.state, AppState::Editing);
    }

    #[test]
    fn submit_normalizes_and_scores_the_domain() {
        let mut app = test_app();
        app.domain_input = "https://Example.COM/pricing".to_string();
        app.submit_scan();

        let result = app.scan_result.as_ref().expect("a result must exist");
        assert_eq!(result.domain, "example.com");
        assert_eq!(result.risk_level, RiskLevel::from_score(result.score));
        assert_eq!(app.state, AppState::Finished);
    }

    #[test]
    fn resubmitting_replaces_the_previous_result() {
        let mut app = test_app();
        app.domain_input = "a.com".to_string();
        app.submit_scan();
        app.domain_input = "example.com".to_string();
        app.submit_scan();

        let result = app.scan_result.as_ref().expect("a result must exist");
        assert_eq!(result.domain, "example.com");
    }

    #[test]
    fn report_without_email_raises_one_notice_and_builds_nothing() {
        let mut app = test_app();
        app.domain_input = "example.com".to_string();
        app.submit_scan();

        let payload = app.request_report();
        assert!(payload.is_none());
        assert_eq!(app.notice.as_deref(), Some(EMAIL_REQUIRED_NOTICE));
    }

    #[test]
    fn report_without_result_does_nothing_at_all() {
        let mut app = test_app();
        app.email_input = "owner@business.com.au".to_string();

        let payload = app.request_report();
        assert!(payload.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn report_with_result_and_email_hands_back_one_payload() {
        let mut app = test_app();
        app.domain_input = "example.com".to_string();
        app.email_input = " owner@business.com.au ".to_string();
        app.submit_scan();

        let payload = app.request_report().expect("payload must be built");
        assert_eq!(payload.domain, "example.com");
        assert_eq!(payload.email, "owner@business.com.au");
        assert_eq!(app.notice.as_deref(), Some(DOWNLOAD_STUB_NOTICE));
    }

    #[test]
    fn each_report_action_is_independent() {
        let mut app = test_app();
        app.domain_input = "example.com".to_string();
        app.email_input = "owner@business.com.au".to_string();
        app.submit_scan();

        // Two clicks, two payloads; nothing deduplicates them.
        let first = app.request_report().expect("first payload");
        app.dismiss_notice();
        let second = app.request_report().expect("second payload");
        assert_eq!(first.domain, second.domain);
    }

    #[test]
    fn report_action_leaves_the_rendered_result_untouched() {
        let mut app = test_app();
        app.domain_input = "example.com".to_string();
        app.email_input = "owner@business.com.au".to_string();
        app.submit_scan();
        let before = app.scan_result.clone().expect("result before dispatch");

        let _ = app.request_report();

        let after = app.scan_result.as_ref().expect("result after dispatch");
        assert_eq!(before.score, after.score);
        assert_eq!(before.domain, after.domain);
        assert_eq!(app.state, AppState::Finished);
    }

    #[test]
    fn new_scan_keeps_the_email_on_file() {
        let mut app = test_app();
        app.domain_input = "example.com".to_string();
        app.email_input = "owner@business.com.au".to_string();
        app.submit_scan();
        app.new_scan();

        assert!(app.scan_result.is_none());
        assert!(app.domain_input.is_empty());
        assert_eq!(app.email_input, "owner@business.com.au");
        assert_eq!(app.state, AppState::Editing);
    }

    #[test]
    fn focus_toggles_between_the_two_fields() {
        let mut app = test_app();
        assert_eq!(app.focus, InputFocus::Domain);
        app.toggle_focus();
        assert_eq!(app.focus, InputFocus::Email);
        app.push_char('a');
        assert_eq!(app.email_input, "a");
        app.toggle_focus();
        app.push_char('b');
        assert_eq!(app.domain_input, "b");
    }
}
