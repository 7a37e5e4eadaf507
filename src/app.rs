//! Application state and core logic

use crate::config::FormsConfig;
use crate::state::{AppState, FormKind, PendingNavigation, View};
use crate::submit::Submitter;
use crate::validation::{submit_add_book_form, submit_search_form, FormValidator, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded configuration
    pub config: FormsConfig,
    /// Performs the submission of validated forms
    submitter: Box<dyn Submitter>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: FormsConfig, submitter: Box<dyn Submitter>) -> Result<Self> {
        let state = AppState::from_config(&config)?;
        Ok(Self {
            state,
            config,
            submitter,
            quit: false,
            status_message: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether a spinner is on screen and the UI should redraw quickly
    pub fn is_animating(&self) -> bool {
        self.state.pending_navigation.is_some()
            || self.state.search_form.is_submitting()
            || self.state.add_book_form.is_submitting()
    }

    /// Advance time-based state: the spinner and the navigation that follows
    /// a successful submit
    pub fn tick(&mut self, now: Instant) {
        self.state.tick_spinner(
            now,
            Duration::from_millis(self.config.spinner_interval_ms),
        );

        let delay = Duration::from_millis(self.config.navigation_delay_ms);
        let ready = self
            .state
            .pending_navigation
            .as_ref()
            .is_some_and(|p| now.duration_since(p.since) >= delay);
        if ready {
            if let Some(pending) = self.state.pending_navigation.take() {
                let kind = self.state.current_view.form_kind();
                self.state.last_navigation = Some(pending.navigation);
                self.state.current_view = View::Submitted(kind);
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Form(kind) => self.handle_form_key(kind, key),
            View::Submitted(kind) => self.handle_submitted_key(kind, key),
        }
        Ok(())
    }

    /// Handle keys while editing a form
    fn handle_form_key(&mut self, kind: FormKind, key: KeyEvent) {
        // The form is disabled until the page navigates away
        if self.state.pending_navigation.is_some() {
            return;
        }

        let on_select = self
            .state
            .current_form()
            .get_active_field()
            .is_some_and(|f| f.is_select());

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Enter => self.submit_form(kind, Instant::now()),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form(kind, Instant::now());
            }
            KeyCode::F(2) => {
                self.status_message = None;
                self.state.current_view = View::Form(kind.toggle());
            }
            KeyCode::Left if on_select => self.state.form_cycle_option(false),
            KeyCode::Right if on_select => self.state.form_cycle_option(true),
            KeyCode::Char(' ') if on_select => self.state.form_cycle_option(true),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Esc => self.status_message = None,
            _ => {}
        }
    }

    /// Handle keys on the result page
    fn handle_submitted_key(&mut self, kind: FormKind, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => self.return_to_form(kind, false),
            KeyCode::Char('n') => self.return_to_form(kind, true),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Intercept the submit of a form: validate, then enter the loading state
    /// and hand it to the submitter
    pub fn submit_form(&mut self, kind: FormKind, now: Instant) {
        let form = self.state.form_mut(kind);
        let submitter = self.submitter.as_mut();
        let result = match kind {
            FormKind::Search => submit_search_form(form, submitter),
            FormKind::AddBook => submit_add_book_form(form, submitter),
        };

        match result {
            Ok(SubmitOutcome::Ignored) => {}
            Ok(SubmitOutcome::Rejected) => {
                let count = self
                    .state
                    .form(kind)
                    .fields
                    .iter()
                    .filter(|f| f.invalid)
                    .count();
                self.status_message = Some(match count {
                    1 => "Please correct the highlighted field".to_string(),
                    n => format!("Please correct the {n} highlighted fields"),
                });
            }
            Ok(SubmitOutcome::Submitted(navigation)) => {
                self.status_message = None;
                self.state.pending_navigation = Some(PendingNavigation {
                    navigation,
                    since: now,
                });
            }
            Err(e) => {
                warn!(error = %e, "submission failed");
                FormValidator::reset_loading(self.state.form_mut(kind));
                self.push_error(e.to_string());
            }
        }
    }

    /// Leave the result page. The form goes back to idle so it can be
    /// submitted again; `clear` also empties its fields.
    fn return_to_form(&mut self, kind: FormKind, clear: bool) {
        let form = self.state.form_mut(kind);
        FormValidator::reset_loading(form);
        if clear {
            for field in &mut form.fields {
                field.clear();
                FormValidator::clear_error(field);
            }
            form.active_field_index = 0;
        }
        debug!(form = %form.id, clear, "returned to form");
        self.state.current_view = View::Form(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormsError;
    use crate::submit::{MockSubmitter, Navigation, Submission};
    use pretty_assertions::assert_eq;

    fn navigation_for(s: &Submission) -> Navigation {
        Navigation {
            form_id: s.form_id.clone(),
            method: s.method,
            url: format!("http://localhost:8080{}", s.action),
            body: None,
            fields: s.fields.clone(),
        }
    }

    fn app_with(submitter: MockSubmitter) -> App {
        App::new(FormsConfig::default(), Box::new(submitter)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_search(app: &mut App, query: &str) {
        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        type_text(app, query);
    }

    #[test]
    fn test_rejected_search_shows_status() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().never();
        let mut app = app_with(submitter);

        fill_search(&mut app, "D");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.status_message.as_deref(),
            Some("Please correct the highlighted field")
        );
        assert!(app.state.pending_navigation.is_none());
        assert_eq!(app.state.current_view, View::Form(FormKind::Search));
    }

    #[test]
    fn test_valid_search_navigates_after_delay() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|s| Ok(navigation_for(s)));
        let mut app = app_with(submitter);

        fill_search(&mut app, "Dune");
        let start = Instant::now();
        app.submit_form(FormKind::Search, start);
        assert!(app.is_animating());
        assert_eq!(app.state.search_form.submit.as_ref().unwrap().text(), "Processing...");

        app.tick(start + Duration::from_millis(100));
        assert_eq!(app.state.current_view, View::Form(FormKind::Search));

        app.tick(start + Duration::from_millis(600));
        assert_eq!(app.state.current_view, View::Submitted(FormKind::Search));
        let nav = app.state.last_navigation.as_ref().unwrap();
        assert_eq!(nav.form_id, "searchForm");
    }

    #[test]
    fn test_keys_ignored_while_navigation_pending() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|s| Ok(navigation_for(s)));
        let mut app = app_with(submitter);

        fill_search(&mut app, "Dune");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "xyz");

        assert_eq!(app.state.search_form.field("searchQuery").unwrap().value(), "Dune");
    }

    #[test]
    fn test_return_from_result_page_restores_form() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .times(2)
            .returning(|s| Ok(navigation_for(s)));
        let mut app = app_with(submitter);

        fill_search(&mut app, "Dune");
        let start = Instant::now();
        app.submit_form(FormKind::Search, start);
        app.tick(start + Duration::from_secs(1));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state.current_view, View::Form(FormKind::Search));
        let button = app.state.search_form.submit.as_ref().unwrap();
        assert_eq!(button.text(), "Search");
        assert!(!button.disabled);
        assert_eq!(app.state.search_form.field("searchQuery").unwrap().value(), "Dune");

        app.submit_form(FormKind::Search, start);
        assert!(app.state.pending_navigation.is_some());
    }

    #[test]
    fn test_new_entry_clears_fields() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .returning(|s| Ok(navigation_for(s)));
        let mut app = app_with(submitter);

        fill_search(&mut app, "Dune");
        let start = Instant::now();
        app.submit_form(FormKind::Search, start);
        app.tick(start + Duration::from_secs(1));
        press(&mut app, KeyCode::Char('n'));

        let form = &app.state.search_form;
        assert!(form.values().iter().all(|(_, v)| v.is_empty()));
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_submitter_error_opens_dialog_and_resets() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().returning(|s| {
            Err(FormsError::Submission {
                form: s.form_id.clone(),
                reason: "connection refused".to_string(),
            })
        });
        let mut app = app_with(submitter);

        fill_search(&mut app, "Dune");
        press(&mut app, KeyCode::Enter);

        assert!(app.state.has_errors());
        assert!(!app.state.search_form.is_submitting());
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.has_errors());
    }

    #[test]
    fn test_f2_switches_form() {
        let mut app = app_with(MockSubmitter::new());
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.state.current_view, View::Form(FormKind::AddBook));
        type_text(&mut app, "Dune");
        assert_eq!(app.state.add_book_form.field("title").unwrap().value(), "Dune");
    }

    #[test]
    fn test_empty_book_form_reports_every_field() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().never();
        let mut app = app_with(submitter);

        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please correct the 5 highlighted fields")
        );
    }

    #[test]
    fn test_q_quits_from_result_page() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .returning(|s| Ok(navigation_for(s)));
        let mut app = app_with(submitter);

        fill_search(&mut app, "Dune");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());

        let start = Instant::now();
        app.submit_form(FormKind::Search, start);
        app.tick(start + Duration::from_secs(1));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
