//! Application state definitions

use super::forms::{FieldFocus, Form, FormField};
use crate::config::FormsConfig;
use crate::error::Result;
use crate::submit::Navigation;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Spinner frames drawn in front of "Processing..."
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which of the two forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    #[default]
    Search,
    AddBook,
}

impl FormKind {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Search => Self::AddBook,
            Self::AddBook => Self::Search,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::AddBook => "Add Book",
        }
    }
}

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Editing a form
    Form(FormKind),
    /// Result page after a form was submitted
    Submitted(FormKind),
}

impl Default for View {
    fn default() -> Self {
        View::Form(FormKind::default())
    }
}

impl View {
    pub fn form_kind(&self) -> FormKind {
        match self {
            View::Form(kind) | View::Submitted(kind) => *kind,
        }
    }
}

/// A submission waiting for the loading state to be seen before navigating
#[derive(Debug, Clone)]
pub struct PendingNavigation {
    pub navigation: Navigation,
    pub since: Instant,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub search_form: Form,
    pub add_book_form: Form,
    pub pending_navigation: Option<PendingNavigation>,
    pub last_navigation: Option<Navigation>,
    pub spinner_frame: usize,
    last_spinner_tick: Option<Instant>,
    errors: VecDeque<String>,
}

impl AppState {
    /// Build both forms from configuration
    pub fn from_config(config: &FormsConfig) -> Result<Self> {
        Ok(Self {
            current_view: View::default(),
            search_form: Form::from_spec(&config.search_form)?,
            add_book_form: Form::from_spec(&config.add_book_form)?,
            pending_navigation: None,
            last_navigation: None,
            spinner_frame: 0,
            last_spinner_tick: None,
            errors: VecDeque::new(),
        })
    }

    pub fn form(&self, kind: FormKind) -> &Form {
        match kind {
            FormKind::Search => &self.search_form,
            FormKind::AddBook => &self.add_book_form,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut Form {
        match kind {
            FormKind::Search => &mut self.search_form,
            FormKind::AddBook => &mut self.add_book_form,
        }
    }

    /// The form belonging to the current view
    pub fn current_form(&self) -> &Form {
        self.form(self.current_view.form_kind())
    }

    pub fn current_form_mut(&mut self) -> &mut Form {
        self.form_mut(self.current_view.form_kind())
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.current_form_mut().next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.current_form_mut().prev_field();
    }

    /// The focused field, unless the submit control has focus
    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        let form = self.current_form_mut();
        if form.is_submitting() {
            return None;
        }
        form.get_active_field_mut()
    }

    /// Handle character input in form
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    /// Cycle a select field forward (Right) or backward (Left)
    pub fn form_cycle_option(&mut self, forward: bool) {
        if let Some(field) = self.active_field_mut() {
            if forward {
                field.select_next();
            } else {
                field.select_prev();
            }
        }
    }

    /// Advance the spinner if any form is loading and the interval elapsed
    pub fn tick_spinner(&mut self, now: Instant, interval: Duration) {
        if !(self.search_form.is_submitting() || self.add_book_form.is_submitting()) {
            self.last_spinner_tick = None;
            return;
        }
        match self.last_spinner_tick {
            Some(last) if now.duration_since(last) < interval => {}
            _ => {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
                self.last_spinner_tick = Some(now);
            }
        }
    }

    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
