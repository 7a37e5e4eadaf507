//! Inline error display, loading state and rule-driven validation

use super::rules::FieldRule;
use crate::state::{ButtonContent, Form, FormField, SubmissionState, PROCESSING_TEXT};
use tracing::{debug, warn};

/// Stateless operations over a form and its fields
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    /// Hide the field's error message and drop its invalid marker
    pub fn clear_error(field: &mut FormField) {
        if let Some(error) = field.error.as_mut() {
            error.text.clear();
            error.visible = false;
        }
        field.invalid = false;
    }

    /// Show `message` below the field and mark it invalid. Without an error
    /// display only the marker is applied.
    pub fn show_error(field: &mut FormField, message: &str) {
        if let Some(error) = field.error.as_mut() {
            error.text = message.to_string();
            error.visible = true;
        }
        field.invalid = true;
    }

    /// Disable the submit control and swap its label for a spinner.
    ///
    /// The original label is cached on the first call only, so repeated calls
    /// never cache "Processing...". Forms without a submit control are left
    /// untouched.
    pub fn show_loading(form: &mut Form) {
        let Some(button) = form.submit.as_mut() else {
            return;
        };

        button.disabled = true;
        if button.original_label.is_none() {
            button.original_label = Some(button.text().to_string());
        }
        button.content = ButtonContent::Spinner {
            text: PROCESSING_TEXT.to_string(),
        };
        form.state = SubmissionState::Submitting;
    }

    /// Leave the loading state: re-enable the control and restore its label
    pub fn reset_loading(form: &mut Form) {
        if let Some(button) = form.submit.as_mut() {
            if let Some(label) = button.original_label.take() {
                button.content = ButtonContent::Label(label);
            }
            button.disabled = false;
        }
        form.state = SubmissionState::Idle;
    }

    /// Run `rules` against the form and render the outcome.
    ///
    /// Presence and length checks for every rule run first, in rule order;
    /// input constraint checks run afterwards, again in rule order. Each check
    /// overwrites the field's error, so a field shows at most the last failure.
    pub fn validate(form: &mut Form, rules: &[FieldRule]) -> bool {
        let mut is_valid = true;

        for rule in rules {
            let Some(field) = form.field_mut(&rule.field) else {
                warn!(form = %form.id, field = %rule.field, "rule names a missing field");
                continue;
            };
            Self::clear_error(field);

            if let Some(required) = &rule.required {
                let value = if required.trim {
                    field.value().trim()
                } else {
                    field.value()
                };
                if value.is_empty() {
                    debug!(field = %rule.field, "required field is empty");
                    Self::show_error(field, &required.message);
                    is_valid = false;
                }
            }

            if let Some(min) = &rule.min_length {
                if field.value().chars().count() < min.chars {
                    debug!(field = %rule.field, min = min.chars, "value too short");
                    Self::show_error(field, &min.message);
                    is_valid = false;
                }
            }
        }

        for rule in rules {
            let Some(message) = &rule.format else {
                continue;
            };
            let Some(field) = form.field_mut(&rule.field) else {
                continue;
            };
            if !field.check_validity() {
                debug!(field = %rule.field, "input constraints failed");
                Self::show_error(field, message);
                is_valid = false;
            }
        }

        is_valid
    }

    /// Validate the add-book form against its configured rules
    pub fn validate_books_form(form: &mut Form) -> bool {
        let rules = form.rules.clone();
        Self::validate(form, &rules)
    }

    /// Validate the search form against its configured rules
    pub fn validate_search_form(form: &mut Form) -> bool {
        let rules = form.rules.clone();
        Self::validate(form, &rules)
    }
}
