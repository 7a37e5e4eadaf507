//! Submit bindings for the search and add-book forms
//!
//! Each binding intercepts the submit, validates, and only on success enters
//! the loading state and hands the form to the submitter.

use super::validator::FormValidator;
use crate::error::Result;
use crate::state::Form;
use crate::submit::{Navigation, Submission, Submitter};
use tracing::{debug, info};

/// What happened to a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form is already submitting; its control is disabled
    Ignored,
    /// Validation failed and errors are shown on the form
    Rejected,
    Submitted(Navigation),
}

/// Submit the search form
pub fn submit_search_form(form: &mut Form, submitter: &mut dyn Submitter) -> Result<SubmitOutcome> {
    submit_with(form, submitter, FormValidator::validate_search_form)
}

/// Submit the add-book form
pub fn submit_add_book_form(
    form: &mut Form,
    submitter: &mut dyn Submitter,
) -> Result<SubmitOutcome> {
    submit_with(form, submitter, FormValidator::validate_books_form)
}

fn submit_with(
    form: &mut Form,
    submitter: &mut dyn Submitter,
    validate: fn(&mut Form) -> bool,
) -> Result<SubmitOutcome> {
    if form.is_submitting() {
        debug!(form = %form.id, "submit ignored while submitting");
        return Ok(SubmitOutcome::Ignored);
    }

    if !validate(form) {
        info!(form = %form.id, errors = form.errors().len(), "submission withheld");
        return Ok(SubmitOutcome::Rejected);
    }

    FormValidator::show_loading(form);
    let navigation = submitter.submit(&Submission::from_form(form))?;
    Ok(SubmitOutcome::Submitted(navigation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormsError;
    use crate::state::{FormMethod, FormSpec, SubmissionState};
    use crate::submit::MockSubmitter;
    use crate::validation::rules::SEARCH_QUERY_MESSAGE;
    use pretty_assertions::assert_eq;

    fn search_form(query: &str) -> Form {
        let mut form = Form::from_spec(&FormSpec::search()).unwrap();
        form.field_mut("searchType").unwrap().select_value("title");
        form.field_mut("searchQuery").unwrap().set_text(query);
        form
    }

    fn navigation_for(submission: &Submission) -> Navigation {
        Navigation {
            form_id: submission.form_id.clone(),
            method: submission.method,
            url: submission.action.clone(),
            body: None,
            fields: submission.fields.clone(),
        }
    }

    #[test]
    fn test_short_query_blocks_submission() {
        let mut form = search_form("D");
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().never();

        let outcome = submit_search_form(&mut form, &mut submitter).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(
            form.field("searchQuery").unwrap().error_message(),
            Some(SEARCH_QUERY_MESSAGE)
        );
        assert_eq!(form.state, SubmissionState::Idle);
        assert!(!form.submit.as_ref().unwrap().disabled);
    }

    #[test]
    fn test_valid_search_enters_loading_and_submits() {
        let mut form = search_form("Du");
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .withf(|s| {
                s.form_id == "searchForm"
                    && s.method == FormMethod::Get
                    && s.fields[1] == ("searchQuery".to_string(), "Du".to_string())
            })
            .times(1)
            .returning(|s| Ok(navigation_for(s)));

        let outcome = submit_search_form(&mut form, &mut submitter).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
        assert_eq!(form.state, SubmissionState::Submitting);
        let button = form.submit.as_ref().unwrap();
        assert!(button.disabled);
        assert_eq!(button.text(), "Processing...");
    }

    #[test]
    fn test_second_submit_is_ignored() {
        let mut form = search_form("Dune");
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|s| Ok(navigation_for(s)));

        submit_search_form(&mut form, &mut submitter).unwrap();
        let outcome = submit_search_form(&mut form, &mut submitter).unwrap();
        assert_eq!(outcome, SubmitOutcome::Ignored);
    }

    #[test]
    fn test_invalid_book_form_is_rejected() {
        let mut form = Form::from_spec(&FormSpec::add_book()).unwrap();
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().never();

        let outcome = submit_add_book_form(&mut form, &mut submitter).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(form.errors().len(), 5);
    }

    #[test]
    fn test_valid_book_form_posts() {
        let mut form = Form::from_spec(&FormSpec::add_book()).unwrap();
        for (id, value) in [
            ("title", "Dune"),
            ("author", "Frank Herbert"),
            ("isbn", "0441172717"),
            ("publisher", "Ace"),
            ("year", "1965"),
        ] {
            form.field_mut(id).unwrap().set_text(value);
        }
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .withf(|s| s.method == FormMethod::Post && s.fields.len() == 5)
            .times(1)
            .returning(|s| Ok(navigation_for(s)));

        let outcome = submit_add_book_form(&mut form, &mut submitter).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Submitted(ref n) if n.form_id == "addBookForm"));
    }

    #[test]
    fn test_submitter_failure_propagates() {
        let mut form = search_form("Dune");
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().returning(|s| {
            Err(FormsError::Submission {
                form: s.form_id.clone(),
                reason: "offline".to_string(),
            })
        });

        let result = submit_search_form(&mut form, &mut submitter);
        assert!(matches!(result, Err(FormsError::Submission { .. })));
    }
}
