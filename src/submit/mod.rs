//! Handing validated forms off for submission
//!
//! This module provides the payload types and the submitter that turns a form
//! into the request a browser would have sent for it.

mod navigation;
mod traits;

pub use navigation::{NavigationSubmitter, DEFAULT_BASE_URL};
#[cfg(test)]
pub use traits::MockSubmitter;
pub use traits::Submitter;

use crate::state::{Form, FormMethod};

/// Name/value pairs of one form, captured at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form_id: String,
    pub action: String,
    pub method: FormMethod,
    pub fields: Vec<(String, String)>,
}

impl Submission {
    pub fn from_form(form: &Form) -> Self {
        Self {
            form_id: form.id.clone(),
            action: form.action.clone(),
            method: form.method,
            fields: form.values(),
        }
    }

    /// `application/x-www-form-urlencoded` body of the submission
    pub fn encoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

/// The request that results from submitting a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub form_id: String,
    pub method: FormMethod,
    pub url: String,
    /// Encoded body for POST submissions
    pub body: Option<String>,
    pub fields: Vec<(String, String)>,
}
