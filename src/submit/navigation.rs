//! Submitter that resolves a form into the request a browser would send

use super::{Navigation, Submission, Submitter};
use crate::error::{FormsError, Result};
use crate::state::FormMethod;
use tracing::info;
use url::Url;

/// Default origin form actions are resolved against
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Resolves the form action against a base URL and encodes the fields into
/// the query string (GET) or the request body (POST)
#[derive(Debug, Clone)]
pub struct NavigationSubmitter {
    base: Url,
}

impl NavigationSubmitter {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| FormsError::Submission {
            form: String::new(),
            reason: format!("invalid base URL '{base_url}': {e}"),
        })?;
        Ok(Self { base })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }
}

impl Submitter for NavigationSubmitter {
    fn submit(&mut self, submission: &Submission) -> Result<Navigation> {
        let mut url = self
            .base
            .join(&submission.action)
            .map_err(|e| FormsError::Submission {
                form: submission.form_id.clone(),
                reason: format!("invalid action '{}': {e}", submission.action),
            })?;

        let encoded = submission.encoded();
        let body = match submission.method {
            FormMethod::Get => {
                url.set_query(Some(&encoded));
                None
            }
            FormMethod::Post => Some(encoded),
        };

        info!(
            form = %submission.form_id,
            method = submission.method.as_str(),
            url = %url,
            "form submitted"
        );

        Ok(Navigation {
            form_id: submission.form_id.clone(),
            method: submission.method,
            url: url.into(),
            body,
            fields: submission.fields.clone(),
        })
    }
}
