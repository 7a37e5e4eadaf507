//! Trait abstraction for form submission to enable mocking in tests

use super::{Navigation, Submission};
use crate::error::Result;

/// Performs the submission of a validated form
#[cfg_attr(test, mockall::automock)]
pub trait Submitter {
    /// Submit the captured form and return where it navigated to
    fn submit(&mut self, submission: &Submission) -> Result<Navigation>;
}
