//! Error types for configuration loading and form submission
//!
//! Validation failures are never errors: they are rendered inline next to the
//! offending field. These variants cover the plumbing around the forms.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building forms or handing them off for submission
#[derive(Debug, Error)]
pub enum FormsError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config for {path}: {source}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("form '{form}' has a rule for unknown field '{field}'")]
    UnknownField { form: String, field: String },

    #[error("form '{0}' is not configured")]
    MissingForm(String),

    #[error("submission of form '{form}' failed: {reason}")]
    Submission { form: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FormsError>;
