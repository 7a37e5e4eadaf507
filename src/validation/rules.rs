//! Ordered validation rules driving the validator

use serde::{Deserialize, Serialize};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_ISBN_MESSAGE: &str = "Please enter a valid ISBN";
pub const INVALID_YEAR_MESSAGE: &str = "Please enter a valid year (1900-2099)";
pub const SEARCH_TYPE_MESSAGE: &str = "Please select a search type";
pub const SEARCH_QUERY_MESSAGE: &str = "Search query must be at least 2 characters long";

/// Presence check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredRule {
    pub message: String,
    /// Whitespace-only values count as empty
    #[serde(default = "default_trim")]
    pub trim: bool,
}

fn default_trim() -> bool {
    true
}

/// Minimum length of the raw (untrimmed) value, counted in chars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinLengthRule {
    pub chars: usize,
    pub message: String,
}

/// Checks run against one field during a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<RequiredRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<MinLengthRule>,
    /// Message reported when the field's input constraints fail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FieldRule {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            required: None,
            min_length: None,
            format: None,
        }
    }

    /// Require a non-blank value
    pub fn required(mut self, message: &str) -> Self {
        self.required = Some(RequiredRule {
            message: message.to_string(),
            trim: true,
        });
        self
    }

    /// Require a non-empty value without trimming it first
    pub fn required_raw(mut self, message: &str) -> Self {
        self.required = Some(RequiredRule {
            message: message.to_string(),
            trim: false,
        });
        self
    }

    pub fn min_length(mut self, chars: usize, message: &str) -> Self {
        self.min_length = Some(MinLengthRule {
            chars,
            message: message.to_string(),
        });
        self
    }

    pub fn format(mut self, message: &str) -> Self {
        self.format = Some(message.to_string());
        self
    }
}

/// Rules for the add-book form: every field is required, ISBN and year are
/// also checked against their input constraints.
pub fn book_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new("title").required(REQUIRED_MESSAGE),
        FieldRule::new("author").required(REQUIRED_MESSAGE),
        FieldRule::new("isbn")
            .required(REQUIRED_MESSAGE)
            .format(INVALID_ISBN_MESSAGE),
        FieldRule::new("publisher").required(REQUIRED_MESSAGE),
        FieldRule::new("year")
            .required(REQUIRED_MESSAGE)
            .format(INVALID_YEAR_MESSAGE),
    ]
}

/// Rules for the search form
pub fn search_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new("searchType").required_raw(SEARCH_TYPE_MESSAGE),
        FieldRule::new("searchQuery").min_length(2, SEARCH_QUERY_MESSAGE),
    ]
}
