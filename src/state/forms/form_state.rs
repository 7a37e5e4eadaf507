//! Form state management and form specs

use super::field::{FormField, SelectOption};
use crate::error::{FormsError, Result};
use crate::validation::{
    book_rules, search_rules, ConstraintSpec, Constraints, FieldRule, InputKind,
};
use serde::{Deserialize, Serialize};

pub const SEARCH_FORM_ID: &str = "searchForm";
pub const ADD_BOOK_FORM_ID: &str = "addBookForm";

/// Text shown on the submit control while a form is submitting
pub const PROCESSING_TEXT: &str = "Processing...";

/// Trait for moving focus between the fields of a form
pub trait FieldFocus {
    fn focus_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.focus_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.focus_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// HTTP method a form submits with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Whether a form has been handed off for submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// What the submit control currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonContent {
    Label(String),
    Spinner { text: String },
}

/// The form's submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub content: ButtonContent,
    pub disabled: bool,
    /// Label cached by the first switch to the loading state
    pub original_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            content: ButtonContent::Label(label.to_string()),
            disabled: false,
            original_label: None,
        }
    }

    /// Visible text, without the spinner glyph
    pub fn text(&self) -> &str {
        match &self.content {
            ButtonContent::Label(label) => label,
            ButtonContent::Spinner { text } => text,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.content, ButtonContent::Spinner { .. })
    }
}

/// Declarative description of one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: InputKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub constraints: ConstraintSpec,
    /// Whether the field has a companion error element
    #[serde(default = "default_true")]
    pub error_display: bool,
}

fn default_true() -> bool {
    true
}

impl FieldSpec {
    pub fn text(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: InputKind::Text,
            options: Vec::new(),
            constraints: ConstraintSpec::default(),
            error_display: true,
        }
    }

    pub fn number(id: &str, label: &str, constraints: ConstraintSpec) -> Self {
        Self {
            kind: InputKind::Number,
            constraints,
            ..Self::text(id, label)
        }
    }

    pub fn select(id: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            kind: InputKind::Select,
            options,
            ..Self::text(id, label)
        }
    }

    pub fn with_constraints(mut self, constraints: ConstraintSpec) -> Self {
        self.constraints = constraints;
        self
    }

    fn build(&self) -> Result<FormField> {
        let constraints = Constraints::compile(&self.id, self.kind, &self.constraints)?;
        let field = match self.kind {
            InputKind::Select => FormField::select(&self.id, &self.label, self.options.clone()),
            InputKind::Text | InputKind::Number => FormField::text(&self.id, &self.label),
        }
        .with_constraints(constraints);

        Ok(if self.error_display {
            field
        } else {
            field.without_error_display()
        })
    }
}

/// Declarative description of a whole form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    pub id: String,
    pub title: String,
    pub action: String,
    #[serde(default)]
    pub method: FormMethod,
    /// `None` builds a form without a submit control
    #[serde(default)]
    pub submit_label: Option<String>,
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

impl FormSpec {
    /// Catalogue search: pick a search type, then enter a query
    pub fn search() -> Self {
        Self {
            id: SEARCH_FORM_ID.to_string(),
            title: "Search Books".to_string(),
            action: "/books".to_string(),
            method: FormMethod::Get,
            submit_label: Some("Search".to_string()),
            fields: vec![
                FieldSpec::select(
                    "searchType",
                    "Search by",
                    vec![
                        SelectOption::new("title", "Title"),
                        SelectOption::new("author", "Author"),
                        SelectOption::new("isbn", "ISBN"),
                    ],
                ),
                FieldSpec::text("searchQuery", "Search"),
            ],
            rules: search_rules(),
        }
    }

    /// Add a book to the catalogue
    pub fn add_book() -> Self {
        Self {
            id: ADD_BOOK_FORM_ID.to_string(),
            title: "Add Book".to_string(),
            action: "/books".to_string(),
            method: FormMethod::Post,
            submit_label: Some("Add Book".to_string()),
            fields: vec![
                FieldSpec::text("title", "Title"),
                FieldSpec::text("author", "Author"),
                FieldSpec::text("isbn", "ISBN").with_constraints(ConstraintSpec::isbn()),
                FieldSpec::text("publisher", "Publisher"),
                FieldSpec::number("year", "Year", ConstraintSpec::year()),
            ],
            rules: book_rules(),
        }
    }
}

/// A live form: fields with their current values and error displays, the
/// submit control, and the rules its submit binding validates against
#[derive(Debug, Clone)]
pub struct Form {
    pub id: String,
    pub title: String,
    pub action: String,
    pub method: FormMethod,
    pub fields: Vec<FormField>,
    pub submit: Option<SubmitButton>,
    pub rules: Vec<FieldRule>,
    pub state: SubmissionState,
    pub active_field_index: usize,
}

impl Form {
    /// Build a form from its spec. Every rule must name a declared field.
    pub fn from_spec(spec: &FormSpec) -> Result<Self> {
        let fields = spec
            .fields
            .iter()
            .map(FieldSpec::build)
            .collect::<Result<Vec<_>>>()?;

        if let Some(rule) = spec
            .rules
            .iter()
            .find(|r| !fields.iter().any(|f| f.id == r.field))
        {
            return Err(FormsError::UnknownField {
                form: spec.id.clone(),
                field: rule.field.clone(),
            });
        }

        Ok(Self {
            id: spec.id.clone(),
            title: spec.title.clone(),
            action: spec.action.clone(),
            method: spec.method,
            fields,
            submit: spec.submit_label.as_deref().map(SubmitButton::new),
            rules: spec.rules.clone(),
            state: SubmissionState::Idle,
            active_field_index: 0,
        })
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Name/value pairs in field order, as they would be submitted
    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.id.clone(), f.value().to_string()))
            .collect()
    }

    /// Returns true if the submit control has focus
    pub fn is_submit_focused(&self) -> bool {
        self.submit.is_some() && self.active_field_index == self.fields.len()
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn get_active_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Fields currently showing an error, in field order
    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.error_message().map(|m| (f.id.as_str(), m)))
            .collect()
    }
}

impl FieldFocus for Form {
    fn focus_count(&self) -> usize {
        self.fields.len() + usize::from(self.submit.is_some())
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.focus_count().saturating_sub(1));
    }
}
