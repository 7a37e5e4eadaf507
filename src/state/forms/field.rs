//! Form field value objects

use crate::validation::{Constraints, InputKind};
use serde::{Deserialize, Serialize};

/// One choice of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Select {
        options: Vec<SelectOption>,
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// The message element paired with a field, shown below it when the field
/// fails validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub id: String,
    pub text: String,
    pub visible: bool,
}

impl ErrorDisplay {
    pub fn for_field(field_id: &str) -> Self {
        Self {
            id: format!("{field_id}-error"),
            text: String::new(),
            visible: false,
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub value: FieldValue,
    pub constraints: Constraints,
    /// Set while the field carries the invalid marker
    pub invalid: bool,
    /// `None` when the field has no companion error element
    pub error: Option<ErrorDisplay>,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            constraints: Constraints::default(),
            invalid: false,
            error: Some(ErrorDisplay::for_field(id)),
        }
    }

    /// Create a new select field with nothing selected
    pub fn select(id: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            value: FieldValue::Select {
                options,
                selected: None,
            },
            ..Self::text(id, label)
        }
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Drop the companion error element
    pub fn without_error_display(mut self) -> Self {
        self.error = None;
        self
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select { .. })
    }

    pub fn is_numeric(&self) -> bool {
        self.constraints.kind() == InputKind::Number
    }

    /// The submitted value: the text as typed, or the selected option's value
    /// (empty when nothing is selected)
    pub fn value(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { options, selected } => selected
                .and_then(|i| options.get(i))
                .map_or("", |o| o.value.as_str()),
        }
    }

    /// Whether the current value satisfies the field's constraints
    pub fn check_validity(&self) -> bool {
        self.constraints.is_valid(self.value())
    }

    /// Set the text value (ignored for select fields)
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.to_string();
        }
    }

    /// Select the option whose value matches, clearing the selection if none does
    #[allow(dead_code)]
    pub fn select_value(&mut self, value: &str) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = options.iter().position(|o| o.value == value);
        }
    }

    /// Push a character to the field value.
    /// Digits pick a select option by its 1-based position; 0 clears.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Select { options, selected } => {
                if let Some(d) = c.to_digit(10) {
                    let d = d as usize;
                    if d == 0 {
                        *selected = None;
                    } else if d <= options.len() {
                        *selected = Some(d - 1);
                    }
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Move the selection forward, wrapping through "nothing selected"
    pub fn select_next(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = match *selected {
                None if !options.is_empty() => Some(0),
                Some(i) if i + 1 < options.len() => Some(i + 1),
                _ => None,
            };
        }
    }

    /// Move the selection backward, wrapping through "nothing selected"
    pub fn select_prev(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = match *selected {
                None => options.len().checked_sub(1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            };
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => match selected.and_then(|i| options.get(i))
            {
                Some(option) => format!("< {} >", option.label),
                None => "< Select... >".to_string(),
            },
        }
    }

    /// Error text currently shown for this field, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| e.visible)
            .map(|e| e.text.as_str())
    }
}
