//! Form domain layer
//!
//! Fields own their companion error displays and forms own their fields, so
//! the validator works on explicit handles instead of looking elements up in a
//! shared document.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    ButtonContent, FieldFocus, Form, FormMethod, FormSpec, SubmissionState, SubmitButton,
    ADD_BOOK_FORM_ID, PROCESSING_TEXT, SEARCH_FORM_ID,
};
