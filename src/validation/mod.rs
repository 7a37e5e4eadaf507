//! Form validation
//!
//! - `constraint`: input constraints (pattern, length, numeric range)
//! - `rules`: ordered per-field checks and the built-in rule sets
//! - `validator`: error display, loading state and the validation pass
//! - `submit`: submit bindings for the search and add-book forms

mod constraint;
mod rules;
mod submit;
mod validator;

pub use constraint::{ConstraintSpec, Constraints, InputKind};
pub use rules::{book_rules, search_rules, FieldRule};
pub use submit::{submit_add_book_form, submit_search_form, SubmitOutcome};
pub use validator::FormValidator;
