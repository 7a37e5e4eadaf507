//! Input constraint checking
//!
//! Re-implements the subset of HTML constraint validation the library forms
//! rely on: `required`, `pattern`, `minlength`/`maxlength` for text inputs and
//! `min`/`max`/`step` for numeric inputs. Blank (empty or whitespace-only)
//! values only ever fail `required`; every other constraint skips them.

use crate::error::{FormsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Declarative constraints as they appear in configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSpec {
    pub required: bool,
    /// Pattern matched against the whole value
    pub pattern: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Numeric step; numeric inputs default to 1
    pub step: Option<f64>,
}

impl ConstraintSpec {
    /// ISBN-13 (978/979 prefix, numeric check digit) or ISBN-10 (check digit
    /// may be `X`), hyphens and spaces allowed between digits
    pub fn isbn() -> Self {
        Self {
            pattern: Some(
                r"97[89][- ]?(?:[0-9][- ]?){9}[0-9]|(?:[0-9][- ]?){9}[0-9X]".to_string(),
            ),
            ..Default::default()
        }
    }

    /// Four-digit publication year
    pub fn year() -> Self {
        Self {
            min: Some(1900.0),
            max: Some(2099.0),
            step: Some(1.0),
            ..Default::default()
        }
    }
}

/// Which constraint checks apply to an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Number,
    Select,
}

/// Compiled constraints attached to a field
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    kind: InputKind,
    required: bool,
    pattern: Option<Regex>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

/// Per-flag result of a constraint check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validity {
    pub value_missing: bool,
    pub pattern_mismatch: bool,
    pub too_short: bool,
    pub too_long: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub step_mismatch: bool,
    pub bad_input: bool,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        !(self.value_missing
            || self.pattern_mismatch
            || self.too_short
            || self.too_long
            || self.range_underflow
            || self.range_overflow
            || self.step_mismatch
            || self.bad_input)
    }
}

impl Constraints {
    /// Compile a spec for the given field. The pattern is anchored so it must
    /// match the entire value.
    pub fn compile(field: &str, kind: InputKind, spec: &ConstraintSpec) -> Result<Self> {
        let pattern = match spec.pattern.as_deref() {
            Some(p) if !p.is_empty() => Some(Regex::new(&format!("^(?:{p})$")).map_err(
                |source| FormsError::InvalidPattern {
                    field: field.to_string(),
                    source,
                },
            )?),
            _ => None,
        };

        Ok(Self {
            kind,
            required: spec.required,
            pattern,
            min_length: spec.min_length,
            max_length: spec.max_length,
            min: spec.min,
            max: spec.max,
            step: match kind {
                InputKind::Number => Some(
                    spec.step
                        .filter(|s| s.is_finite() && *s > 0.0)
                        .unwrap_or(1.0),
                ),
                _ => None,
            },
        })
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Check a value against every constraint
    pub fn check(&self, value: &str) -> Validity {
        let blank = value.trim().is_empty();
        let mut validity = Validity {
            value_missing: self.required && blank,
            ..Validity::default()
        };

        if blank {
            return validity;
        }

        match self.kind {
            InputKind::Text => {
                let len = value.chars().count();
                validity.too_short = self.min_length.is_some_and(|min| len < min);
                validity.too_long = self.max_length.is_some_and(|max| len > max);
                validity.pattern_mismatch =
                    self.pattern.as_ref().is_some_and(|re| !re.is_match(value));
            }
            InputKind::Number => match parse_number(value) {
                Some(n) => {
                    validity.range_underflow = self.min.is_some_and(|min| n < min);
                    validity.range_overflow = self.max.is_some_and(|max| n > max);
                    if let Some(step) = self.step {
                        let base = self.min.unwrap_or(0.0);
                        let ratio = (n - base) / step;
                        validity.step_mismatch = (ratio - ratio.round()).abs() > 1e-7;
                    }
                }
                None => validity.bad_input = true,
            },
            InputKind::Select => {}
        }

        validity
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.check(value).is_valid()
    }
}

/// Parse a number the way a numeric input accepts it. Finite values only.
fn parse_number(value: &str) -> Option<f64> {
    if !is_number_syntax(value) {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Floating-point number syntax of numeric inputs: an optional `-`, then
/// `digits`, `digits.digits` or `.digits`, then an optional exponent.
/// No whitespace, no leading `+`, no trailing `.`.
fn is_number_syntax(value: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => (int.is_empty() || digits(int)) && digits(frac),
        None => digits(mantissa),
    };
    let exponent_ok = exponent.map_or(true, |e| {
        digits(e.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(e))
    });

    mantissa_ok && exponent_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isbn() -> Constraints {
        Constraints::compile("isbn", InputKind::Text, &ConstraintSpec::isbn()).unwrap()
    }

    fn year() -> Constraints {
        Constraints::compile("year", InputKind::Number, &ConstraintSpec::year()).unwrap()
    }

    mod isbn_pattern_tests {
        use super::*;

        #[test]
        fn test_accepts_isbn_10() {
            assert!(isbn().is_valid("0306406152"));
            assert!(isbn().is_valid("080442957X"));
        }

        #[test]
        fn test_accepts_isbn_13_with_hyphens() {
            assert!(isbn().is_valid("978-3-16-148410-0"));
            assert!(isbn().is_valid("9780306406157"));
        }

        #[test]
        fn test_isbn_13_check_digit_is_numeric() {
            assert!(isbn().check("978030640615X").pattern_mismatch);
            assert!(isbn().check("978-0-306-40615-X").pattern_mismatch);
        }

        #[test]
        fn test_rejects_letters_and_short_values() {
            assert!(isbn().check("abc").pattern_mismatch);
            assert!(!isbn().is_valid("12345"));
        }

        #[test]
        fn test_pattern_is_anchored() {
            assert!(!isbn().is_valid("x0306406152"));
            assert!(!isbn().is_valid("0306406152 trailing"));
        }

        #[test]
        fn test_blank_value_is_valid() {
            assert!(isbn().is_valid(""));
            assert!(isbn().is_valid("   "));
        }
    }

    mod year_range_tests {
        use super::*;

        #[test]
        fn test_bounds_are_inclusive() {
            assert!(year().is_valid("1900"));
            assert!(year().is_valid("2099"));
        }

        #[test]
        fn test_out_of_range() {
            assert!(year().check("1899").range_underflow);
            assert!(year().check("2100").range_overflow);
        }

        #[test]
        fn test_fraction_is_step_mismatch() {
            assert!(year().check("1999.5").step_mismatch);
        }

        #[test]
        fn test_non_numeric_is_bad_input() {
            assert!(year().check("nineteen").bad_input);
            assert!(year().check(" 1999").bad_input);
            assert!(year().check("+1999").bad_input);
        }

        #[test]
        fn test_incomplete_number_is_bad_input() {
            assert!(year().check("1999.").bad_input);
            assert!(year().check("1999e").bad_input);
            assert!(year().check("-").bad_input);
            assert!(year().check("19.9.9").bad_input);
        }

        #[test]
        fn test_exponent_and_fraction_forms() {
            assert!(year().is_valid("1999.0"));
            assert!(year().is_valid("1.9e3"));
            assert!(year().check("-1999").range_underflow);
        }
    }

    #[test]
    fn test_required_flags_empty_value() {
        let spec = ConstraintSpec {
            required: true,
            ..Default::default()
        };
        let constraints = Constraints::compile("title", InputKind::Text, &spec).unwrap();
        assert!(constraints.check("").value_missing);
        assert!(constraints.check("  ").value_missing);
        assert!(constraints.is_valid("Dune"));
    }

    #[test]
    fn test_length_counts_chars() {
        let spec = ConstraintSpec {
            min_length: Some(2),
            max_length: Some(3),
            ..Default::default()
        };
        let constraints = Constraints::compile("q", InputKind::Text, &spec).unwrap();
        assert!(constraints.is_valid("åä"));
        assert!(constraints.check("å").too_short);
        assert!(constraints.check("åäöü").too_long);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let spec = ConstraintSpec {
            pattern: Some("[".to_string()),
            ..Default::default()
        };
        let err = Constraints::compile("isbn", InputKind::Text, &spec).unwrap_err();
        assert!(matches!(err, FormsError::InvalidPattern { ref field, .. } if field == "isbn"));
    }

    #[test]
    fn test_select_ignores_text_constraints() {
        let spec = ConstraintSpec {
            min_length: Some(10),
            ..Default::default()
        };
        let constraints = Constraints::compile("searchType", InputKind::Select, &spec).unwrap();
        assert!(constraints.is_valid("title"));
    }
}
