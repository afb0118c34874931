//! Validation rules for form fields.

use once_cell::sync::Lazy;
use regex::Regex;

use super::field::{FieldKind, FieldRole, FieldSpec};

/// Minimal `local@domain.tld` shape. Deliberately not RFC-complete.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Optional leading `+`, then ten or more of digits, spaces, hyphens, parens.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()-]{10,}$").expect("phone pattern is valid"));

/// Default minimum length for the person-name rule.
const PERSON_NAME_MIN_LEN: usize = 2;

/// Outcome of validating one field.
///
/// Invariant: `message` is present exactly when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consume the result, keeping only the error message (if any).
    pub fn into_message(self) -> Option<String> {
        self.message
    }
}

/// Validate one field snapshot.
///
/// Total function: never panics, never raises. A validation failure is data,
/// not a fault. Empty optional fields are always valid; format rules only
/// apply once the user has typed something.
pub fn validate(field: &FieldSpec) -> ValidationResult {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return ValidationResult::fail(format!("{} is required", field.label));
    }

    if value.is_empty() {
        return ValidationResult::ok();
    }

    match field.kind {
        FieldKind::Email => {
            if !EMAIL_RE.is_match(value) {
                return ValidationResult::fail("Please enter a valid email address");
            }
        }
        FieldKind::Tel => {
            if !PHONE_RE.is_match(value) {
                return ValidationResult::fail("Please enter a valid phone number");
            }
        }
        FieldKind::Text => {
            if field.role == Some(FieldRole::PersonName) {
                let min_len = field.min_length.unwrap_or(PERSON_NAME_MIN_LEN);
                if value.chars().count() < min_len {
                    return ValidationResult::fail(format!(
                        "Name must be at least {} characters long",
                        min_len
                    ));
                }
            }
        }
        FieldKind::Other => {}
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::field::{FieldKind, FieldRole, FieldSpec};

    fn required_field(kind: FieldKind, value: &str) -> FieldSpec {
        FieldSpec::new("Full Name", kind).required().with_value(value)
    }

    #[test]
    fn test_required_empty_is_invalid_for_every_kind() {
        for kind in [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Other,
        ] {
            let result = validate(&required_field(kind, ""));
            assert!(!result.is_valid());
            assert_eq!(result.message(), Some("Full Name is required"));
        }
    }

    #[test]
    fn test_required_whitespace_only_is_invalid() {
        let result = validate(&required_field(FieldKind::Text, "   "));
        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("Full Name is required"));
    }

    #[test]
    fn test_optional_empty_is_valid_for_every_kind() {
        for kind in [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Other,
        ] {
            let spec = FieldSpec::new("Anything", kind);
            assert!(validate(&spec).is_valid());
        }
    }

    #[test]
    fn test_email_rule() {
        let ok = FieldSpec::new("Email", FieldKind::Email).with_value("a@b.co");
        assert!(validate(&ok).is_valid());

        let bad = FieldSpec::new("Email", FieldKind::Email).with_value("not-an-email");
        let result = validate(&bad);
        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("Please enter a valid email address"));

        // Missing dot in the domain part is rejected too.
        let no_tld = FieldSpec::new("Email", FieldKind::Email).with_value("a@b");
        assert!(!validate(&no_tld).is_valid());
    }

    #[test]
    fn test_phone_rule() {
        let ok = FieldSpec::new("Phone", FieldKind::Tel).with_value("012 345 6789");
        assert!(validate(&ok).is_valid());

        let with_prefix = FieldSpec::new("Phone", FieldKind::Tel).with_value("+27 (12) 345-6789");
        assert!(validate(&with_prefix).is_valid());

        let too_short = FieldSpec::new("Phone", FieldKind::Tel).with_value("123");
        let result = validate(&too_short);
        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("Please enter a valid phone number"));

        let letters = FieldSpec::new("Phone", FieldKind::Tel).with_value("phone me maybe");
        assert!(!validate(&letters).is_valid());
    }

    #[test]
    fn test_person_name_rule() {
        let short = FieldSpec::new("Full Name", FieldKind::Text)
            .with_role(FieldRole::PersonName)
            .with_value("A");
        let result = validate(&short);
        assert!(!result.is_valid());
        assert_eq!(
            result.message(),
            Some("Name must be at least 2 characters long")
        );

        let ok = FieldSpec::new("Full Name", FieldKind::Text)
            .with_role(FieldRole::PersonName)
            .with_value("Al");
        assert!(validate(&ok).is_valid());
    }

    #[test]
    fn test_person_name_rule_is_role_scoped_not_kind_scoped() {
        // Plain text fields without the role accept one-character values.
        let spec = FieldSpec::new("Subject", FieldKind::Text).with_value("A");
        assert!(validate(&spec).is_valid());
    }

    #[test]
    fn test_person_name_trims_before_counting() {
        let spec = FieldSpec::new("Full Name", FieldKind::Text)
            .with_role(FieldRole::PersonName)
            .with_value("  A  ");
        assert!(!validate(&spec).is_valid());
    }

    #[test]
    fn test_required_check_wins_over_format_check() {
        let spec = FieldSpec::new("Email", FieldKind::Email).required().with_value("  ");
        assert_eq!(validate(&spec).message(), Some("Email is required"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let spec = FieldSpec::new("Email", FieldKind::Email).with_value("not-an-email");
        assert_eq!(validate(&spec), validate(&spec));

        let ok = FieldSpec::new("Phone", FieldKind::Tel).with_value("012 345 6789");
        assert_eq!(validate(&ok), validate(&ok));
    }
}
