//! Field snapshot types consumed by the validator.

/// Input kind of a form field, mirroring the HTML `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    /// Anything without a dedicated rule (checkbox, select, ...).
    Other,
}

/// Semantic role of a field, independent of its input kind.
///
/// Rules that apply to one specific field (not to a whole kind) key off an
/// explicit role tag instead of sniffing element identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// A person's display name. Gets a minimum-length rule.
    PersonName,
}

/// Snapshot of a form field's current value and static metadata.
///
/// `kind`, `required`, `label` and `role` are fixed for the lifetime of a
/// field; `value` changes on every keystroke. The UI layer rebuilds the
/// snapshot per validation call.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Display name used in error messages, already resolved (no `*` marker).
    pub label: String,
    pub role: Option<FieldRole>,
    /// Minimum length for role-based rules. `None` means the role default.
    pub min_length: Option<usize>,
}

impl FieldSpec {
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            value: String::new(),
            kind,
            required: false,
            label: label.into(),
            role: None,
            min_length: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: FieldRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Resolve the display label for a field.
///
/// Strips a trailing required-marker (`*`) and surrounding whitespace from
/// the associated label text; falls back to the placeholder when the field
/// has no label.
pub fn resolve_label(label: Option<&str>, placeholder: &str) -> String {
    match label {
        Some(text) => text.trim().trim_end_matches('*').trim_end().to_string(),
        None => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_label_strips_required_marker() {
        assert_eq!(resolve_label(Some("Full Name *"), "name"), "Full Name");
        assert_eq!(resolve_label(Some("Email*"), "email"), "Email");
        assert_eq!(resolve_label(Some("  Phone  "), "phone"), "Phone");
    }

    #[test]
    fn test_resolve_label_falls_back_to_placeholder() {
        assert_eq!(resolve_label(None, "Your email"), "Your email");
    }

    #[test]
    fn test_builder_sets_metadata() {
        let spec = FieldSpec::new("Full Name", FieldKind::Text)
            .required()
            .with_role(FieldRole::PersonName)
            .with_value("Thandi");

        assert!(spec.required);
        assert_eq!(spec.role, Some(FieldRole::PersonName));
        assert_eq!(spec.kind, FieldKind::Text);
        assert_eq!(spec.value, "Thandi");
        assert_eq!(spec.min_length, None);
    }
}
