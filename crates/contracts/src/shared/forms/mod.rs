//! Form field validation
//!
//! A `FieldSpec` is a snapshot of one form field (current value plus static
//! metadata); `validate` turns it into a `ValidationResult`. Both are plain
//! values, so the UI layer can call `validate` on every input event without
//! holding any state here.

pub mod field;
pub mod validation;

pub use field::{resolve_label, FieldKind, FieldRole, FieldSpec};
pub use validation::{validate, ValidationResult};
