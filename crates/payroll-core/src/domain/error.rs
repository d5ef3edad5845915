// ============================================================================
// domain/error.rs - FIELD VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::EmployeeField;

/// Root domain error type.
///
/// The domain has a single failure condition: an attribute that violates its
/// rule. The error carries the offending field so callers can branch on it
/// without inspecting the message, while `Display` yields the exact
/// client-facing text (e.g. `First name cannot be empty.`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    #[error("{}", .field.violation_message())]
    InvalidArgument { field: EmployeeField },
}

impl DomainError {
    pub const fn invalid(field: EmployeeField) -> Self {
        Self::InvalidArgument { field }
    }

    /// The field whose rule was violated.
    pub const fn field(&self) -> EmployeeField {
        match self {
            Self::InvalidArgument { field } => *field,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self.field() {
            EmployeeField::JobYears => vec![
                "Job years must be zero or a positive whole number".into(),
                "Example: --job-years 5".into(),
            ],
            EmployeeField::Email => vec![
                "Provide an address of the form name@domain.tld".into(),
                "The top-level domain must be 2 to 6 letters".into(),
            ],
            field => vec![format!(
                "Provide a {} containing at least one non-space character",
                field.label().to_lowercase()
            )],
        }
    }
}
