//! Domain value objects: EmployeeField, EmployeeId.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity of
//! their own. They hold NO validation logic. The rules live in
//! `validation.rs`; this file only defines the types, their string
//! representations, and their `FromStr` parsers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ── EmployeeField ─────────────────────────────────────────────────────────────

/// A validated attribute of an employee record.
///
/// `id` is deliberately absent: identity is assigned by the persistence
/// collaborator and never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    FirstName,
    LastName,
    Description,
    JobYears,
    JobTitle,
    Email,
}

impl EmployeeField {
    /// Fields in validation order.
    pub const ALL: [EmployeeField; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Description,
        Self::JobYears,
        Self::JobTitle,
        Self::Email,
    ];

    /// The wire name of the field (camelCase, as serialized).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Description => "description",
            Self::JobYears => "jobYears",
            Self::JobTitle => "jobTitle",
            Self::Email => "email",
        }
    }

    /// Human label used in messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Description => "Description",
            Self::JobYears => "Job Years",
            Self::JobTitle => "Job Title",
            Self::Email => "E-mail",
        }
    }

    /// The message reported when this field's rule is violated.
    pub const fn violation_message(&self) -> &'static str {
        match self {
            Self::FirstName => "First name cannot be empty.",
            Self::LastName => "Last name cannot be empty.",
            Self::Description => "Description cannot be empty.",
            Self::JobYears => "Job Years cannot be negative.",
            Self::JobTitle => "Job Title cannot be empty.",
            Self::Email => "E-mail must be valid.",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for EmployeeField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect();

        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

// ── EmployeeId ────────────────────────────────────────────────────────────────

/// Opaque identity assigned by a persistence collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_display_is_camel_case() {
        assert_eq!(EmployeeField::FirstName.to_string(), "firstName");
        assert_eq!(EmployeeField::JobYears.to_string(), "jobYears");
    }

    #[test]
    fn field_from_str_accepts_case_styles() {
        assert_eq!(
            "firstName".parse::<EmployeeField>().unwrap(),
            EmployeeField::FirstName
        );
        assert_eq!(
            "job_title".parse::<EmployeeField>().unwrap(),
            EmployeeField::JobTitle
        );
        assert_eq!(
            "job-years".parse::<EmployeeField>().unwrap(),
            EmployeeField::JobYears
        );
        assert_eq!("EMAIL".parse::<EmployeeField>().unwrap(), EmployeeField::Email);
    }

    #[test]
    fn field_from_str_rejects_unknown() {
        assert!("salary".parse::<EmployeeField>().is_err());
        assert!("id".parse::<EmployeeField>().is_err());
    }

    #[test]
    fn all_is_in_validation_order() {
        assert_eq!(EmployeeField::ALL[0], EmployeeField::FirstName);
        assert_eq!(EmployeeField::ALL[3], EmployeeField::JobYears);
        assert_eq!(EmployeeField::ALL[5], EmployeeField::Email);
    }

    #[test]
    fn employee_id_parses_and_displays() {
        let id: EmployeeId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert!("-1".parse::<EmployeeId>().is_err());
    }
}
