//! Sample employees for demos and tests.

use payroll_core::domain::{DomainError, Employee};

/// The three sample records: Frodo, Bilbo and Samwise. Ids are unassigned.
///
/// Every sample goes through the validated constructor, so a broken sample
/// is reported rather than skipped.
pub fn fellowship() -> Result<Vec<Employee>, DomainError> {
    [
        ("Frodo", "Baggins", "ring bearer", 5, "Hobbit", "frodo@shire.me"),
        ("Bilbo", "Baggins", "burglar", 60, "Retired", "bilbo@shire.me"),
        ("Samwise", "Gamgee", "gardener", 3, "Gardener", "sam@shire.me"),
    ]
    .into_iter()
    .map(|(first, last, description, years, title, email)| {
        Employee::new(first, last, description, years, title, email)
    })
    .collect()
}
