//! The `Employee` entity and its builder.
//!
//! An `Employee` produced by [`Employee::new`] or [`EmployeeBuilder::build`]
//! is guaranteed valid: every text attribute is non-blank, `job_years` is
//! non-negative and `email` is well-formed. Setters re-apply the same rule as
//! construction and leave the previous value in place when they fail.
//!
//! # Unchecked reconstruction
//!
//! [`Employee::empty`] (and `Default`) and `serde` deserialization populate
//! the record WITHOUT validation. These paths exist for persistence
//! collaborators rebuilding records they stored themselves; call
//! [`Employee::validate`] before trusting a record from anywhere else.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::common::{Plain, Quoted},
    error::DomainError,
    validation,
    value_objects::{EmployeeField, EmployeeId},
};

// ── Entity ────────────────────────────────────────────────────────────────────

/// An employee record with e-mail contact.
///
/// Equality and hashing cover every attribute, `id` included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    id: Option<EmployeeId>,
    first_name: Option<String>,
    last_name: Option<String>,
    description: Option<String>,
    job_years: i32,
    job_title: Option<String>,
    email: Option<String>,
}

impl Employee {
    /// Build a validated employee.
    ///
    /// Text arguments accept `&str` or `Option<&str>`; `None` is treated like
    /// a blank value. Rules are checked in declaration order and the first
    /// violation is returned.
    pub fn new<'a>(
        first_name: impl Into<Option<&'a str>>,
        last_name: impl Into<Option<&'a str>>,
        description: impl Into<Option<&'a str>>,
        job_years: i32,
        job_title: impl Into<Option<&'a str>>,
        email: impl Into<Option<&'a str>>,
    ) -> Result<Self, DomainError> {
        EmployeeBuilder {
            first_name: first_name.into().map(str::to_owned),
            last_name: last_name.into().map(str::to_owned),
            description: description.into().map(str::to_owned),
            job_years,
            job_title: job_title.into().map(str::to_owned),
            email: email.into().map(str::to_owned),
        }
        .build()
    }

    /// Start building a new `Employee`.
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::new()
    }

    /// An empty shell with every attribute absent and `job_years == 0`.
    ///
    /// Performs no validation. Reserved for trusted reconstruction from a
    /// persisted source.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Re-check every rule in declaration order.
    ///
    /// Construction already guarantees this; it is meant for records that
    /// came in through [`Employee::empty`] or deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        validation::require_text(EmployeeField::FirstName, self.first_name.as_deref())?;
        validation::require_text(EmployeeField::LastName, self.last_name.as_deref())?;
        validation::require_text(EmployeeField::Description, self.description.as_deref())?;
        validation::require_non_negative(EmployeeField::JobYears, self.job_years)?;
        validation::require_text(EmployeeField::JobTitle, self.job_title.as_deref())?;
        validation::require_email(self.email.as_deref())?;
        Ok(())
    }

    // ── Identity ──────────────────────────────────────────────────────────

    pub const fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    /// Assign or clear the identity. Not validated.
    pub fn set_id(&mut self, id: impl Into<Option<EmployeeId>>) {
        self.id = id.into();
    }

    /// Consuming form of [`Employee::set_id`].
    pub fn with_id(mut self, id: impl Into<Option<EmployeeId>>) -> Self {
        self.set_id(id);
        self
    }

    // ── Getters ───────────────────────────────────────────────────────────

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub const fn job_years(&self) -> i32 {
        self.job_years
    }
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    // ── Validated setters ─────────────────────────────────────────────────

    pub fn set_first_name<'a>(
        &mut self,
        first_name: impl Into<Option<&'a str>>,
    ) -> Result<(), DomainError> {
        let value = validation::require_text(EmployeeField::FirstName, first_name.into())?;
        self.first_name = Some(value.to_owned());
        Ok(())
    }

    pub fn set_last_name<'a>(
        &mut self,
        last_name: impl Into<Option<&'a str>>,
    ) -> Result<(), DomainError> {
        let value = validation::require_text(EmployeeField::LastName, last_name.into())?;
        self.last_name = Some(value.to_owned());
        Ok(())
    }

    pub fn set_description<'a>(
        &mut self,
        description: impl Into<Option<&'a str>>,
    ) -> Result<(), DomainError> {
        let value = validation::require_text(EmployeeField::Description, description.into())?;
        self.description = Some(value.to_owned());
        Ok(())
    }

    pub fn set_job_years(&mut self, job_years: i32) -> Result<(), DomainError> {
        self.job_years = validation::require_non_negative(EmployeeField::JobYears, job_years)?;
        Ok(())
    }

    pub fn set_job_title<'a>(
        &mut self,
        job_title: impl Into<Option<&'a str>>,
    ) -> Result<(), DomainError> {
        let value = validation::require_text(EmployeeField::JobTitle, job_title.into())?;
        self.job_title = Some(value.to_owned());
        Ok(())
    }

    pub fn set_email<'a>(&mut self, email: impl Into<Option<&'a str>>) -> Result<(), DomainError> {
        let value = validation::require_email(email.into())?;
        self.email = Some(value.to_owned());
        Ok(())
    }

    /// `"First Last"`, skipping absent parts.
    pub fn full_name(&self) -> String {
        [self.first_name(), self.last_name()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee {{ id: {}, first_name: {}, last_name: {}, description: {}, \
             job_years: {}, job_title: {}, email: {} }}",
            Plain(&self.id),
            Quoted(&self.first_name),
            Quoted(&self.last_name),
            Quoted(&self.description),
            self.job_years,
            Quoted(&self.job_title),
            Quoted(&self.email),
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`Employee`].
///
/// Unset text attributes count as absent and fail validation at `build()`.
/// An unset `job_years` defaults to `0`.
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    description: Option<String>,
    job_years: i32,
    job_title: Option<String>,
    email: Option<String>,
}

impl EmployeeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn job_years(mut self, job_years: i32) -> Self {
        self.job_years = job_years;
        self
    }

    pub fn job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Validate in declaration order and produce the record.
    pub fn build(self) -> Result<Employee, DomainError> {
        let employee = Employee {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            description: self.description,
            job_years: self.job_years,
            job_title: self.job_title,
            email: self.email,
        };
        employee.validate()?;
        Ok(employee)
    }
}
