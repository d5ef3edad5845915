//! `BasicEmployee`: the record shape before e-mail contact was introduced.
//!
//! Same rules and messages as [`Employee`](super::Employee) for the fields it
//! shares. It has no e-mail attribute and never checks one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::common::{Plain, Quoted},
    error::DomainError,
    validation,
    value_objects::{EmployeeField, EmployeeId},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicEmployee {
    id: Option<EmployeeId>,
    first_name: Option<String>,
    last_name: Option<String>,
    description: Option<String>,
    job_years: i32,
    job_title: Option<String>,
}

impl BasicEmployee {
    /// Build a validated record; first violation in declaration order wins.
    pub fn new<'a>(
        first_name: impl Into<Option<&'a str>>,
        last_name: impl Into<Option<&'a str>>,
        description: impl Into<Option<&'a str>>,
        job_years: i32,
        job_title: impl Into<Option<&'a str>>,
    ) -> Result<Self, DomainError> {
        let employee = Self {
            id: None,
            first_name: first_name.into().map(str::to_owned),
            last_name: last_name.into().map(str::to_owned),
            description: description.into().map(str::to_owned),
            job_years,
            job_title: job_title.into().map(str::to_owned),
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Validation-free empty shell for reconstruction from storage.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validation::require_text(EmployeeField::FirstName, self.first_name.as_deref())?;
        validation::require_text(EmployeeField::LastName, self.last_name.as_deref())?;
        validation::require_text(EmployeeField::Description, self.description.as_deref())?;
        validation::require_non_negative(EmployeeField::JobYears, self.job_years)?;
        validation::require_text(EmployeeField::JobTitle, self.job_title.as_deref())?;
        Ok(())
    }

    pub const fn id(&self) -> Option<EmployeeId> {
        self.id
    }
    pub fn set_id(&mut self, id: impl Into<Option<EmployeeId>>) {
        self.id = id.into();
    }

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
}

impl fmt::Display for BasicEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BasicEmployee {{ id: {}, first_name: {}, last_name: {}, description: {}, \
             job_years: {}, job_title: {} }}",
            Plain(&self.id),
            Quoted(&self.first_name),
            Quoted(&self.last_name),
            Quoted(&self.description),
            self.job_years,
            Quoted(&self.job_title),
        )
    }
}
