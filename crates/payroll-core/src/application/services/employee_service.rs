//! Employee Service - main application orchestrator.
//!
//! This service coordinates the employee use cases:
//! 1. Validate externally supplied attributes into an `Employee`
//! 2. Hand the record to the repository, which assigns identity
//! 3. Apply field changes through the validated setters
//!
//! It implements the driving port (incoming) and uses the driven repository
//! port (outgoing).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::EmployeeRepository},
    domain::{DomainError, Employee, EmployeeId},
    error::PayrollResult,
};

/// Attributes for a new hire, as supplied by a presentation collaborator.
///
/// Nothing is checked until [`NewEmployee::into_employee`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub job_years: i32,
    pub job_title: Option<String>,
    pub email: Option<String>,
}

impl NewEmployee {
    /// Run the validated constructor over these attributes.
    pub fn into_employee(self) -> Result<Employee, DomainError> {
        Employee::new(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.description.as_deref(),
            self.job_years,
            self.job_title.as_deref(),
            self.email.as_deref(),
        )
    }
}

impl From<Employee> for NewEmployee {
    /// Re-submit an existing record's attributes; the id is dropped.
    fn from(employee: Employee) -> Self {
        NewEmployee {
            first_name: employee.first_name().map(str::to_owned),
            last_name: employee.last_name().map(str::to_owned),
            description: employee.description().map(str::to_owned),
            job_years: employee.job_years(),
            job_title: employee.job_title().map(str::to_owned),
            email: employee.email().map(str::to_owned),
        }
    }
}

/// A partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub job_years: Option<i32>,
    pub job_title: Option<String>,
    pub email: Option<String>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.description.is_none()
            && self.job_years.is_none()
            && self.job_title.is_none()
            && self.email.is_none()
    }

    /// Apply each change through its setter, in declaration order.
    ///
    /// Stops at the first violation; changes applied before it remain on
    /// `employee`, so callers wanting all-or-nothing should pass a copy.
    pub fn apply_to(&self, employee: &mut Employee) -> Result<(), DomainError> {
        if let Some(first_name) = &self.first_name {
            employee.set_first_name(first_name.as_str())?;
        }
        if let Some(last_name) = &self.last_name {
            employee.set_last_name(last_name.as_str())?;
        }
        if let Some(description) = &self.description {
            employee.set_description(description.as_str())?;
        }
        if let Some(job_years) = self.job_years {
            employee.set_job_years(job_years)?;
        }
        if let Some(job_title) = &self.job_title {
            employee.set_job_title(job_title.as_str())?;
        }
        if let Some(email) = &self.email {
            employee.set_email(email.as_str())?;
        }
        Ok(())
    }
}

/// A stored record that no longer satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    pub id: Option<EmployeeId>,
    pub error: DomainError,
}

/// Main employee service.
pub struct EmployeeService {
    repository: Box<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new employee service over the given repository.
    pub fn new(repository: Box<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new employee.
    #[instrument(skip_all)]
    pub fn hire(&self, request: NewEmployee) -> PayrollResult<Employee> {
        let employee = request.into_employee().inspect_err(|e| {
            debug!(field = %e.field(), "Rejected new employee");
        })?;

        let saved = self.repository.save(employee)?;
        info!(
            id = %saved.id().map(|id| id.to_string()).unwrap_or_default(),
            "Employee hired"
        );
        Ok(saved)
    }

    /// Get an employee by id.
    pub fn get(&self, id: EmployeeId) -> PayrollResult<Employee> {
        self.repository
            .find(id)?
            .ok_or_else(|| ApplicationError::NotFound { id }.into())
    }

    /// List all employees, ordered by id.
    pub fn list(&self) -> PayrollResult<Vec<Employee>> {
        self.repository.list()
    }

    /// Apply `changes` to a stored employee.
    ///
    /// All-or-nothing: the changes are applied to a copy and the stored record
    /// is replaced only if every setter accepted its value.
    #[instrument(skip(self, changes), fields(id = %id))]
    pub fn update(&self, id: EmployeeId, changes: &EmployeeChanges) -> PayrollResult<Employee> {
        if changes.is_empty() {
            return Err(ApplicationError::NoChanges { id }.into());
        }

        let mut employee = self.get(id)?;
        changes.apply_to(&mut employee).inspect_err(|e| {
            debug!(field = %e.field(), "Rejected update");
        })?;

        let saved = self.repository.save(employee)?;
        info!("Employee updated");
        Ok(saved)
    }

    /// Remove an employee, returning the removed record.
    #[instrument(skip(self), fields(id = %id))]
    pub fn dismiss(&self, id: EmployeeId) -> PayrollResult<Employee> {
        let removed = self
            .repository
            .remove(id)?
            .ok_or(ApplicationError::NotFound { id })?;
        info!("Employee dismissed");
        Ok(removed)
    }

    /// Re-validate every stored record.
    ///
    /// Repositories rebuild records without validation, so anything edited
    /// outside the service (e.g. a hand-modified data file) surfaces here.
    pub fn audit(&self) -> PayrollResult<Vec<AuditFinding>> {
        let findings: Vec<AuditFinding> = self
            .repository
            .list()?
            .into_iter()
            .filter_map(|employee| {
                employee.validate().err().map(|error| AuditFinding {
                    id: employee.id(),
                    error,
                })
            })
            .collect();

        if !findings.is_empty() {
            warn!(count = findings.len(), "Stored records fail validation");
        }
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::output::MockEmployeeRepository;
    use crate::domain::EmployeeField;
    use crate::error::PayrollError;

    fn frodo_request() -> NewEmployee {
        NewEmployee {
            first_name: Some("Frodo".into()),
            last_name: Some("Baggins".into()),
            description: Some("ring bearer".into()),
            job_years: 5,
            job_title: Some("Hobbit".into()),
            email: Some("frodo.baggins@lordoftherings.com".into()),
        }
    }

    fn stored_frodo() -> Employee {
        frodo_request()
            .into_employee()
            .unwrap()
            .with_id(EmployeeId::new(1))
    }

    // ========================================================================
    // hire
    // ========================================================================

    #[test]
    fn hire_saves_valid_employee() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|e| Ok(e.with_id(EmployeeId::new(1))));

        let service = EmployeeService::new(Box::new(repo));
        let hired = service.hire(frodo_request()).unwrap();

        assert_eq!(hired.id(), Some(EmployeeId::new(1)));
        assert_eq!(hired.first_name(), Some("Frodo"));
    }

    #[test]
    fn hire_rejects_invalid_without_saving() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save().never();

        let service = EmployeeService::new(Box::new(repo));
        let request = NewEmployee {
            first_name: Some(String::new()),
            ..frodo_request()
        };

        let err = service.hire(request).unwrap_err();
        assert_eq!(err.to_string(), "First name cannot be empty.");
    }

    #[test]
    fn new_employee_deserializes_from_camel_case() {
        let request: NewEmployee = serde_json::from_str(
            r#"{"firstName":"Sam","lastName":"Gamgee","description":"gardener",
                "jobYears":3,"jobTitle":"Gardener","email":"sam@shire.me"}"#,
        )
        .unwrap();
        assert_eq!(request.first_name.as_deref(), Some("Sam"));
        assert!(request.into_employee().is_ok());
    }

    #[test]
    fn stored_record_resubmits_without_id() {
        let request = NewEmployee::from(stored_frodo());
        assert_eq!(request, frodo_request());
    }

    #[test]
    fn new_employee_missing_fields_are_absent() {
        let request: NewEmployee = serde_json::from_str(r#"{"firstName":"Sam"}"#).unwrap();
        let err = request.into_employee().unwrap_err();
        assert_eq!(err.field(), EmployeeField::LastName);
    }

    // ========================================================================
    // get / dismiss
    // ========================================================================

    #[test]
    fn get_missing_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find()
            .with(eq(EmployeeId::new(9)))
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Box::new(repo));
        let err = service.get(EmployeeId::new(9)).unwrap_err();
        assert_eq!(
            err,
            PayrollError::Application(ApplicationError::NotFound {
                id: EmployeeId::new(9)
            })
        );
    }

    #[test]
    fn dismiss_returns_removed_record() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_remove()
            .with(eq(EmployeeId::new(1)))
            .returning(|_| Ok(Some(stored_frodo())));

        let service = EmployeeService::new(Box::new(repo));
        let removed = service.dismiss(EmployeeId::new(1)).unwrap();
        assert_eq!(removed, stored_frodo());
    }

    #[test]
    fn dismiss_missing_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_remove().returning(|_| Ok(None));

        let service = EmployeeService::new(Box::new(repo));
        assert!(matches!(
            service.dismiss(EmployeeId::new(4)),
            Err(PayrollError::Application(ApplicationError::NotFound { .. }))
        ));
    }

    // ========================================================================
    // update
    // ========================================================================

    #[test]
    fn update_applies_changes_and_saves() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find().returning(|_| Ok(Some(stored_frodo())));
        repo.expect_save().times(1).returning(Ok);

        let service = EmployeeService::new(Box::new(repo));
        let changes = EmployeeChanges {
            job_title: Some("Ring-bearer".into()),
            job_years: Some(6),
            ..Default::default()
        };

        let updated = service.update(EmployeeId::new(1), &changes).unwrap();
        assert_eq!(updated.job_title(), Some("Ring-bearer"));
        assert_eq!(updated.job_years(), 6);
        assert_eq!(updated.id(), Some(EmployeeId::new(1)));
    }

    #[test]
    fn update_is_all_or_nothing() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find().returning(|_| Ok(Some(stored_frodo())));
        repo.expect_save().never();

        let service = EmployeeService::new(Box::new(repo));
        let changes = EmployeeChanges {
            first_name: Some("Sam".into()),
            email: Some("broken".into()),
            ..Default::default()
        };

        let err = service.update(EmployeeId::new(1), &changes).unwrap_err();
        assert_eq!(err.to_string(), "E-mail must be valid.");
    }

    #[test]
    fn update_without_changes_is_rejected() {
        let repo = MockEmployeeRepository::new();
        let service = EmployeeService::new(Box::new(repo));

        let err = service
            .update(EmployeeId::new(1), &EmployeeChanges::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PayrollError::Application(ApplicationError::NoChanges { .. })
        ));
    }

    #[test]
    fn changes_apply_in_declaration_order() {
        let mut employee = stored_frodo();
        let changes = EmployeeChanges {
            last_name: Some(" ".into()),
            job_years: Some(-1),
            ..Default::default()
        };
        let err = changes.apply_to(&mut employee).unwrap_err();
        assert_eq!(err.field(), EmployeeField::LastName);
    }

    // ========================================================================
    // audit
    // ========================================================================

    #[test]
    fn audit_reports_only_invalid_records() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                stored_frodo(),
                Employee::empty().with_id(EmployeeId::new(2)),
            ])
        });

        let service = EmployeeService::new(Box::new(repo));
        let findings = service.audit().unwrap();

        assert_eq!(
            findings,
            vec![AuditFinding {
                id: Some(EmployeeId::new(2)),
                error: DomainError::invalid(EmployeeField::FirstName),
            }]
        );
    }
}
