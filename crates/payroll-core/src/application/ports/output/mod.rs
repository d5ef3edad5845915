//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `payroll-adapters` crate provides implementations.

use crate::domain::{Employee, EmployeeId};
use crate::error::PayrollResult;

/// Port for employee persistence.
///
/// Implemented by:
/// - `payroll_adapters::InMemoryRepository` (testing, demos)
/// - `payroll_adapters::JsonFileRepository` (CLI data file)
///
/// ## Contract
///
/// - `save` assigns an id to a record that has none and stores it; a record
///   that already carries an id replaces the stored one.
/// - Implementations reconstruct records without re-validating them. Use
///   `Employee::validate` (or `EmployeeService::audit`) to check them.
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    /// Insert or replace a record, returning it with its id set.
    fn save(&self, employee: Employee) -> PayrollResult<Employee>;

    /// Get a record by id.
    fn find(&self, id: EmployeeId) -> PayrollResult<Option<Employee>>;

    /// All records, ordered by id.
    fn list(&self) -> PayrollResult<Vec<Employee>>;

    /// Remove a record, returning it if it existed.
    fn remove(&self, id: EmployeeId) -> PayrollResult<Option<Employee>>;
}
