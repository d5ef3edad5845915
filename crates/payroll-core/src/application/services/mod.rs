//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "hire an employee" or "audit stored records".

pub mod employee_service;

pub use employee_service::{AuditFinding, EmployeeChanges, EmployeeService, NewEmployee};
