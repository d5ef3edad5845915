//! Application layer for the payroll registry.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (EmployeeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All field rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AuditFinding, EmployeeChanges, EmployeeService, NewEmployee};

// Re-export port traits (for adapter implementation)
pub use ports::EmployeeRepository;

pub use error::ApplicationError;
