//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::EmployeeId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No record is stored under the id.
    #[error("Employee {id} not found")]
    NotFound { id: EmployeeId },

    /// Store access failed (lock poisoned, etc.).
    #[error("Employee repository error")]
    StoreLockError,

    /// The persistence collaborator could not read or write its backing store.
    #[error("Persistence failed: {reason}")]
    Persistence { reason: String },

    /// An update request carried no changes.
    #[error("No changes requested for employee {id}")]
    NoChanges { id: EmployeeId },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { id } => vec![
                format!("No employee with id {}", id),
                "Try: payroll list to see stored employees".into(),
            ],
            Self::StoreLockError => vec![
                "The employee repository is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Persistence { reason } => vec![
                format!("Storage issue: {}", reason),
                "Check that the data file is readable and writable".into(),
            ],
            Self::NoChanges { .. } => vec![
                "Pass at least one field to change".into(),
                "Example: payroll update 1 --job-title Gardener".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError | Self::Persistence { .. } => ErrorCategory::Internal,
            Self::NoChanges { .. } => ErrorCategory::Validation,
        }
    }
}
