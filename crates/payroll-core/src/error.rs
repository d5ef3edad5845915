//! Unified error handling for Payroll Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Payroll Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayrollError {
    /// An attribute violated its rule. Displays the field message verbatim.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl PayrollError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// The domain violation, if this error is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type PayrollResult<T> = Result<T, PayrollError>;

/// Extension trait for attaching context to storage failures.
pub trait Context<T> {
    /// Map the error to [`ApplicationError::Persistence`] prefixed with `msg`.
    fn context(self, msg: impl Into<String>) -> PayrollResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> PayrollResult<T> {
        self.map_err(|e| {
            ApplicationError::Persistence {
                reason: format!("{}: {}", msg.into(), e),
            }
            .into()
        })
    }
}
