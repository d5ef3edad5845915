//! Payroll Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the payroll
//! employee registry, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           payroll-cli (CLI)             │
//! │     (Presentation collaborator)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (EmployeeService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (EmployeeRepository)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    payroll-adapters (Infrastructure)    │
//! │ (InMemoryRepository, JsonFileRepository)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Employee, BasicEmployee, rules)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use payroll_core::domain::{Employee, EmployeeField};
//!
//! let frodo = Employee::new(
//!     "Frodo",
//!     "Baggins",
//!     "ring bearer",
//!     5,
//!     "Hobbit",
//!     "frodo.baggins@lordoftherings.com",
//! )
//! .unwrap();
//! assert_eq!(frodo.first_name(), Some("Frodo"));
//!
//! let err = Employee::new("", "Baggins", "ring bearer", 5, "Hobbit", "frodo@shire.me")
//!     .unwrap_err();
//! assert_eq!(err.field(), EmployeeField::FirstName);
//! assert_eq!(err.to_string(), "First name cannot be empty.");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EmployeeChanges, EmployeeService, NewEmployee, ports::EmployeeRepository,
    };
    pub use crate::domain::{
        BasicEmployee, DomainError, Employee, EmployeeBuilder, EmployeeField, EmployeeId,
    };
    pub use crate::error::{PayrollError, PayrollResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
