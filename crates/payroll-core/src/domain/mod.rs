// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the payroll registry.
//!
//! This module contains pure business logic. Persistence and presentation are
//! collaborators reached via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the outer layers
//! - **Value entities**: All domain objects are Clone + Eq + Hash
//! - **Rules in one place**: Every field rule lives in `validation`
//!
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

pub use entities::{BasicEmployee, Employee, EmployeeBuilder};
pub use error::DomainError;
pub use value_objects::{EmployeeField, EmployeeId, UnknownField};
