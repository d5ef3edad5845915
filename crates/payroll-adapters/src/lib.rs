//! Infrastructure adapters for payroll.
//!
//! This crate implements the ports defined in `payroll-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod repository;
pub mod seed;

// Re-export commonly used adapters
pub use repository::{InMemoryRepository, JsonFileRepository};
