pub mod basic_employee;
pub(crate) mod common;
pub mod employee;

pub use crate::domain::DomainError;
pub use basic_employee::BasicEmployee;
pub use employee::{Employee, EmployeeBuilder};
