//! Repository implementations for read-only database operations.

pub mod employee;
pub mod punch;

pub use employee::EmployeeRepository;
pub use punch::PunchRepository;
