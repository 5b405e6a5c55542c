//! Domain layer for the Time Titan backend.
//!
//! This crate contains:
//! - Domain models (PunchEvent, EmployeeIdentity, derived metrics)
//! - The pure metric derivation functions
//! - Badge award rules

pub mod models;
pub mod services;
