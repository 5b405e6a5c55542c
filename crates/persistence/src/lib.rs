//! Persistence layer for the Time Titan backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Read-only repository implementations over the punch log and the
//!   employee directory

pub mod db;
pub mod entities;
pub mod repositories;
