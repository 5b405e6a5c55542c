//! Shared utilities for the Time Titan backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Listing limits for punch queries
//! - Employee identifier validation

pub mod pagination;
pub mod validation;
