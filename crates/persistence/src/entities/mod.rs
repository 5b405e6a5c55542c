//! Database entity definitions.
//!
//! Entities are direct mappings to database rows (or query projections).

pub mod employee;
pub mod punch;

pub use employee::{EmployeeEntity, MemberDayEntity};
pub use punch::{CardPunchEntity, PunchRowEntity, RecentPunchEntity};
