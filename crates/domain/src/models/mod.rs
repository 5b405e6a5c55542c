//! Domain models for Time Titan.

pub mod employee;
pub mod metrics;
pub mod punch;

pub use employee::EmployeeIdentity;
pub use metrics::{
    Badge, BadgeType, ConsistencyStreak, DerivedDayState, MemberIdentity, MemberStats,
    ShiftPolicy, TeamStats, WorkProgress,
};
pub use punch::{Direction, PunchEvent};
