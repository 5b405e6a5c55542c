//! Domain services for Time Titan.
//!
//! Services are pure functions over already-fetched punch rows; they own
//! no state and perform no I/O.

pub mod badges;
pub mod derivation;

pub use badges::{award_badges, BadgeInputs};
pub use derivation::{
    aggregate_team, consistency_streak, day_state, is_online, minutes_out, punctuality,
    work_progress,
};
