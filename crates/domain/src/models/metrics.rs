//! Derived metric models.
//!
//! Everything in this module is computed fresh from punch rows on each
//! request; nothing here is ever persisted.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::employee::EmployeeIdentity;

/// Shift parameters used by the derivations.
///
/// Defaults match the production punch clock: a 9-hour shift with an
/// on-time cutoff of 09:15:00 local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftPolicy {
    /// Full shift length in minutes.
    pub shift_minutes: i64,
    /// Latest first-in that still counts as on time.
    pub on_time_cutoff: NaiveTime,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            shift_minutes: 540,
            on_time_cutoff: NaiveTime::from_hms_opt(9, 15, 0).expect("valid cutoff"),
        }
    }
}

/// Progress through today's shift for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkProgress {
    /// Earliest punch-in today.
    pub in_time: NaiveDateTime,
    /// Elapsed hours from first-in to now.
    pub hours_worked: f64,
    /// Minutes still to work, floored at zero.
    pub minutes_left: f64,
}

/// Run of consecutive attendance days ending at (or just before) today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyStreak {
    pub count: u32,
    pub is_active: bool,
}

impl ConsistencyStreak {
    pub const NONE: ConsistencyStreak = ConsistencyStreak {
        count: 0,
        is_active: false,
    };
}

/// Per-day attendance state for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedDayState {
    pub first_in: Option<NaiveDateTime>,
    pub last_out: Option<NaiveDateTime>,
    pub hours_worked: f64,
    pub minutes_left: f64,
    pub on_time: bool,
    pub punctuality_score: u8,
}

/// Aggregated punctuality for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub team_name: String,
    pub average_punctuality: u32,
    pub online_count: u32,
    pub members_count: u32,
}

/// Per-member entry in the team punctuality payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub employee: MemberIdentity,
    pub punctuality_score: u8,
    pub consistency_streak: ConsistencyStreak,
    pub is_online: bool,
}

/// Identity slice exposed in the team payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberIdentity {
    pub id: String,
    pub name: String,
    pub department: Option<String>,
}

impl From<EmployeeIdentity> for MemberIdentity {
    fn from(identity: EmployeeIdentity) -> Self {
        Self {
            id: identity.employee_id,
            name: identity.display_name,
            department: identity.department,
        }
    }
}

/// Kinds of attendance badges an employee can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeType {
    TimeMaster,
    EarlyBird,
    NightOwl,
}

/// An earned attendance badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    pub name: String,
    pub description: String,
    pub icon: String,
}
