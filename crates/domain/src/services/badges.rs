//! Badge award rules.
//!
//! Badges are derived on the fly from the trailing 30-day punch window;
//! nothing is stored.

use chrono::NaiveDateTime;

use crate::models::{Badge, BadgeType, ConsistencyStreak, ShiftPolicy};
use crate::services::derivation::punctuality;

/// On-time rate required for Time Master.
const TIME_MASTER_RATE: f64 = 0.95;

/// Streak length required for Early Bird.
const EARLY_BIRD_STREAK: u32 = 5;

/// Number of post-18:00 outs required for Night Owl.
const NIGHT_OWL_LATE_OUTS: u32 = 10;

/// Inputs to the badge rules, all computed over the trailing 30 days.
#[derive(Debug, Clone)]
pub struct BadgeInputs {
    /// Earliest punch-in of each attended day in the window.
    pub day_first_ins: Vec<NaiveDateTime>,
    /// Current consistency streak.
    pub streak: ConsistencyStreak,
    /// Count of Out punches at or after 18:00 in the window.
    pub late_out_count: u32,
}

/// Evaluates every badge rule against the inputs.
pub fn award_badges(inputs: &BadgeInputs, policy: &ShiftPolicy) -> Vec<Badge> {
    let mut badges = Vec::new();

    if !inputs.day_first_ins.is_empty() {
        let on_time_days = inputs
            .day_first_ins
            .iter()
            .filter(|ts| punctuality(Some(**ts), policy).0)
            .count();
        let rate = on_time_days as f64 / inputs.day_first_ins.len() as f64;
        if rate >= TIME_MASTER_RATE {
            badges.push(Badge {
                badge_type: BadgeType::TimeMaster,
                name: "Time Master".into(),
                description: "Consistently on time for an entire month".into(),
                icon: "🏆".into(),
            });
        }
    }

    if inputs.streak.is_active && inputs.streak.count >= EARLY_BIRD_STREAK {
        badges.push(Badge {
            badge_type: BadgeType::EarlyBird,
            name: "Early Bird".into(),
            description: "Checked in five or more days in a row".into(),
            icon: "🐦".into(),
        });
    }

    if inputs.late_out_count >= NIGHT_OWL_LATE_OUTS {
        badges.push(Badge {
            badge_type: BadgeType::NightOwl,
            name: "Night Owl".into(),
            description: "Stays late and checks out last consistently".into(),
            icon: "🦉".into(),
        });
    }

    badges
}
