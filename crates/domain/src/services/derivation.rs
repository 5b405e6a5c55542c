//! Metric derivation functions.
//!
//! Each function takes an ordered sequence of punch rows (already fetched
//! by the caller) plus an explicit `now`/`today`, and produces one metric.
//! All of them are pure and idempotent: identical inputs yield identical
//! outputs, with no shared state between calls.

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::models::{
    ConsistencyStreak, DerivedDayState, Direction, MemberStats, ShiftPolicy, TeamStats,
    WorkProgress,
};

const SECS_PER_HOUR: f64 = 3600.0;

/// Progress through today's shift given the earliest punch-in.
///
/// `hours_worked` is the elapsed time from `first_in` to `now` in
/// fractional hours; `minutes_left` is the remainder of the shift,
/// floored at zero once the shift is over.
pub fn work_progress(
    first_in: NaiveDateTime,
    now: NaiveDateTime,
    policy: &ShiftPolicy,
) -> WorkProgress {
    let hours_worked = (now - first_in).num_seconds() as f64 / SECS_PER_HOUR;
    let minutes_left = (policy.shift_minutes as f64 - hours_worked * 60.0).max(0.0);

    WorkProgress {
        in_time: first_in,
        hours_worked,
        minutes_left,
    }
}

/// On-time flag and punctuality score for a day's first punch-in.
///
/// Score is 100 for an arrival at or before the cutoff, 60 for a late
/// arrival, 0 when there was no punch-in at all.
pub fn punctuality(first_in: Option<NaiveDateTime>, policy: &ShiftPolicy) -> (bool, u8) {
    match first_in {
        Some(ts) => {
            let cutoff = ts.date().and_time(policy.on_time_cutoff);
            if ts <= cutoff {
                (true, 100)
            } else {
                (false, 60)
            }
        }
        None => (false, 0),
    }
}

/// Length of the run of consecutive attendance days ending today.
///
/// `dates_desc` is the deduplicated, descending list of calendar dates on
/// which the employee has at least one punch-in, no later than `today`.
/// Index `i` must equal `today - i` days for the run to continue; the
/// first mismatch stops the count, so a most-recent date that is not
/// today yields a count of zero.
pub fn consistency_streak(dates_desc: &[NaiveDate], today: NaiveDate) -> ConsistencyStreak {
    let is_active = dates_desc.first() == Some(&today);

    let mut count = 0u32;
    for (i, date) in dates_desc.iter().enumerate() {
        let expected = today
            .checked_sub_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MIN);
        if *date != expected {
            break;
        }
        count += 1;
    }

    ConsistencyStreak { count, is_active }
}

/// Total break minutes across today's punches.
///
/// The punches must be in chronological order. A single pending-out slot
/// is kept: an `Out` overwrites it, an `In` with a pending out adds the
/// gap and clears the slot, an `In` without one is the day's arrival or a
/// duplicate and is ignored. A trailing unmatched `Out` contributes
/// nothing; the employee may still be out, and no current-time
/// extrapolation is applied here. The result is rounded to the nearest
/// whole minute.
pub fn minutes_out(punches: &[(NaiveDateTime, Direction)]) -> i64 {
    let mut pending_out: Option<NaiveDateTime> = None;
    let mut total_secs = 0i64;

    for (ts, direction) in punches {
        match direction {
            Direction::Out => pending_out = Some(*ts),
            Direction::In => {
                if let Some(out_ts) = pending_out.take() {
                    total_secs += (*ts - out_ts).num_seconds().max(0);
                }
            }
        }
    }

    (total_secs as f64 / 60.0).round() as i64
}

/// Whether an employee has arrived today and not yet left.
///
/// True iff a first-in exists and either no out exists yet or the last
/// out precedes the first in (a stale out from before arrival).
pub fn is_online(first_in: Option<NaiveDateTime>, last_out: Option<NaiveDateTime>) -> bool {
    match (first_in, last_out) {
        (Some(_), None) => true,
        (Some(in_ts), Some(out_ts)) => out_ts < in_ts,
        (None, _) => false,
    }
}

/// Full derived state for one employee on one calendar date.
///
/// For today the elapsed time runs up to `now`; for a past date it runs
/// up to the day's last out (zero elapsed when the day has a first-in but
/// never an out).
pub fn day_state(
    punches: &[(NaiveDateTime, Direction)],
    date: NaiveDate,
    now: NaiveDateTime,
    policy: &ShiftPolicy,
) -> DerivedDayState {
    let first_in = punches
        .iter()
        .filter(|(_, d)| *d == Direction::In)
        .map(|(ts, _)| *ts)
        .min();
    let last_out = punches
        .iter()
        .filter(|(_, d)| *d == Direction::Out)
        .map(|(ts, _)| *ts)
        .max();

    let hours_worked = match first_in {
        Some(in_ts) => {
            let end = if date == now.date() {
                now
            } else {
                last_out.unwrap_or(in_ts)
            };
            ((end - in_ts).num_seconds().max(0)) as f64 / SECS_PER_HOUR
        }
        None => 0.0,
    };
    let minutes_left = (policy.shift_minutes as f64 - hours_worked * 60.0).max(0.0);
    let (on_time, punctuality_score) = punctuality(first_in, policy);

    DerivedDayState {
        first_in,
        last_out,
        hours_worked,
        minutes_left,
        on_time,
        punctuality_score,
    }
}

/// Rolls member stats up into the department aggregate.
///
/// The average punctuality is the rounded mean of the member scores;
/// callers are expected to skip the aggregation entirely for a
/// department with no resolvable members.
pub fn aggregate_team(team_name: &str, members: &[MemberStats]) -> TeamStats {
    let members_count = members.len() as u32;
    let online_count = members.iter().filter(|m| m.is_online).count() as u32;
    let average_punctuality = if members.is_empty() {
        0
    } else {
        let sum: u32 = members.iter().map(|m| u32::from(m.punctuality_score)).sum();
        (sum as f64 / members.len() as f64).round() as u32
    };

    TeamStats {
        team_name: team_name.to_string(),
        average_punctuality,
        online_count,
        members_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConsistencyStreak, MemberIdentity};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(hh, mm, ss).unwrap()
    }

    #[test]
    fn test_work_progress_midmorning() {
        // Punch-in 08:50, now 10:20 -> 1.5h worked, 450 minutes left.
        let progress = work_progress(
            dt(2026, 3, 2, 8, 50, 0),
            dt(2026, 3, 2, 10, 20, 0),
            &ShiftPolicy::default(),
        );
        assert!((progress.hours_worked - 1.5).abs() < 1e-9);
        assert!((progress.minutes_left - 450.0).abs() < 1e-9);
        assert_eq!(progress.in_time, dt(2026, 3, 2, 8, 50, 0));
    }

    #[test]
    fn test_work_progress_shift_over() {
        let progress = work_progress(
            dt(2026, 3, 2, 8, 0, 0),
            dt(2026, 3, 2, 19, 0, 0),
            &ShiftPolicy::default(),
        );
        assert_eq!(progress.minutes_left, 0.0);
        assert!(progress.hours_worked > 10.9);
    }

    #[test]
    fn test_punctuality_exact_cutoff_is_on_time() {
        let (on_time, score) = punctuality(Some(dt(2026, 3, 2, 9, 15, 0)), &ShiftPolicy::default());
        assert!(on_time);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_punctuality_one_second_late() {
        let (on_time, score) = punctuality(Some(dt(2026, 3, 2, 9, 15, 1)), &ShiftPolicy::default());
        assert!(!on_time);
        assert_eq!(score, 60);
    }

    #[test]
    fn test_punctuality_absent() {
        let (on_time, score) = punctuality(None, &ShiftPolicy::default());
        assert!(!on_time);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_streak_unbroken_three_days() {
        let today = date(2026, 3, 4);
        let dates = vec![today, date(2026, 3, 3), date(2026, 3, 2)];
        let streak = consistency_streak(&dates, today);
        assert_eq!(streak, ConsistencyStreak { count: 3, is_active: true });
    }

    #[test]
    fn test_streak_with_gap_counts_only_today() {
        let today = date(2026, 3, 4);
        let dates = vec![today, date(2026, 3, 2)];
        let streak = consistency_streak(&dates, today);
        assert_eq!(streak, ConsistencyStreak { count: 1, is_active: true });
    }

    #[test]
    fn test_streak_stale_most_recent_not_today() {
        let today = date(2026, 3, 4);
        let dates = vec![date(2026, 3, 2), date(2026, 3, 1)];
        let streak = consistency_streak(&dates, today);
        assert_eq!(streak, ConsistencyStreak { count: 0, is_active: false });
    }

    #[test]
    fn test_streak_no_attendance_ever() {
        let streak = consistency_streak(&[], date(2026, 3, 4));
        assert_eq!(streak, ConsistencyStreak::NONE);
    }

    #[test]
    fn test_minutes_out_pairing_ignores_trailing_out() {
        // In 09:00, Out 12:00, In 12:30, Out 17:00 -> only the lunch gap counts.
        let punches = vec![
            (dt(2026, 3, 2, 9, 0, 0), Direction::In),
            (dt(2026, 3, 2, 12, 0, 0), Direction::Out),
            (dt(2026, 3, 2, 12, 30, 0), Direction::In),
            (dt(2026, 3, 2, 17, 0, 0), Direction::Out),
        ];
        assert_eq!(minutes_out(&punches), 30);
    }

    #[test]
    fn test_minutes_out_duplicate_out_overwrites() {
        // Out 12:00, Out 12:10, In 12:40 -> only the 12:10 out pairs.
        let punches = vec![
            (dt(2026, 3, 2, 12, 0, 0), Direction::Out),
            (dt(2026, 3, 2, 12, 10, 0), Direction::Out),
            (dt(2026, 3, 2, 12, 40, 0), Direction::In),
        ];
        assert_eq!(minutes_out(&punches), 30);
    }

    #[test]
    fn test_minutes_out_leading_in_is_noop() {
        let punches = vec![
            (dt(2026, 3, 2, 9, 0, 0), Direction::In),
            (dt(2026, 3, 2, 9, 0, 30), Direction::In),
        ];
        assert_eq!(minutes_out(&punches), 0);
    }

    #[test]
    fn test_minutes_out_empty_day() {
        assert_eq!(minutes_out(&[]), 0);
    }

    #[test]
    fn test_minutes_out_rounds_to_nearest_minute() {
        let punches = vec![
            (dt(2026, 3, 2, 12, 0, 0), Direction::Out),
            (dt(2026, 3, 2, 12, 10, 31), Direction::In),
        ];
        assert_eq!(minutes_out(&punches), 11);
    }

    #[test]
    fn test_minutes_out_idempotent() {
        let punches = vec![
            (dt(2026, 3, 2, 12, 0, 0), Direction::Out),
            (dt(2026, 3, 2, 12, 45, 0), Direction::In),
        ];
        assert_eq!(minutes_out(&punches), minutes_out(&punches));
    }

    #[test]
    fn test_is_online_variants() {
        let first_in = Some(dt(2026, 3, 2, 8, 50, 0));
        assert!(is_online(first_in, None));
        // Out before arrival (stale from a previous shift boundary).
        assert!(is_online(first_in, Some(dt(2026, 3, 2, 0, 5, 0))));
        // Left after arriving.
        assert!(!is_online(first_in, Some(dt(2026, 3, 2, 17, 0, 0))));
        assert!(!is_online(None, Some(dt(2026, 3, 2, 17, 0, 0))));
    }

    #[test]
    fn test_day_state_today_runs_to_now() {
        let punches = vec![
            (dt(2026, 3, 2, 8, 50, 0), Direction::In),
            (dt(2026, 3, 2, 12, 0, 0), Direction::Out),
        ];
        let state = day_state(
            &punches,
            date(2026, 3, 2),
            dt(2026, 3, 2, 10, 20, 0),
            &ShiftPolicy::default(),
        );
        assert!((state.hours_worked - 1.5).abs() < 1e-9);
        assert!(state.on_time);
        assert_eq!(state.punctuality_score, 100);
        assert_eq!(state.last_out, Some(dt(2026, 3, 2, 12, 0, 0)));
    }

    #[test]
    fn test_day_state_past_runs_to_last_out() {
        let punches = vec![
            (dt(2026, 3, 1, 9, 30, 0), Direction::In),
            (dt(2026, 3, 1, 17, 30, 0), Direction::Out),
        ];
        let state = day_state(
            &punches,
            date(2026, 3, 1),
            dt(2026, 3, 2, 10, 0, 0),
            &ShiftPolicy::default(),
        );
        assert!((state.hours_worked - 8.0).abs() < 1e-9);
        assert!(!state.on_time);
        assert_eq!(state.punctuality_score, 60);
    }

    #[test]
    fn test_day_state_no_punches() {
        let state = day_state(
            &[],
            date(2026, 3, 2),
            dt(2026, 3, 2, 10, 0, 0),
            &ShiftPolicy::default(),
        );
        assert_eq!(state.first_in, None);
        assert_eq!(state.hours_worked, 0.0);
        assert_eq!(state.minutes_left, 540.0);
        assert_eq!(state.punctuality_score, 0);
    }

    fn member(score: u8, online: bool) -> MemberStats {
        MemberStats {
            employee: MemberIdentity {
                id: "1".into(),
                name: "A".into(),
                department: Some("Engineering".into()),
            },
            punctuality_score: score,
            consistency_streak: ConsistencyStreak::NONE,
            is_online: online,
        }
    }

    #[test]
    fn test_aggregate_team_rounds_mean() {
        let members = vec![member(100, true), member(60, false), member(60, true)];
        let team = aggregate_team("Engineering", &members);
        // mean(100, 60, 60) = 73.33 -> 73
        assert_eq!(team.average_punctuality, 73);
        assert_eq!(team.online_count, 2);
        assert_eq!(team.members_count, 3);
        assert_eq!(team.team_name, "Engineering");
    }

    #[test]
    fn test_aggregate_team_empty() {
        let team = aggregate_team("Ghost", &[]);
        assert_eq!(team.average_punctuality, 0);
        assert_eq!(team.members_count, 0);
    }
}
