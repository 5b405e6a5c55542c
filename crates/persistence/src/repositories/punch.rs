//! Punch log repository.
//!
//! Every method is a single read-only query; the derivation layer never
//! sees SQL, only the returned rows.

use chrono::{Days, NaiveDate, NaiveDateTime};
use sqlx::PgPool;

use crate::entities::{CardPunchEntity, PunchRowEntity, RecentPunchEntity};

/// Half-open `[start, end)` timestamp bounds of one calendar date.
fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_hms_opt(0, 0, 0).expect("midnight exists");
    let end = date
        .checked_add_days(Days::new(1))
        .unwrap_or(date)
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists");
    (start, end)
}

/// Repository over the raw punch log.
#[derive(Clone)]
pub struct PunchRepository {
    pool: PgPool,
}

impl PunchRepository {
    /// Creates a new PunchRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Earliest In punch of one employee on the given date.
    pub async fn first_in_on(
        &self,
        employee_code: &str,
        date: NaiveDate,
    ) -> Result<Option<NaiveDateTime>, sqlx::Error> {
        let (start, end) = day_bounds(date);
        sqlx::query_scalar(
            r#"
            SELECT punched_at
            FROM punch_events
            WHERE employee_code = $1
              AND lower(direction) = 'in'
              AND punched_at >= $2 AND punched_at < $3
            ORDER BY punched_at ASC
            LIMIT 1
            "#,
        )
        .bind(employee_code)
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await
    }

    /// Globally earliest In punch of the given date.
    ///
    /// Equal timestamps tie-break on the lowest card number so the
    /// result is deterministic.
    pub async fn earliest_in_on(
        &self,
        date: NaiveDate,
    ) -> Result<Option<CardPunchEntity>, sqlx::Error> {
        let (start, end) = day_bounds(date);
        sqlx::query_as::<_, CardPunchEntity>(
            r#"
            SELECT card_number, punched_at
            FROM punch_events
            WHERE lower(direction) = 'in'
              AND punched_at >= $1 AND punched_at < $2
            ORDER BY punched_at ASC, card_number ASC
            LIMIT 1
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await
    }

    /// Globally latest Out punch of the given date.
    ///
    /// Same tie-break rule as [`earliest_in_on`](Self::earliest_in_on).
    pub async fn latest_out_on(
        &self,
        date: NaiveDate,
    ) -> Result<Option<CardPunchEntity>, sqlx::Error> {
        let (start, end) = day_bounds(date);
        sqlx::query_as::<_, CardPunchEntity>(
            r#"
            SELECT card_number, punched_at
            FROM punch_events
            WHERE lower(direction) = 'out'
              AND punched_at >= $1 AND punched_at < $2
            ORDER BY punched_at DESC, card_number ASC
            LIMIT 1
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await
    }

    /// Most recent punches across all employees, newest first, joined
    /// against the directory for name resolution.
    pub async fn recent(&self, limit: i64) -> Result<Vec<RecentPunchEntity>, sqlx::Error> {
        sqlx::query_as::<_, RecentPunchEntity>(
            r#"
            SELECT p.punched_at,
                   lower(p.direction) AS direction,
                   e.card_number AS employee_card,
                   e.display_name,
                   e.short_name
            FROM punch_events p
            LEFT JOIN employees e ON lower(e.card_number) = lower(p.card_number)
            ORDER BY p.punched_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Distinct calendar dates with at least one In punch, up to and
    /// including `today`, descending.
    pub async fn distinct_in_dates(
        &self,
        employee_code: &str,
        today: NaiveDate,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        let (_, end) = day_bounds(today);
        sqlx::query_scalar(
            r#"
            SELECT DISTINCT punched_at::date AS punch_date
            FROM punch_events
            WHERE employee_code = $1
              AND lower(direction) = 'in'
              AND punched_at < $2
            ORDER BY punch_date DESC
            "#,
        )
        .bind(employee_code)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }

    /// All punches of one employee on one date, chronological.
    pub async fn punches_on(
        &self,
        employee_code: &str,
        date: NaiveDate,
    ) -> Result<Vec<PunchRowEntity>, sqlx::Error> {
        let (start, end) = day_bounds(date);
        sqlx::query_as::<_, PunchRowEntity>(
            r#"
            SELECT punched_at, lower(direction) AS direction
            FROM punch_events
            WHERE employee_code = $1
              AND punched_at >= $2 AND punched_at < $3
            ORDER BY punched_at ASC
            "#,
        )
        .bind(employee_code)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }

    /// Last `limit` punches of one employee, newest first.
    pub async fn last_punches(
        &self,
        employee_code: &str,
        limit: i64,
    ) -> Result<Vec<PunchRowEntity>, sqlx::Error> {
        sqlx::query_as::<_, PunchRowEntity>(
            r#"
            SELECT punched_at, lower(direction) AS direction
            FROM punch_events
            WHERE employee_code = $1
            ORDER BY punched_at DESC
            LIMIT $2
            "#,
        )
        .bind(employee_code)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Per-day earliest In punch in `[since, today]` (badge window).
    pub async fn day_first_ins(
        &self,
        employee_code: &str,
        since: NaiveDate,
        today: NaiveDate,
    ) -> Result<Vec<NaiveDateTime>, sqlx::Error> {
        let (start, _) = day_bounds(since);
        let (_, end) = day_bounds(today);
        sqlx::query_scalar(
            r#"
            SELECT MIN(punched_at) AS first_in
            FROM punch_events
            WHERE employee_code = $1
              AND lower(direction) = 'in'
              AND punched_at >= $2 AND punched_at < $3
            GROUP BY punched_at::date
            ORDER BY first_in
            "#,
        )
        .bind(employee_code)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }

    /// Count of Out punches at or after the given hour in `[since, today]`.
    pub async fn late_out_count(
        &self,
        employee_code: &str,
        since: NaiveDate,
        today: NaiveDate,
        hour: u32,
    ) -> Result<i64, sqlx::Error> {
        let (start, _) = day_bounds(since);
        let (_, end) = day_bounds(today);
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM punch_events
            WHERE employee_code = $1
              AND lower(direction) = 'out'
              AND punched_at >= $2 AND punched_at < $3
              AND EXTRACT(HOUR FROM punched_at) >= $4
            "#,
        )
        .bind(employee_code)
        .bind(start)
        .bind(end)
        .bind(hour as i32)
        .fetch_one(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bounds_half_open() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let (start, end) = day_bounds(date);
        assert_eq!(start, date.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            end,
            NaiveDate::from_ymd_opt(2026, 3, 3).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_day_bounds_month_rollover() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let (_, end) = day_bounds(date);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }
}
