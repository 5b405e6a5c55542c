//! Employee directory repository.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::entities::{EmployeeEntity, MemberDayEntity};

/// Repository over the employee directory.
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Looks up an employee by badge number, case-insensitively.
    pub async fn find_by_card(
        &self,
        card_number: &str,
    ) -> Result<Option<EmployeeEntity>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeEntity>(
            r#"
            SELECT employee_id, card_number, display_name, short_name, department
            FROM employees
            WHERE lower(card_number) = lower($1)
            "#,
        )
        .bind(card_number)
        .fetch_optional(&self.pool)
        .await
    }

    /// Looks up an employee by its stable identifier.
    pub async fn find_by_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<EmployeeEntity>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeEntity>(
            r#"
            SELECT employee_id, card_number, display_name, short_name, department
            FROM employees
            WHERE lower(employee_id) = lower($1)
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// All members of a department, each joined with the earliest In and
    /// latest Out punch of the given date (one query, FILTER aggregates).
    pub async fn department_members_on(
        &self,
        department: &str,
        date: NaiveDate,
    ) -> Result<Vec<MemberDayEntity>, sqlx::Error> {
        let start = date.and_hms_opt(0, 0, 0).expect("midnight exists");
        let end = date
            .checked_add_days(chrono::Days::new(1))
            .unwrap_or(date)
            .and_hms_opt(0, 0, 0)
            .expect("midnight exists");

        sqlx::query_as::<_, MemberDayEntity>(
            r#"
            SELECT e.employee_id,
                   e.card_number,
                   e.display_name,
                   e.short_name,
                   e.department,
                   MIN(p.punched_at) FILTER (WHERE lower(p.direction) = 'in')  AS first_in,
                   MAX(p.punched_at) FILTER (WHERE lower(p.direction) = 'out') AS last_out
            FROM employees e
            LEFT JOIN punch_events p
                   ON lower(p.card_number) = lower(e.card_number)
                  AND p.punched_at >= $2 AND p.punched_at < $3
            WHERE e.department = $1
            GROUP BY e.employee_id, e.card_number, e.display_name, e.short_name, e.department
            ORDER BY e.employee_id
            "#,
        )
        .bind(department)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }
}
