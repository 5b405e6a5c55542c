//! Route handlers for the dashboard API.

pub mod activity;
pub mod badges;
pub mod breaks;
pub mod days;
pub mod health;
pub mod highlights;
pub mod progress;
pub mod streaks;
pub mod teams;

use chrono::NaiveDateTime;
use domain::models::Direction;
use persistence::entities::PunchRowEntity;

use crate::error::ApiError;

/// Validates and normalizes the `empCode` query parameter.
///
/// There is no implicit default employee code: a missing or blank code
/// is rejected up front.
pub(crate) fn require_emp_code(emp_code: Option<&str>) -> Result<String, ApiError> {
    let code = emp_code
        .ok_or_else(|| ApiError::MissingIdentifier("Employee code is required".into()))?;
    shared::validation::validate_employee_code(code)?;
    Ok(shared::validation::normalize_employee_code(code))
}

/// Current wall-clock time, naive local (timestamps in the punch log
/// carry no timezone).
pub(crate) fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parses raw punch rows into `(timestamp, direction)` pairs, dropping
/// rows whose direction is not a recognized in/out value.
pub(crate) fn parsed_punches(rows: &[PunchRowEntity]) -> Vec<(NaiveDateTime, Direction)> {
    rows.iter()
        .filter_map(|row| Direction::parse(&row.direction).map(|d| (row.punched_at, d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_require_emp_code_missing() {
        assert!(matches!(
            require_emp_code(None),
            Err(ApiError::MissingIdentifier(_))
        ));
    }

    #[test]
    fn test_require_emp_code_blank() {
        assert!(matches!(
            require_emp_code(Some("   ")),
            Err(ApiError::MissingIdentifier(_))
        ));
    }

    #[test]
    fn test_require_emp_code_normalizes() {
        assert_eq!(require_emp_code(Some(" 30874 ")).unwrap(), "30874");
    }

    #[test]
    fn test_parsed_punches_drops_invalid_directions() {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let rows = vec![
            PunchRowEntity { punched_at: ts, direction: "in".into() },
            PunchRowEntity { punched_at: ts, direction: "??".into() },
            PunchRowEntity { punched_at: ts, direction: "OUT".into() },
        ];
        let parsed = parsed_punches(&rows);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].1, Direction::In);
        assert_eq!(parsed[1].1, Direction::Out);
    }
}
