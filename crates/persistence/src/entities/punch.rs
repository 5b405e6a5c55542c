//! Punch log entities (query projections).

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// One punch row as listed for a single employee.
///
/// The direction is carried as the lowercased source text: invalid
/// values stay visible in raw listings even though the derivations
/// ignore them.
#[derive(Debug, Clone, FromRow)]
pub struct PunchRowEntity {
    pub punched_at: NaiveDateTime,
    pub direction: String,
}

/// A punch row annotated with its badge number (global highlight queries).
#[derive(Debug, Clone, FromRow)]
pub struct CardPunchEntity {
    pub card_number: String,
    pub punched_at: NaiveDateTime,
}

/// A punch row joined against the employee directory for the activity feed.
///
/// The join is a LEFT JOIN: `employee_card` is `None` when the badge
/// number has no directory entry, in which case the feed shows a
/// placeholder name.
#[derive(Debug, Clone, FromRow)]
pub struct RecentPunchEntity {
    pub punched_at: NaiveDateTime,
    pub direction: String,
    pub employee_card: Option<String>,
    pub display_name: Option<String>,
    pub short_name: Option<String>,
}

impl RecentPunchEntity {
    /// Resolves the feed name: directory fallback chain when the badge
    /// is known, `"-"` when it is not.
    pub fn resolved_name(&self) -> String {
        match &self.employee_card {
            Some(card) => domain::models::EmployeeIdentity::resolve_name(
                self.display_name.clone(),
                self.short_name.clone(),
                card,
            ),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entity(card: Option<&str>, name: Option<&str>) -> RecentPunchEntity {
        RecentPunchEntity {
            punched_at: NaiveDate::from_ymd_opt(2026, 3, 2)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            direction: "in".into(),
            employee_card: card.map(String::from),
            display_name: name.map(String::from),
            short_name: None,
        }
    }

    #[test]
    fn test_resolved_name_known_employee() {
        assert_eq!(entity(Some("1001"), Some("Jane Smith")).resolved_name(), "Jane Smith");
    }

    #[test]
    fn test_resolved_name_known_card_without_name() {
        assert_eq!(entity(Some("1001"), None).resolved_name(), "#1001");
    }

    #[test]
    fn test_resolved_name_unknown_badge() {
        assert_eq!(entity(None, None).resolved_name(), "-");
    }
}
