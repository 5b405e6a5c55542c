//! Employee directory entities.

use chrono::NaiveDateTime;
use domain::models::EmployeeIdentity;
use sqlx::FromRow;

/// Database row mapping for the employees table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeEntity {
    pub employee_id: String,
    pub card_number: String,
    pub display_name: Option<String>,
    pub short_name: Option<String>,
    pub department: Option<String>,
}

impl From<EmployeeEntity> for EmployeeIdentity {
    fn from(entity: EmployeeEntity) -> Self {
        let display_name = EmployeeIdentity::resolve_name(
            entity.display_name,
            entity.short_name,
            &entity.card_number,
        );
        Self {
            employee_id: entity.employee_id,
            card_number: entity.card_number,
            display_name,
            department: entity.department,
        }
    }
}

/// A department member joined with today's punch aggregates.
#[derive(Debug, Clone, FromRow)]
pub struct MemberDayEntity {
    pub employee_id: String,
    pub card_number: String,
    pub display_name: Option<String>,
    pub short_name: Option<String>,
    pub department: Option<String>,
    /// Earliest In punch today, if any.
    pub first_in: Option<NaiveDateTime>,
    /// Latest Out punch today, if any.
    pub last_out: Option<NaiveDateTime>,
}

impl MemberDayEntity {
    pub fn identity(&self) -> EmployeeIdentity {
        EmployeeEntity {
            employee_id: self.employee_id.clone(),
            card_number: self.card_number.clone(),
            display_name: self.display_name.clone(),
            short_name: self.short_name.clone(),
            department: self.department.clone(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion_resolves_name() {
        let entity = EmployeeEntity {
            employee_id: "30874".into(),
            card_number: "1001".into(),
            display_name: None,
            short_name: None,
            department: Some("Engineering".into()),
        };
        let identity: EmployeeIdentity = entity.into();
        assert_eq!(identity.display_name, "#1001");
        assert_eq!(identity.department.as_deref(), Some("Engineering"));
    }
}
