//! Employee directory model.

use serde::{Deserialize, Serialize};

/// Directory entry for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIdentity {
    pub employee_id: String,
    pub card_number: String,
    pub display_name: String,
    pub department: Option<String>,
}

impl EmployeeIdentity {
    /// Resolves the display name with the documented fallback chain:
    /// primary name, then short name, then `"#" + card number`.
    pub fn resolve_name(
        display_name: Option<String>,
        short_name: Option<String>,
        card_number: &str,
    ) -> String {
        display_name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| short_name.filter(|n| !n.trim().is_empty()))
            .unwrap_or_else(|| format!("#{card_number}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name_primary() {
        let name =
            EmployeeIdentity::resolve_name(Some("Jane Smith".into()), Some("JS".into()), "1001");
        assert_eq!(name, "Jane Smith");
    }

    #[test]
    fn test_resolve_name_falls_back_to_short_name() {
        let name = EmployeeIdentity::resolve_name(None, Some("JS".into()), "1001");
        assert_eq!(name, "JS");
        let blank = EmployeeIdentity::resolve_name(Some("  ".into()), Some("JS".into()), "1001");
        assert_eq!(blank, "JS");
    }

    #[test]
    fn test_resolve_name_falls_back_to_card_number() {
        let name = EmployeeIdentity::resolve_name(None, None, "1001");
        assert_eq!(name, "#1001");
    }
}
