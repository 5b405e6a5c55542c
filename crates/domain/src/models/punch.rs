//! Punch event model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Swipe direction of a punch event.
///
/// The source column is free text; values are normalized
/// case-insensitively. Anything else is invalid and excluded from the
/// consistency and break-time math, though it may still show up in raw
/// punch listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Parses a stored direction value, normalizing case.
    ///
    /// Returns `None` for values outside `{in, out}`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            _ => None,
        }
    }

    /// Lowercase wire representation (`"in"` / `"out"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

/// One card swipe as recorded by the punch clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchEvent {
    /// Stable employee identifier (distinct from the badge number).
    pub employee_code: String,
    /// Physical badge identifier; join key to the employee directory.
    pub card_number: String,
    /// Wall-clock moment of the swipe, naive local time.
    pub punched_at: NaiveDateTime,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse_case_insensitive() {
        assert_eq!(Direction::parse("IN"), Some(Direction::In));
        assert_eq!(Direction::parse("In"), Some(Direction::In));
        assert_eq!(Direction::parse(" out "), Some(Direction::Out));
        assert_eq!(Direction::parse("OUT"), Some(Direction::Out));
    }

    #[test]
    fn test_direction_parse_invalid() {
        assert_eq!(Direction::parse(""), None);
        assert_eq!(Direction::parse("inout"), None);
        assert_eq!(Direction::parse("1"), None);
    }

    #[test]
    fn test_direction_wire_format() {
        assert_eq!(Direction::In.as_str(), "in");
        assert_eq!(Direction::Out.as_str(), "out");
        assert_eq!(serde_json::to_string(&Direction::In).unwrap(), "\"in\"");
    }
}
