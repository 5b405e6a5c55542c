//! Listing limits for punch queries.

use serde::Deserialize;

/// Default number of punches returned by a listing query.
pub const DEFAULT_PUNCH_LIMIT: i64 = 50;

/// Upper bound for a caller-supplied listing limit.
pub const MAX_PUNCH_LIMIT: i64 = 200;

/// Caller-supplied listing limit, clamped to `[1, MAX_PUNCH_LIMIT]`.
///
/// An absent limit falls back to [`DEFAULT_PUNCH_LIMIT`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(transparent)]
pub struct PunchLimit(pub Option<i64>);

impl PunchLimit {
    /// Resolves the effective limit.
    pub fn effective(&self) -> i64 {
        self.0.unwrap_or(DEFAULT_PUNCH_LIMIT).clamp(1, MAX_PUNCH_LIMIT)
    }
}

impl Default for PunchLimit {
    fn default() -> Self {
        Self(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(PunchLimit(None).effective(), 50);
    }

    #[test]
    fn test_explicit_limit() {
        assert_eq!(PunchLimit(Some(25)).effective(), 25);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        assert_eq!(PunchLimit(Some(10_000)).effective(), 200);
    }

    #[test]
    fn test_limit_clamped_to_min() {
        assert_eq!(PunchLimit(Some(0)).effective(), 1);
        assert_eq!(PunchLimit(Some(-5)).effective(), 1);
    }
}
