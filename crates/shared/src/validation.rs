//! Employee identifier validation.

use validator::ValidationError;

/// Maximum length accepted for an employee code.
const MAX_EMPLOYEE_CODE_LENGTH: usize = 32;

/// Validates an employee code: non-blank, bounded length, no whitespace.
///
/// The punch log stores codes as plain text, so the only structural
/// requirement is that a caller actually supplied one. A blank code must
/// be rejected up front rather than silently matching nothing.
pub fn validate_employee_code(code: &str) -> Result<(), ValidationError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("employee_code_blank");
        err.message = Some("Employee code must not be blank".into());
        return Err(err);
    }
    if trimmed.len() > MAX_EMPLOYEE_CODE_LENGTH {
        let mut err = ValidationError::new("employee_code_length");
        err.message = Some("Employee code is too long".into());
        return Err(err);
    }
    if trimmed.chars().any(char::is_whitespace) {
        let mut err = ValidationError::new("employee_code_whitespace");
        err.message = Some("Employee code must not contain whitespace".into());
        return Err(err);
    }
    Ok(())
}

/// Normalizes an employee code for querying (trims surrounding whitespace).
pub fn normalize_employee_code(code: &str) -> String {
    code.trim().to_string()
}
