use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy of the dashboard API.
///
/// Every derivation either succeeds with well-typed output or surfaces
/// one of these; there are no retries anywhere in the core.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller omitted the required employee code.
    #[error("Missing identifier: {0}")]
    MissingIdentifier(String),

    /// A request parameter was present but unusable.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No qualifying row (e.g. no punch-in today).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Repository or connection failure; details are logged server-side
    /// and never echoed to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingIdentifier(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidParameter(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody { message };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Record not found".into()),
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationError> for ApiError {
    fn from(err: validator::ValidationError) -> Self {
        let message = err
            .message
            .map(|m| m.to_string())
            .unwrap_or_else(|| "Invalid request".to_string());
        ApiError::MissingIdentifier(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_missing_identifier_maps_to_400() {
        let error = ApiError::MissingIdentifier("Employee code is required".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_parameter_maps_to_400() {
        let error = ApiError::InvalidParameter("date cannot be in the future".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::NotFound("No punch-in record found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_500_with_generic_message() {
        let error = ApiError::Internal("connection refused".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[test]
    fn test_from_sqlx_other_is_internal() {
        let error: ApiError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", ApiError::NotFound("no punches".to_string())),
            "Not found: no punches"
        );
        assert_eq!(
            format!("{}", ApiError::MissingIdentifier("empCode".to_string())),
            "Missing identifier: empCode"
        );
    }
}
