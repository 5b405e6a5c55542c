//! Consistency-streak endpoint.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_derivation;
use crate::routes::{local_now, require_emp_code};
use domain::services::derivation;
use persistence::repositories::PunchRepository;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakParams {
    pub emp_code: Option<String>,
}

/// GET /api/v1/consistency-streak
///
/// Length of the run of consecutive attendance days ending today, and
/// whether it is still active. An employee with no punch-ins at all gets
/// `{count: 0, isActive: false}` rather than an error.
pub async fn consistency_streak(
    State(state): State<AppState>,
    Query(params): Query<StreakParams>,
) -> Result<impl IntoResponse, ApiError> {
    let emp_code = require_emp_code(params.emp_code.as_deref())?;
    let today = local_now().date();

    let repo = PunchRepository::new(state.pool.clone());
    let dates = repo.distinct_in_dates(&emp_code, today).await?;

    let streak = derivation::consistency_streak(&dates, today);
    record_derivation("consistency_streak");

    Ok(Json(streak))
}
