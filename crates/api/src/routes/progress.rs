//! Work-progress endpoint.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_derivation;
use crate::routes::{local_now, require_emp_code};
use domain::services::derivation;
use persistence::repositories::PunchRepository;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkProgressParams {
    pub emp_code: Option<String>,
}

/// GET /api/v1/work-progress
///
/// Progress through today's shift for one employee: first punch-in,
/// hours worked so far, minutes of shift left. 404 when the employee has
/// not punched in today.
pub async fn work_progress(
    State(state): State<AppState>,
    Query(params): Query<WorkProgressParams>,
) -> Result<impl IntoResponse, ApiError> {
    let emp_code = require_emp_code(params.emp_code.as_deref())?;
    let now = local_now();

    let repo = PunchRepository::new(state.pool.clone());
    let first_in = repo
        .first_in_on(&emp_code, now.date())
        .await?
        .ok_or_else(|| ApiError::NotFound("No punch-in record found".into()))?;

    let progress = derivation::work_progress(first_in, now, &state.shift_policy);
    record_derivation("work_progress");

    info!(
        emp_code = %emp_code,
        in_time = %progress.in_time,
        hours_worked = progress.hours_worked,
        "Computed work progress"
    );

    Ok(Json(progress))
}
