//! Day-summary endpoint.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_derivation;
use crate::routes::{local_now, parsed_punches, require_emp_code};
use domain::services::derivation;
use persistence::repositories::PunchRepository;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummaryParams {
    pub emp_code: Option<String>,
    /// Calendar date (`YYYY-MM-DD`); defaults to today.
    pub date: Option<NaiveDate>,
}

/// GET /api/v1/day-summary
///
/// Full derived state for one employee on one calendar date: first in,
/// last out, elapsed hours, minutes left, punctuality. For today the
/// elapsed time runs to the current moment; for past dates to the day's
/// last out.
pub async fn day_summary(
    State(state): State<AppState>,
    Query(params): Query<DaySummaryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let emp_code = require_emp_code(params.emp_code.as_deref())?;
    let now = local_now();
    let date = params.date.unwrap_or_else(|| now.date());

    if date > now.date() {
        return Err(ApiError::InvalidParameter(
            "date cannot be in the future".into(),
        ));
    }

    let repo = PunchRepository::new(state.pool.clone());
    let rows = repo.punches_on(&emp_code, date).await?;

    let state_of_day = derivation::day_state(&parsed_punches(&rows), date, now, &state.shift_policy);
    record_derivation("day_summary");

    Ok(Json(state_of_day))
}
