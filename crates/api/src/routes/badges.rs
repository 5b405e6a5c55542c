//! Badge endpoint.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Days;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_derivation;
use crate::routes::{local_now, require_emp_code};
use domain::services::{award_badges, derivation, BadgeInputs};
use persistence::repositories::PunchRepository;

/// Trailing window the badge rules look at, in days.
const BADGE_WINDOW_DAYS: u64 = 30;

/// Hour of day from which an Out punch counts as a late checkout.
const LATE_OUT_HOUR: u32 = 18;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeParams {
    pub emp_code: Option<String>,
}

/// GET /api/v1/badges
///
/// Attendance badges earned over the trailing 30 days. An employee with
/// no qualifying history gets an empty list.
pub async fn badges(
    State(state): State<AppState>,
    Query(params): Query<BadgeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let emp_code = require_emp_code(params.emp_code.as_deref())?;
    let today = local_now().date();
    let since = today
        .checked_sub_days(Days::new(BADGE_WINDOW_DAYS - 1))
        .ok_or_else(|| ApiError::Internal("Date underflow".into()))?;

    let repo = PunchRepository::new(state.pool.clone());
    let day_first_ins = repo.day_first_ins(&emp_code, since, today).await?;
    let dates = repo.distinct_in_dates(&emp_code, today).await?;
    let late_out_count = repo
        .late_out_count(&emp_code, since, today, LATE_OUT_HOUR)
        .await?;

    let inputs = BadgeInputs {
        day_first_ins,
        streak: derivation::consistency_streak(&dates, today),
        late_out_count: late_out_count.max(0) as u32,
    };
    let earned = award_badges(&inputs, &state.shift_policy);
    record_derivation("badges");

    Ok(Json(earned))
}
