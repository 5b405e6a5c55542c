//! Minutes-out (break time) endpoint.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_derivation;
use crate::routes::{local_now, parsed_punches, require_emp_code};
use domain::services::derivation;
use persistence::repositories::PunchRepository;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutesOutParams {
    pub emp_code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutesOutResponse {
    pub emp_code: String,
    pub total_minutes_out: i64,
}

/// GET /api/v1/minutes-out
///
/// Total break minutes accumulated today from paired `Out -> In`
/// intervals. A day without punches yields zero, not an error.
pub async fn minutes_out(
    State(state): State<AppState>,
    Query(params): Query<MinutesOutParams>,
) -> Result<impl IntoResponse, ApiError> {
    let emp_code = require_emp_code(params.emp_code.as_deref())?;
    let today = local_now().date();

    let repo = PunchRepository::new(state.pool.clone());
    let rows = repo.punches_on(&emp_code, today).await?;

    let total_minutes_out = derivation::minutes_out(&parsed_punches(&rows));
    record_derivation("minutes_out");

    Ok(Json(MinutesOutResponse {
        emp_code,
        total_minutes_out,
    }))
}
