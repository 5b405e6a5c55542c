//! Team/department punctuality endpoint.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_derivation;
use crate::routes::{local_now, require_emp_code};
use domain::models::{MemberStats, TeamStats};
use domain::services::derivation;
use persistence::repositories::{EmployeeRepository, PunchRepository};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamParams {
    pub emp_code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPunctualityResponse {
    pub teams: Vec<TeamStats>,
    pub members: Vec<MemberStats>,
}

/// GET /api/v1/team-punctuality
///
/// Punctuality and presence rollup for the target employee's department:
/// per-member on-time score, streak and online flag, plus the department
/// aggregate. A department with no resolvable members yields empty
/// lists, never a division error.
pub async fn team_punctuality(
    State(state): State<AppState>,
    Query(params): Query<TeamParams>,
) -> Result<impl IntoResponse, ApiError> {
    let emp_code = require_emp_code(params.emp_code.as_deref())?;
    let now = local_now();
    let today = now.date();

    let employee_repo = EmployeeRepository::new(state.pool.clone());
    let punch_repo = PunchRepository::new(state.pool.clone());

    let employee = employee_repo
        .find_by_id(&emp_code)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".into()))?;

    let Some(department) = employee.department.clone() else {
        // No department on record: nothing to aggregate.
        return Ok(Json(TeamPunctualityResponse {
            teams: Vec::new(),
            members: Vec::new(),
        }));
    };

    let rows = employee_repo
        .department_members_on(&department, today)
        .await?;

    let mut members = Vec::with_capacity(rows.len());
    for row in &rows {
        let (_, punctuality_score) = derivation::punctuality(row.first_in, &state.shift_policy);
        let is_online = derivation::is_online(row.first_in, row.last_out);
        let dates = punch_repo.distinct_in_dates(&row.employee_id, today).await?;
        let consistency_streak = derivation::consistency_streak(&dates, today);

        members.push(MemberStats {
            employee: row.identity().into(),
            punctuality_score,
            consistency_streak,
            is_online,
        });
    }

    let teams = if members.is_empty() {
        Vec::new()
    } else {
        vec![derivation::aggregate_team(&department, &members)]
    };
    record_derivation("team_punctuality");

    info!(
        emp_code = %emp_code,
        department = %department,
        members = members.len(),
        "Computed team punctuality"
    );

    Ok(Json(TeamPunctualityResponse { teams, members }))
}
