//! Activity feed and punch-listing endpoints.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::require_emp_code;
use persistence::repositories::PunchRepository;
use shared::pagination::PunchLimit;

/// Number of punches in the live activity feed.
const RECENT_FEED_SIZE: i64 = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub action: String,
    pub name: String,
    pub time: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchRecord {
    pub time: NaiveDateTime,
    pub action: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchListParams {
    pub emp_code: Option<String>,
    #[serde(default)]
    pub limit: PunchLimit,
}

/// GET /api/v1/activity/recent
///
/// The three most recent punches across all employees, newest first,
/// with resolved display names. Punches whose badge has no directory
/// entry stay in the feed with a placeholder name.
pub async fn recent_activity(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = PunchRepository::new(state.pool.clone());
    let rows = repo.recent(RECENT_FEED_SIZE).await?;

    let feed: Vec<ActivityEntry> = rows
        .into_iter()
        .map(|row| ActivityEntry {
            action: row.direction.clone(),
            name: row.resolved_name(),
            time: row.punched_at,
        })
        .collect();

    Ok(Json(feed))
}

/// GET /api/v1/punches
///
/// The last N punches of one employee, newest first. The limit defaults
/// to 50 and is capped at 200.
pub async fn list_punches(
    State(state): State<AppState>,
    Query(params): Query<PunchListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let emp_code = require_emp_code(params.emp_code.as_deref())?;
    let limit = params.limit.effective();

    let repo = PunchRepository::new(state.pool.clone());
    let rows = repo.last_punches(&emp_code, limit).await?;

    let punches: Vec<PunchRecord> = rows
        .into_iter()
        .map(|row| PunchRecord {
            time: row.punched_at,
            action: row.direction,
        })
        .collect();

    Ok(Json(punches))
}
