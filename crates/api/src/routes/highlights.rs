//! Daily highlight endpoints: first in today, last out yesterday.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Days, NaiveDateTime};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::local_now;
use domain::models::EmployeeIdentity;
use persistence::repositories::{EmployeeRepository, PunchRepository};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarliestCheckinResponse {
    pub name: String,
    pub check_in_time: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestCheckoutResponse {
    pub name: String,
    pub check_out_time: NaiveDateTime,
}

/// Resolves a badge number to a display name, falling back to
/// `"#" + card` when the directory has no entry.
async fn resolve_card_name(pool: &PgPool, card_number: &str) -> Result<String, ApiError> {
    let repo = EmployeeRepository::new(pool.clone());
    let name = match repo.find_by_card(card_number).await? {
        Some(entity) => EmployeeIdentity::from(entity).display_name,
        None => format!("#{card_number}"),
    };
    Ok(name)
}

/// GET /api/v1/highlights/earliest-checkin
///
/// The single earliest In punch across all employees today. Equal
/// timestamps resolve deterministically to the lowest card number.
pub async fn earliest_checkin(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let today = local_now().date();
    let repo = PunchRepository::new(state.pool.clone());

    let punch = repo
        .earliest_in_on(today)
        .await?
        .ok_or_else(|| ApiError::NotFound("No check-in found today".into()))?;
    let name = resolve_card_name(&state.pool, &punch.card_number).await?;

    info!(card_number = %punch.card_number, at = %punch.punched_at, "Earliest check-in");

    Ok(Json(EarliestCheckinResponse {
        name,
        check_in_time: punch.punched_at,
    }))
}

/// GET /api/v1/highlights/latest-checkout
///
/// The single latest Out punch across all employees on the previous
/// calendar day.
pub async fn latest_checkout(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let today = local_now().date();
    let yesterday = today
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| ApiError::Internal("Date underflow".into()))?;
    let repo = PunchRepository::new(state.pool.clone());

    let punch = repo
        .latest_out_on(yesterday)
        .await?
        .ok_or_else(|| ApiError::NotFound("No check-out found yesterday".into()))?;
    let name = resolve_card_name(&state.pool, &punch.card_number).await?;

    info!(card_number = %punch.card_number, at = %punch.punched_at, "Latest check-out");

    Ok(Json(LatestCheckoutResponse {
        name,
        check_out_time: punch.punched_at,
    }))
}
