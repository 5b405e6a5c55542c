//! Health and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Instant;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseReport,
}

#[derive(Debug, Serialize)]
pub struct DatabaseReport {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub status: &'static str,
}

async fn probe_database(state: &AppState) -> Option<u64> {
    let start = Instant::now();
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .ok()
        .map(|_| start.elapsed().as_millis() as u64)
}

/// GET /api/health
///
/// Full report including a round-trip to the database. 503 when the
/// punch store is unreachable, since every endpoint depends on it.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthReport>, StatusCode> {
    let latency_ms = probe_database(&state).await;
    let connected = latency_ms.is_some();

    let report = HealthReport {
        status: if connected { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseReport {
            connected,
            latency_ms,
        },
    };

    if connected {
        Ok(Json(report))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

/// GET /api/health/live
pub async fn live() -> Json<ProbeReport> {
    Json(ProbeReport { status: "alive" })
}

/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<ProbeReport>, StatusCode> {
    if probe_database(&state).await.is_some() {
        Ok(Json(ProbeReport { status: "ready" }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_latency() {
        let report = HealthReport {
            status: "healthy",
            version: "0.3.0",
            database: DatabaseReport {
                connected: true,
                latency_ms: Some(4),
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"]["latency_ms"], 4);
    }

    #[test]
    fn test_unreachable_database_report() {
        let report = DatabaseReport {
            connected: false,
            latency_ms: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["connected"], false);
        assert!(json["latency_ms"].is_null());
    }
}
