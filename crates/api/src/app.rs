use axum::{middleware, routing::get, Router};
use domain::models::ShiftPolicy;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{activity, badges, breaks, days, health, highlights, progress, streaks, teams};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub shift_policy: ShiftPolicy,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let shift_policy = config.shift_policy();
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        shift_policy,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Dashboard routes: all read-only, no write path anywhere
    let dashboard_routes = Router::new()
        .route("/api/v1/work-progress", get(progress::work_progress))
        .route(
            "/api/v1/highlights/earliest-checkin",
            get(highlights::earliest_checkin),
        )
        .route(
            "/api/v1/highlights/latest-checkout",
            get(highlights::latest_checkout),
        )
        .route("/api/v1/activity/recent", get(activity::recent_activity))
        .route("/api/v1/punches", get(activity::list_punches))
        .route("/api/v1/consistency-streak", get(streaks::consistency_streak))
        .route("/api/v1/minutes-out", get(breaks::minutes_out))
        .route("/api/v1/team-punctuality", get(teams::team_punctuality))
        .route("/api/v1/day-summary", get(days::day_summary))
        .route("/api/v1/badges", get(badges::badges));

    // Public operational routes
    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(ops_routes)
        .merge(dashboard_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
