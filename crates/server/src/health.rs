//! Liveness probe for the JobBridge API.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Record the moment the platform came up. Called once from serve().
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always "ok" when the handler answers at all.
    pub status: String,
    pub service: String,
    /// "connected", or the database error text.
    pub db: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health
///
/// Answers 200 even when the database is down; the `db` field carries
/// the probe result so monitors can tell the two apart.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let db = match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&pool).await {
        Ok(_) => "connected".to_string(),
        Err(e) => format!("error: {e}"),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        service: "jobbridge".to_string(),
        db,
        uptime_seconds: STARTED.get().map(|t| t.elapsed().as_secs()).unwrap_or(0),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
