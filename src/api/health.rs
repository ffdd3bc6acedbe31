//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
    pub timestamp: String,
}

/// Liveness check including a database ping
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_up = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();

    let (status_code, status, database) = if database_up {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "down")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            checks: HealthChecks { database },
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
