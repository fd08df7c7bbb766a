//! Health check handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /api/health - liveness plus a database ping
pub async fn health(State(state): State<ServerState>) -> Json<HealthStatus> {
    let database = match sqlx::query("SELECT 1").execute(state.get_db()).await {
        Ok(_) => "ok",
        Err(_) => "unreachable",
    };
    Json(HealthStatus {
        status: "ok",
        database,
    })
}
