// src/handlers/health.rs

use axum::{Json, extract::State};
use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
}

/// Liveness probe that also checks the store answers.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and store are up", body = HealthResponse),
        (status = 500, description = "Store unreachable", body = ErrorBody)
    )
)]
pub async fn health(State(pool): State<SqlitePool>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
    }))
}
